use uuid::Uuid;

use mindscreen_core::models::record::ScreeningRecord;

/// Append-only in-memory record of completed screenings.
#[derive(Debug, Default)]
pub struct ScreeningHistory {
    records: Vec<ScreeningRecord>,
}

impl ScreeningHistory {
    pub fn record(&mut self, record: ScreeningRecord) {
        tracing::info!(
            id = %record.id,
            disease = %record.disease_code,
            answers = record.answers.len(),
            "screening recorded"
        );
        self.records.push(record);
    }

    pub fn get(&self, id: Uuid) -> Option<&ScreeningRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All records, newest first.
    pub fn list(&self) -> Vec<ScreeningRecord> {
        self.records.iter().rev().cloned().collect()
    }
}
