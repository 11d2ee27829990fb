pub mod answer;
pub mod disease;
pub mod record;
pub mod report;
pub mod rule;
pub mod screening;
pub mod symptom;
