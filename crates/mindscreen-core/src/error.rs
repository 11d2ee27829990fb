use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("confidence for {field} must be between 0 and 1, got {value}")]
    InvalidConfidence { field: String, value: f64 },

    #[error("confidence for {field} is not a number: {raw:?}")]
    UnparsableConfidence { field: String, raw: String },
}
