use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FraudRoiError {
    #[error("Out of range: {field} = {value} (allowed {min}..={max})")]
    OutOfRange {
        field: String,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("Invalid assumption: {field} — {reason}")]
    InvalidAssumption { field: String, reason: String },

    #[error("Unknown input field: {0}")]
    UnknownField(String),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Unknown approach: {0}")]
    UnknownApproach(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FraudRoiError {
    fn from(e: serde_json::Error) -> Self {
        FraudRoiError::SerializationError(e.to_string())
    }
}
