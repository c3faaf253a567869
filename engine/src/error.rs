use shared::models::ParticipantId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillError {
    #[error("Participant not found: {0}")]
    ParticipantNotFound(ParticipantId),

    #[error("Invalid item price '{raw}': {reason}")]
    InvalidPrice { raw: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

impl BillError {
    /// Whether the error came from user input rather than from a caller bug or bad config.
    pub fn is_input_error(&self) -> bool {
        matches!(self, BillError::InvalidPrice { .. })
    }
}
