//! Failures of a solve round-trip.

use thiserror::Error;

/// Message shown when the service fails without saying why.
pub const FALLBACK_MESSAGE: &str = "An unknown error occurred.";

/// Any way a solve can fail. `Display` is the single user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputationError {
    /// Non-success HTTP status; `message` is the service's own text.
    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("Could not reach topology service: {0}")]
    Transport(String),

    #[error("Unreadable response from topology service: {0}")]
    Decode(String),

    #[error("Malformed topology result: {0}")]
    MalformedResult(String),
}

impl ComputationError {
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ComputationError::Remote { .. })
    }
}

impl From<reqwest::Error> for ComputationError {
    fn from(err: reqwest::Error) -> Self {
        ComputationError::Transport(err.to_string())
    }
}
