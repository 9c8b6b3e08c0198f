//! Error taxonomy for collaborator operations.
//!
//! Errors never propagate past a reducer: effect tasks fold every failure
//! into an intent carrying the user-facing message, and renderers only
//! ever see state.

use thiserror::Error;

/// Failure reported by (or around) a collaborator call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpError {
    /// The API source reported a failure.
    #[error("{message}")]
    Api { message: String },

    /// The settings/backup store reported a failure.
    #[error("store error: {message}")]
    Store { message: String },

    /// Anything else that went wrong during an async operation.
    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl OpError {
    pub fn api(message: impl Into<String>) -> Self {
        OpError::Api {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        OpError::Store {
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        OpError::Unexpected {
            message: message.into(),
        }
    }

    /// Human-readable message placed in state for display.
    pub fn user_message(&self) -> String {
        match self {
            OpError::Api { message } => message.clone(),
            OpError::Store { message } => message.clone(),
            OpError::Unexpected { .. } => "Something went wrong. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_user_message_is_verbatim() {
        assert_eq!(OpError::api("network down").user_message(), "network down");
    }

    #[test]
    fn unexpected_user_message_is_generic() {
        let msg = OpError::unexpected("index out of bounds").user_message();
        assert!(!msg.contains("index"));
    }
}
