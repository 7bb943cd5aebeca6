//! Failures reported by a submit strategy.

use thiserror::Error;

use super::entities::Notice;

/// Why a submission was not accepted.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The endpoint answered `401 Unauthorized`.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The endpoint answered with any other non-success status.
    #[error("authentication endpoint answered with status {status}")]
    Rejected { status: u16 },

    /// The request never produced a response.
    #[error("authentication request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AuthError {
    /// Maps the failure onto the alert shown to the user.
    pub fn notice(&self) -> Notice {
        match self {
            AuthError::InvalidCredentials => Notice::InvalidCredentials,
            AuthError::Rejected { .. } | AuthError::Transport(_) => Notice::Generic,
        }
    }
}
