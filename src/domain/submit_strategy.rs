//! Pluggable final step of a login submission.

use async_trait::async_trait;

use super::auth_error::AuthError;
use super::entities::{Credentials, LoginReceipt};

/// Decides what happens to credentials that passed validation.
///
/// # Implementations
///
/// - [`crate::infrastructure::submit::LocalSubmit`] - accepts without a network call
/// - [`crate::infrastructure::submit::RemoteAuthClient`] - POSTs to an authentication endpoint
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitStrategy: Send + Sync {
    /// Short name used in logs and the health document.
    fn name(&self) -> &'static str;

    /// Submits one set of credentials.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidCredentials`] when the credentials were refused
    /// - [`AuthError::Rejected`] for any other unsuccessful answer
    /// - [`AuthError::Transport`] when no answer was received
    async fn submit(&self, credentials: &Credentials) -> Result<LoginReceipt, AuthError>;
}
