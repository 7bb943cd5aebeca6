//! Submit strategy that never leaves the process.

use async_trait::async_trait;
use tracing::info;

use crate::domain::entities::{Credentials, LoginReceipt};
use crate::domain::{AuthError, SubmitStrategy};

/// Accepts any credentials that passed validation and only logs them.
///
/// The password is never logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSubmit;

impl LocalSubmit {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmitStrategy for LocalSubmit {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn submit(&self, credentials: &Credentials) -> Result<LoginReceipt, AuthError> {
        info!(identifier = %credentials.identifier, "Credentials accepted locally");

        Ok(LoginReceipt::Local {
            identifier: credentials.identifier.clone(),
        })
    }
}
