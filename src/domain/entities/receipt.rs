//! Outcome of a successful login submission.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Body returned by the authentication endpoint on success.
///
/// Every field is optional: the body is inspected for logging only and a
/// backend that answers with less (or with no JSON at all) still counts as a
/// successful login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub expiration_time: Option<i64>,
}

/// What a submit strategy reports after accepting the credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginReceipt {
    /// Accepted without leaving the process.
    Local { identifier: String },
    /// Accepted by the remote authentication endpoint.
    Remote {
        status: u16,
        body: Option<AuthResponse>,
        received_at: DateTime<Utc>,
    },
}

impl LoginReceipt {
    /// Short description safe to log: never includes tokens.
    pub fn summary(&self) -> String {
        match self {
            LoginReceipt::Local { identifier } => format!("accepted locally for {identifier}"),
            LoginReceipt::Remote { status, body, .. } => match body {
                Some(body) => format!(
                    "status {status}, token issued: {}, refresh token issued: {}, expires in: {}",
                    body.token.is_some(),
                    body.refresh_token.is_some(),
                    body.expiration_time
                        .map(|ms| format!("{ms}ms"))
                        .unwrap_or_else(|| "unknown".to_string()),
                ),
                None => format!("status {status}, no JSON body"),
            },
        }
    }
}
