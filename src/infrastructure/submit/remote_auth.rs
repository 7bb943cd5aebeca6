//! HTTP client for the remote authentication endpoint.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, error, warn};
use url::Url;

use crate::domain::entities::{AuthResponse, Credentials, LoginReceipt};
use crate::domain::{AuthError, SubmitStrategy};

/// Endpoint used when `AUTH_ENDPOINT` is not configured.
pub const DEFAULT_AUTH_ENDPOINT: &str = "http://localhost:8080/api/auth/login";

/// JSON body expected by the authentication endpoint.
///
/// The identifier is always sent as `email`, whatever label the form shows.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Submits credentials with a single `POST` to an authentication endpoint.
///
/// One request per call: no retries, and no cancellation once sent. The only
/// deadline is the request timeout configured on the underlying client.
///
/// # Status Mapping
///
/// - `2xx` - success; the body is parsed as [`AuthResponse`] if it is JSON
/// - `401` - [`AuthError::InvalidCredentials`]
/// - any other status - [`AuthError::Rejected`]
/// - no response - [`AuthError::Transport`]
#[derive(Debug, Clone)]
pub struct RemoteAuthClient {
    http: Client,
    endpoint: Url,
}

impl RemoteAuthClient {
    /// Wraps an existing HTTP client.
    pub fn new(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// Builds a dedicated HTTP client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn with_timeout(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self::new(http, endpoint))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitStrategy for RemoteAuthClient {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn submit(&self, credentials: &Credentials) -> Result<LoginReceipt, AuthError> {
        debug!(endpoint = %self.endpoint, identifier = %credentials.identifier, "Sending login request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&LoginRequest {
                email: &credentials.identifier,
                password: &credentials.password,
            })
            .send()
            .await
            .map_err(|e| {
                error!(endpoint = %self.endpoint, error = %e, "Login request failed");
                AuthError::Transport(Box::new(e))
            })?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidCredentials);
        }

        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
            });
        }

        let body = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice::<AuthResponse>(&bytes).ok(),
            Err(e) => {
                warn!(error = %e, "Failed to read login response body");
                None
            }
        };

        Ok(LoginReceipt::Remote {
            status: status.as_u16(),
            body,
            received_at: Utc::now(),
        })
    }
}
