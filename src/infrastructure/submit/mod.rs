//! Submit strategy implementations.
//!
//! Provides two [`crate::domain::SubmitStrategy`] implementations:
//! - [`LocalSubmit`] - Accepts validated credentials without any network call
//! - [`RemoteAuthClient`] - Sends credentials to an HTTP authentication endpoint

mod local_submit;
mod remote_auth;

pub use local_submit::LocalSubmit;
pub use remote_auth::{DEFAULT_AUTH_ENDPOINT, RemoteAuthClient};
