//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LoginService;

/// Application state cloned into each request.
///
/// Immutable after startup; the HTTP client inside the login service is
/// internally pooled and synchronized.
#[derive(Clone)]
pub struct AppState {
    pub login_service: Arc<LoginService>,
}

impl AppState {
    pub fn new(login_service: Arc<LoginService>) -> Self {
        Self { login_service }
    }
}
