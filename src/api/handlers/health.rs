//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service liveness and the active login configuration.
///
/// # Endpoint
///
/// `GET /health`
///
/// The authentication endpoint is not contacted: a probe would have to send
/// credentials, so only the configured strategy is reported.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "login": {
///       "status": "ok",
///       "message": "Strategy: remote, identifier: email"
///     }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let login = CheckStatus {
        status: "ok".to_string(),
        message: Some(format!(
            "Strategy: {}, identifier: {}",
            state.login_service.strategy_name(),
            state.login_service.identifier_kind()
        )),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { login },
    })
}
