//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Redirects to the login page
//! - `GET  /login`   - Login page (rate limited)
//! - `POST /login`   - Login form submission (rate limited)
//! - `GET  /health`  - Liveness and login configuration
//!
//! Unknown paths answer with a JSON `404`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/login`
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The rate limiter keys on the peer address, so the result must be served
/// with connect info (see [`crate::server::run`]).
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let web_public = web::routes::public_routes().layer(rate_limit::login_layer());

    let router = Router::new()
        .route("/", get(|| async { Redirect::to("/login") }))
        .route("/health", get(health_handler))
        .merge(web_public)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
