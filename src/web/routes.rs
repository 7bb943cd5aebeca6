//! Login page route configuration.

use crate::state::AppState;
use crate::web::handlers::{login_page_handler, login_submit_handler};
use axum::{Router, routing::get};

/// Public login routes.
///
/// # Endpoints
///
/// - `GET /login` - Empty login page
/// - `POST /login` - Submit the login form
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/login", get(login_page_handler).post(login_submit_handler))
}
