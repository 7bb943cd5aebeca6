#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use login_page::application::services::LoginService;
use login_page::domain::entities::IdentifierKind;
use login_page::infrastructure::submit::{LocalSubmit, RemoteAuthClient};
use login_page::state::AppState;
use login_page::web;
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use wiremock::MockServer;

pub const LOGIN_PATH: &str = "/api/auth/login";

pub fn create_local_state(kind: IdentifierKind) -> AppState {
    let service = LoginService::new(Arc::new(LocalSubmit::new()), kind);
    AppState::new(Arc::new(service))
}

pub fn create_remote_state(endpoint: Url, kind: IdentifierKind) -> AppState {
    let client = RemoteAuthClient::with_timeout(endpoint, Duration::from_secs(5)).unwrap();
    let service = LoginService::new(Arc::new(client), kind);
    AppState::new(Arc::new(service))
}

pub fn endpoint_of(server: &MockServer) -> Url {
    Url::parse(&format!("{}{}", server.uri(), LOGIN_PATH)).unwrap()
}

/// Login routes without the rate limiter, which needs connect info.
pub fn login_server(state: AppState) -> TestServer {
    let app = Router::new()
        .merge(web::routes::public_routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}
