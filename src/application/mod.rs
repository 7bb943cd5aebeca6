//! Application layer services implementing business logic.
//!
//! Services consume domain traits and provide a clean API for HTTP handlers
//! and the terminal front-end.
//!
//! # Available Services
//!
//! - [`services::login_service::LoginService`] - Validation and submission of the login form

pub mod services;
