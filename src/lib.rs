//! # Login Page
//!
//! A server-rendered login page built with Axum and Askama.
//!
//! The page collects an identifier (username or email) and a password,
//! checks that both are present, and hands valid credentials to a pluggable
//! submit strategy: either a local no-op or a `POST` to a remote
//! authentication endpoint. Failures surface as a blocking alert with two
//! possible messages: invalid credentials, or a generic error.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Form state machine, credentials and the submit contract
//! - **Application Layer** ([`application`]) - Submission orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Local and HTTP submit strategies
//! - **API Layer** ([`api`]) - Health check, fallback and shared middleware
//! - **Web Layer** ([`web`]) - Labeled input component and login page
//!
//! ## Quick Start
//!
//! ```bash
//! # Submit to a local backend
//! export AUTH_ENDPOINT="http://localhost:8080/api/auth/login"
//! cargo run
//!
//! # Or validate only, without any backend
//! SUBMIT_MODE=local cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LoginService, SubmissionOutcome, SubmissionResult};
    pub use crate::domain::entities::{
        Credentials, Field, IdentifierKind, LoginForm, LoginReceipt, Notice,
    };
    pub use crate::domain::{AuthError, SubmitStrategy};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
