//! Domain layer: login form state, credentials and the submit contract.
//!
//! # Architecture
//!
//! - [`entities`] - Form state machine, credentials, receipts and notices
//! - [`auth_error`] - Failures a submit strategy can report
//! - [`submit_strategy`] - Trait implemented by the infrastructure layer
//!
//! # Submission Flow
//!
//! 1. Field edits replace values on [`entities::LoginForm`]
//! 2. [`entities::LoginForm::attempt_submit`] clears old errors and checks required fields
//! 3. Valid credentials go to a [`submit_strategy::SubmitStrategy`]
//! 4. Failures become a [`entities::Notice`] via [`auth_error::AuthError::notice`]

pub mod auth_error;
pub mod entities;
pub mod submit_strategy;

pub use auth_error::AuthError;
pub use submit_strategy::SubmitStrategy;

#[cfg(test)]
pub use submit_strategy::MockSubmitStrategy;
