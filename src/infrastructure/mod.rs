//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`submit`] - Local and HTTP-backed submit strategies

pub mod submit;
