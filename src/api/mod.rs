//! JSON API layer and shared HTTP middleware.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for response serialization
//! - [`handlers`] - Health check and fallback handlers
//! - [`middleware`] - Rate limiting and request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
