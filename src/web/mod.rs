//! Web layer serving the login page.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`components`] - Reusable fragments such as the labeled input
//! - [`handlers`] - Page rendering and form submission handlers
//! - [`routes`] - Login page route configuration

pub mod components;
pub mod handlers;
pub mod routes;
