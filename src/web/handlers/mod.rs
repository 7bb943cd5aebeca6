//! HTML template rendering handlers for the login page.

mod login;

pub use login::{LoginPayload, LoginTemplate, login_page_handler, login_submit_handler};
