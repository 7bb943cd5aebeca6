//! Credentials entered on the login form.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which account identifier the login form asks for.
///
/// The form is the same either way; only the label and the required-field
/// message change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierKind {
    Username,
    #[default]
    Email,
}

impl IdentifierKind {
    /// Label shown next to the identifier input.
    pub fn label(&self) -> &'static str {
        match self {
            IdentifierKind::Username => "Username",
            IdentifierKind::Email => "Email",
        }
    }

    /// Message attached to the identifier field when it is left empty.
    pub fn required_message(&self) -> String {
        format!("{} is required", self.label())
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Username => f.write_str("username"),
            IdentifierKind::Email => f.write_str("email"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown identifier kind '{0}', expected 'username' or 'email'")]
pub struct ParseIdentifierKindError(String);

impl FromStr for IdentifierKind {
    type Err = ParseIdentifierKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "username" => Ok(IdentifierKind::Username),
            "email" => Ok(IdentifierKind::Email),
            other => Err(ParseIdentifierKindError(other.to_string())),
        }
    }
}

/// A validated identifier/password pair ready to be submitted.
///
/// Only constructed by [`crate::domain::entities::LoginForm::attempt_submit`]
/// once both fields passed the required-field rules. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"***")
            .finish()
    }
}
