//! Core login entities.

pub mod credentials;
pub mod login_form;
pub mod notice;
pub mod receipt;

pub use credentials::{Credentials, IdentifierKind, ParseIdentifierKindError};
pub use login_form::{Field, FieldErrors, FormPhase, LoginForm, PASSWORD_REQUIRED, SubmitAttempt};
pub use notice::Notice;
pub use receipt::{AuthResponse, LoginReceipt};
