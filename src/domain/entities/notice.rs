//! User-facing alerts raised by a failed submission.

use std::fmt;

/// Blocking alert shown after the submit strategy failed.
///
/// Deliberately coarse: the user only learns whether the credentials were
/// refused or something else went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    InvalidCredentials,
    Generic,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::InvalidCredentials => "Invalid credentials",
            Notice::Generic => "Something went wrong",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
