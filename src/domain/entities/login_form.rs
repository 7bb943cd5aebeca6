//! Login form state and its submission state machine.
//!
//! The form is a plain value: every event consumes the current form and
//! returns the next one, so a caller always holds exactly one consistent
//! snapshot of the editable fields, their validation errors and the phase.

use std::collections::BTreeMap;

use validator::Validate;

use super::credentials::{Credentials, IdentifierKind};

/// Message attached to the password field when it is left empty.
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Editable fields of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Identifier,
    Password,
}

impl Field {
    /// Name used for the field in HTML forms and validation reports.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Identifier => "identifier",
            Field::Password => "password",
        }
    }
}

/// Per-field validation messages from the latest submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

/// Lifecycle phase of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// A valid submission is waiting on the submit strategy.
    Submitting,
}

/// Editable login form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, code = "required"))]
    identifier: String,
    #[validate(length(min = 1, code = "required"))]
    password: String,
    errors: FieldErrors,
    phase: FormPhase,
}

/// Result of [`LoginForm::attempt_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Required-field rules failed; the form carries the new errors.
    Invalid(LoginForm),
    /// Both fields are present; the form is now [`FormPhase::Submitting`].
    Ready {
        form: LoginForm,
        credentials: Credentials,
    },
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Identifier => &self.identifier,
            Field::Password => &self.password,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Replaces the value of one field.
    ///
    /// Errors from the previous attempt are left as they are; they are only
    /// re-derived on the next submission attempt.
    pub fn edit(self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            Field::Identifier => Self {
                identifier: value,
                ..self
            },
            Field::Password => Self {
                password: value,
                ..self
            },
        }
    }

    /// Runs the required-field rules.
    ///
    /// Prior errors are always discarded first. When a rule fails the form
    /// stays in [`FormPhase::Editing`] and no credentials are produced.
    pub fn attempt_submit(self, kind: IdentifierKind) -> SubmitAttempt {
        let mut form = Self {
            errors: FieldErrors::default(),
            ..self
        };

        if let Err(failures) = form.validate() {
            let failed = failures.field_errors();
            if failed.contains_key(Field::Identifier.name()) {
                form.errors.insert(Field::Identifier, kind.required_message());
            }
            if failed.contains_key(Field::Password.name()) {
                form.errors.insert(Field::Password, PASSWORD_REQUIRED);
            }
            form.phase = FormPhase::Editing;
            return SubmitAttempt::Invalid(form);
        }

        let credentials = Credentials::new(form.identifier.clone(), form.password.clone());
        form.phase = FormPhase::Submitting;
        SubmitAttempt::Ready { form, credentials }
    }

    /// Leaves [`FormPhase::Submitting`] once the submit strategy has answered.
    pub fn finish_submit(self) -> Self {
        Self {
            phase: FormPhase::Editing,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(attempt: SubmitAttempt) -> LoginForm {
        match attempt {
            SubmitAttempt::Invalid(form) => form,
            SubmitAttempt::Ready { .. } => panic!("expected validation to fail"),
        }
    }

    #[test]
    fn test_empty_form_reports_both_fields() {
        let form = invalid(LoginForm::new().attempt_submit(IdentifierKind::Username));

        assert_eq!(form.errors().len(), 2);
        assert_eq!(form.error(Field::Identifier), Some("Username is required"));
        assert_eq!(form.error(Field::Password), Some(PASSWORD_REQUIRED));
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_only_password_reports_identifier() {
        let form = invalid(
            LoginForm::new()
                .edit(Field::Password, "secret")
                .attempt_submit(IdentifierKind::Email),
        );

        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.error(Field::Identifier), Some("Email is required"));
        assert_eq!(form.error(Field::Password), None);
    }

    #[test]
    fn test_valid_form_produces_credentials() {
        let attempt = LoginForm::new()
            .edit(Field::Identifier, "alice@example.com")
            .edit(Field::Password, "secret")
            .attempt_submit(IdentifierKind::Email);

        match attempt {
            SubmitAttempt::Ready { form, credentials } => {
                assert_eq!(credentials, Credentials::new("alice@example.com", "secret"));
                assert_eq!(form.phase(), FormPhase::Submitting);
                assert!(form.errors().is_empty());
                assert_eq!(form.finish_submit().phase(), FormPhase::Editing);
            }
            SubmitAttempt::Invalid(form) => panic!("unexpected errors: {:?}", form.errors()),
        }
    }

    #[test]
    fn test_errors_are_replaced_not_accumulated() {
        let form = invalid(LoginForm::new().attempt_submit(IdentifierKind::Email));
        let form = invalid(
            form.edit(Field::Identifier, "alice@example.com")
                .attempt_submit(IdentifierKind::Email),
        );

        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.error(Field::Identifier), None);
        assert_eq!(form.error(Field::Password), Some(PASSWORD_REQUIRED));
    }

    #[test]
    fn test_edit_after_failed_attempt_updates_value_and_keeps_errors() {
        let form = invalid(LoginForm::new().attempt_submit(IdentifierKind::Email));
        let form = form.edit(Field::Identifier, "a");

        assert_eq!(form.value(Field::Identifier), "a");
        assert_eq!(form.error(Field::Identifier), Some("Email is required"));

        let form = form.edit(Field::Identifier, "al");
        assert_eq!(form.identifier(), "al");
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let attempt = LoginForm::new()
            .edit(Field::Identifier, " ")
            .edit(Field::Password, " ")
            .attempt_submit(IdentifierKind::Username);

        assert!(matches!(attempt, SubmitAttempt::Ready { .. }));
    }
}
