//! Login submission orchestration.

use std::sync::Arc;

use crate::domain::SubmitStrategy;
use crate::domain::entities::{IdentifierKind, LoginForm, LoginReceipt, Notice, SubmitAttempt};

/// How a submission attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Required fields were missing; nothing was sent.
    Invalid,
    /// The submit strategy accepted the credentials.
    Accepted(LoginReceipt),
    /// The submit strategy failed; the user sees this alert.
    Failed(Notice),
}

/// Form state after an attempt, together with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub form: LoginForm,
    pub outcome: SubmissionOutcome,
}

impl SubmissionResult {
    /// Alert to show, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self.outcome {
            SubmissionOutcome::Failed(notice) => Some(notice),
            _ => None,
        }
    }
}

/// Service running one submission attempt end to end.
///
/// Validation happens first; only a valid form reaches the submit strategy.
/// Attempts are independent: nothing prevents two overlapping attempts from
/// the same user, and each one issues its own request.
pub struct LoginService {
    strategy: Arc<dyn SubmitStrategy>,
    identifier_kind: IdentifierKind,
}

impl LoginService {
    /// Creates a new login service.
    ///
    /// # Arguments
    ///
    /// - `strategy` - what to do with credentials that passed validation
    /// - `identifier_kind` - whether the form asks for a username or an email
    pub fn new(strategy: Arc<dyn SubmitStrategy>, identifier_kind: IdentifierKind) -> Self {
        Self {
            strategy,
            identifier_kind,
        }
    }

    pub fn identifier_kind(&self) -> IdentifierKind {
        self.identifier_kind
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Validates the form and, if valid, hands the credentials to the strategy.
    ///
    /// Never fails: strategy errors are logged and converted into a [`Notice`].
    pub async fn submit(&self, form: LoginForm) -> SubmissionResult {
        let (form, credentials) = match form.attempt_submit(self.identifier_kind) {
            SubmitAttempt::Invalid(form) => {
                tracing::debug!(
                    errors = form.errors().len(),
                    "Login form failed required-field validation"
                );
                return SubmissionResult {
                    form,
                    outcome: SubmissionOutcome::Invalid,
                };
            }
            SubmitAttempt::Ready { form, credentials } => (form, credentials),
        };

        let outcome = match self.strategy.submit(&credentials).await {
            Ok(receipt) => {
                tracing::info!(
                    strategy = self.strategy.name(),
                    "Login accepted: {}",
                    receipt.summary()
                );
                SubmissionOutcome::Accepted(receipt)
            }
            Err(e) => {
                let notice = e.notice();
                tracing::warn!(
                    strategy = self.strategy.name(),
                    error = %e,
                    notice = %notice,
                    "Login failed"
                );
                SubmissionOutcome::Failed(notice)
            }
        };

        SubmissionResult {
            form: form.finish_submit(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Credentials, Field, FormPhase};
    use crate::domain::{AuthError, MockSubmitStrategy};

    fn service(mock: MockSubmitStrategy) -> LoginService {
        LoginService::new(Arc::new(mock), IdentifierKind::Email)
    }

    fn mock_strategy() -> MockSubmitStrategy {
        let mut mock = MockSubmitStrategy::new();
        mock.expect_name().return_const("mock");
        mock
    }

    fn filled_form() -> LoginForm {
        LoginForm::new()
            .edit(Field::Identifier, "alice@example.com")
            .edit(Field::Password, "s3cret")
    }

    #[tokio::test]
    async fn test_empty_form_never_reaches_strategy() {
        let mut mock = mock_strategy();
        mock.expect_submit().times(0);

        let result = service(mock).submit(LoginForm::new()).await;

        assert_eq!(result.outcome, SubmissionOutcome::Invalid);
        assert_eq!(result.form.errors().len(), 2);
        assert_eq!(result.notice(), None);
    }

    #[tokio::test]
    async fn test_only_password_reports_identifier_error() {
        let mut mock = mock_strategy();
        mock.expect_submit().times(0);

        let form = LoginForm::new().edit(Field::Password, "s3cret");
        let result = service(mock).submit(form).await;

        assert_eq!(result.outcome, SubmissionOutcome::Invalid);
        assert_eq!(result.form.errors().len(), 1);
        assert_eq!(
            result.form.error(Field::Identifier),
            Some("Email is required")
        );
    }

    #[tokio::test]
    async fn test_success_submits_exact_values_once() {
        let mut mock = mock_strategy();
        mock.expect_submit()
            .withf(|credentials| {
                *credentials == Credentials::new("alice@example.com", "s3cret")
            })
            .times(1)
            .returning(|credentials| {
                Ok(LoginReceipt::Local {
                    identifier: credentials.identifier.clone(),
                })
            });

        let result = service(mock).submit(filled_form()).await;

        assert!(matches!(result.outcome, SubmissionOutcome::Accepted(_)));
        assert_eq!(result.notice(), None);
        assert_eq!(result.form.phase(), FormPhase::Editing);
        assert_eq!(result.form.identifier(), "alice@example.com");
    }

    #[tokio::test]
    async fn test_unauthorized_shows_invalid_credentials() {
        let mut mock = mock_strategy();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(AuthError::InvalidCredentials));

        let result = service(mock).submit(filled_form()).await;

        assert_eq!(result.notice(), Some(Notice::InvalidCredentials));
        assert!(result.form.errors().is_empty());
    }

    #[tokio::test]
    async fn test_other_failures_show_generic_notice() {
        let mut mock = mock_strategy();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(AuthError::Rejected { status: 500 }));

        let result = service(mock).submit(filled_form()).await;
        assert_eq!(result.notice(), Some(Notice::Generic));

        let mut mock = mock_strategy();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(AuthError::Transport("connection reset".into())));

        let result = service(mock).submit(filled_form()).await;
        assert_eq!(result.notice(), Some(Notice::Generic));
    }

    #[tokio::test]
    async fn test_failed_attempt_clears_previous_errors() {
        let mut mock = mock_strategy();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(AuthError::InvalidCredentials));
        let service = service(mock);

        let first = service.submit(LoginForm::new()).await;
        let form = first
            .form
            .edit(Field::Identifier, "alice@example.com")
            .edit(Field::Password, "wrong");
        let second = service.submit(form).await;

        assert!(second.form.errors().is_empty());
        assert_eq!(second.notice(), Some(Notice::InvalidCredentials));
    }
}
