//! Login page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::application::services::{SubmissionOutcome, SubmissionResult};
use crate::domain::entities::{Field, IdentifierKind, LoginForm, Notice};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::components::{InputKind, LabeledInput};

/// Fields posted by the login form.
///
/// Missing fields deserialize as empty strings so they are reported by the
/// required-field rules instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub password: String,
}

impl LoginPayload {
    /// Applies the posted values to a fresh form as two field edits.
    pub fn into_form(self) -> LoginForm {
        LoginForm::new()
            .edit(Field::Identifier, self.identifier)
            .edit(Field::Password, self.password)
    }
}

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Identifier and password inputs (pre-rendered [`LabeledInput`]s)
/// - A blocking alert dialog when the last submission failed
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    identifier_input: String,
    password_input: String,
    notice: Option<&'static str>,
}

impl LoginTemplate {
    /// Builds the page for the given form state.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the inputs fails to render.
    pub fn new(
        form: &LoginForm,
        kind: IdentifierKind,
        notice: Option<Notice>,
    ) -> Result<Self, askama::Error> {
        let identifier_input = LabeledInput::new(
            kind.label(),
            Field::Identifier.name(),
            form.identifier(),
        )
        .error(form.error(Field::Identifier))
        .render()?;

        // The password never travels back to the browser.
        let password_input = LabeledInput::new("Password", Field::Password.name(), "")
            .kind(InputKind::Password)
            .error(form.error(Field::Password))
            .render()?;

        Ok(Self {
            identifier_input,
            password_input,
            notice: notice.map(|n| n.message()),
        })
    }
}

/// Renders an empty login page.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_page_handler(State(state): State<AppState>) -> Result<LoginTemplate, AppError> {
    let kind = state.login_service.identifier_kind();
    Ok(LoginTemplate::new(&LoginForm::new(), kind, None)?)
}

/// Runs one submission attempt and re-renders the page with its result.
///
/// # Endpoint
///
/// `POST /login` (`application/x-www-form-urlencoded`)
///
/// # Response Codes
///
/// - **200 OK**: credentials accepted
/// - **422 Unprocessable Entity**: a required field is empty (inline errors)
/// - **401 Unauthorized**: credentials refused (alert)
/// - **502 Bad Gateway**: any other failure (alert)
///
/// The identifier is kept in the re-rendered page in every case; the
/// password input is always rendered empty.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(payload): Form<LoginPayload>,
) -> Result<(StatusCode, LoginTemplate), AppError> {
    let SubmissionResult { form, outcome } = state.login_service.submit(payload.into_form()).await;

    let (status, notice) = match outcome {
        SubmissionOutcome::Accepted(_) => (StatusCode::OK, None),
        SubmissionOutcome::Invalid => (StatusCode::UNPROCESSABLE_ENTITY, None),
        SubmissionOutcome::Failed(notice @ Notice::InvalidCredentials) => {
            (StatusCode::UNAUTHORIZED, Some(notice))
        }
        SubmissionOutcome::Failed(notice @ Notice::Generic) => {
            (StatusCode::BAD_GATEWAY, Some(notice))
        }
    };

    let page = LoginTemplate::new(&form, state.login_service.identifier_kind(), notice)?;
    Ok((status, page))
}
