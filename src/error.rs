use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors returned by HTTP handlers.
///
/// Login failures are not errors at this level: they are rendered back into
/// the page. These variants cover requests the page cannot answer at all.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn parts(self) -> (StatusCode, ErrorInfo) {
        match self {
            AppError::NotFound { message, details } => (
                StatusCode::NOT_FOUND,
                ErrorInfo {
                    code: "not_found",
                    message,
                    details,
                },
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorInfo {
                    code: "internal_error",
                    message,
                    details,
                },
            ),
        }
    }

    pub fn to_error_info(self) -> ErrorInfo {
        self.parts().1
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.parts();
        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        tracing::error!(error = %e, "Template rendering failed");
        AppError::internal("Failed to render page", json!({}))
    }
}
