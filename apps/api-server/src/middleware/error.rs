//! Error handling - every failure renders as `{ "error": "..." }`.

use std::fmt::Display;

use actix_web::{HttpResponse, ResponseError, http::Method, http::StatusCode, http::header};
use posts_core::DomainError;
use posts_shared::ErrorResponse;

/// Methods served by the posts resource, in `Allow` header form.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE";

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Method {0} Not Allowed")]
    MethodNotAllowed(Method),

    /// The message is safe to show; the cause has already been logged.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// A storage failure. Logs `cause` and surfaces only `message`.
    pub fn persistence(message: &str, cause: impl Display) -> Self {
        tracing::error!(error = %cause, "{}", message);
        AppError::Internal(message.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let AppError::MethodNotAllowed(_) = self {
            response.insert_header((header::ALLOW, ALLOWED_METHODS));
        }
        response.json(ErrorResponse::new(self.to_string()))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            other => AppError::persistence("Internal server error", other),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
