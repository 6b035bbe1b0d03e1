use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use courier_core::{CoreError, FieldErrors, Outcome};

use crate::response::respond;

/// Application-level error type for Axum handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the request-parsing
/// failures axum reports. Every variant is classified into an [`Outcome`]
/// exactly once, in [`AppError::into_outcome`], so clients always receive a
/// standard envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `courier_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body was not valid JSON for the expected type.
    #[error("Invalid JSON body: {0}")]
    Json(#[from] JsonRejection),

    /// The query string did not match the expected parameters.
    #[error("Invalid query string: {0}")]
    Query(#[from] QueryRejection),

    /// A path parameter could not be decoded.
    #[error("Invalid path parameter: {0}")]
    Path(#[from] PathRejection),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Classify this error. Internal details are logged here and never
    /// reach the response body.
    pub fn into_outcome<T>(self) -> Outcome<T> {
        match self {
            AppError::Core(core) => {
                match &core {
                    CoreError::Internal(msg) | CoreError::InvalidArgument(msg) => {
                        tracing::error!(error = %msg, "Internal core error");
                    }
                    CoreError::RateLimited(msg) => {
                        tracing::warn!(reason = %msg, "Request rate limited");
                    }
                    CoreError::Validation(errors) if errors.is_empty() => {
                        tracing::error!("Validation error carried no field errors");
                    }
                    _ => {}
                }
                core.into()
            }
            AppError::Json(rejection) => rejection_outcome("body", rejection.body_text()),
            AppError::Query(rejection) => rejection_outcome("query", rejection.body_text()),
            AppError::Path(rejection) => rejection_outcome("path", rejection.body_text()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                Outcome::internal_fault()
            }
        }
    }
}

fn rejection_outcome<T>(field: &str, detail: String) -> Outcome<T> {
    let mut errors = FieldErrors::new();
    errors.push(field, detail);
    CoreError::Validation(errors).into()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        respond(self.into_outcome::<()>())
    }
}
