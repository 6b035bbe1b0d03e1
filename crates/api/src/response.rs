//! Response adapter between [`courier_core`] and axum.
//!
//! Handlers return [`ApiResponse`] (usually inside an
//! [`AppResult`](crate::error::AppResult)); the body is always the standard
//! `{ "isSuccess", "message", "data", "validationErrors"? }` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use courier_core::{map, Outcome, Status};
use serde::Serialize;

/// An [`Outcome`] ready to be written as an HTTP response.
///
/// # Example
///
/// ```ignore
/// Ok(ApiResponse::from(Outcome::success(user)))
/// ```
#[derive(Debug)]
pub struct ApiResponse<T>(pub Outcome<T>);

impl<T> From<Outcome<T>> for ApiResponse<T> {
    fn from(outcome: Outcome<T>) -> Self {
        Self(outcome)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        respond(self.0)
    }
}

/// Map an outcome and write the status and envelope unchanged.
pub fn respond<T: Serialize>(outcome: Outcome<T>) -> Response {
    let (status, envelope) = map(outcome);
    (status_code(status), Json(envelope)).into_response()
}

/// Translate the core status into axum's status type.
pub fn status_code(status: Status) -> StatusCode {
    match status {
        Status::Ok => StatusCode::OK,
        Status::Created => StatusCode::CREATED,
        Status::Unauthorized => StatusCode::UNAUTHORIZED,
        Status::Forbidden => StatusCode::FORBIDDEN,
        Status::NotFound => StatusCode::NOT_FOUND,
        Status::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
        Status::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
        Status::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
