//! Extractors whose rejections are reported as standard envelopes.
//!
//! - [`ValidatedJson`] -- JSON body checked with `validator::Validate`.
//! - [`ApiQuery`] -- query string parsed with `serde`.
//! - [`ApiPath`] -- path parameters parsed with `serde`.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use courier_core::{CoreError, FieldErrors};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has passed its `#[validate(...)]` rules.
///
/// Malformed JSON is rejected with a 422 carrying a `body` entry; rule
/// violations are rejected with a 422 listing every failing field.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value.validate().map_err(|report| {
            let mut errors = FieldErrors::from_validator(&report);
            if errors.is_empty() {
                errors.push("body", report.to_string());
            }
            CoreError::Validation(errors)
        })?;

        Ok(Self(value))
    }
}

/// Query string parameters with envelope-shaped rejections.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// Path parameters with envelope-shaped rejections.
///
/// A segment that fails to decode (e.g. invalid UTF-8) is a 422 carrying a
/// `path` entry instead of axum's plain-text 400.
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
