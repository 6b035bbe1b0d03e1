//! What happened while handling a request, before it reaches the wire.
//!
//! Application code builds exactly one [`Outcome`] per request and hands it to
//! [`map`](crate::mapper::map). Each constructor fills the variant's default
//! message; chain [`Outcome::with_message`] to replace it.

use crate::error::CoreError;
use crate::field_errors::FieldErrors;
use crate::status::Status;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The request succeeded and produced a payload.
    Success { payload: T, message: String },
    /// The request succeeded with nothing to return (e.g. a deletion).
    SuccessEmpty { message: String },
    NotFound { message: String },
    ValidationFailed { errors: FieldErrors, message: String },
    Unauthorized { message: String },
    Forbidden { message: String },
    RateLimited { message: String },
    /// Catch-all for faults nobody classified.
    InternalFault { message: String },
}

/// Fieldless discriminant of [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Success,
    SuccessEmpty,
    NotFound,
    ValidationFailed,
    Unauthorized,
    Forbidden,
    RateLimited,
    InternalFault,
}

impl OutcomeKind {
    pub const ALL: [OutcomeKind; 8] = [
        OutcomeKind::Success,
        OutcomeKind::SuccessEmpty,
        OutcomeKind::NotFound,
        OutcomeKind::ValidationFailed,
        OutcomeKind::Unauthorized,
        OutcomeKind::Forbidden,
        OutcomeKind::RateLimited,
        OutcomeKind::InternalFault,
    ];

    /// Status code this kind maps to.
    ///
    /// 200 versus 201 follows payload presence: `Success` always carries a
    /// payload, `SuccessEmpty` never does, regardless of the HTTP verb.
    pub const fn status(self) -> Status {
        match self {
            OutcomeKind::Success => Status::Ok,
            OutcomeKind::SuccessEmpty => Status::Created,
            OutcomeKind::NotFound => Status::NotFound,
            OutcomeKind::ValidationFailed => Status::UnprocessableEntity,
            OutcomeKind::Unauthorized => Status::Unauthorized,
            OutcomeKind::Forbidden => Status::Forbidden,
            OutcomeKind::RateLimited => Status::TooManyRequests,
            OutcomeKind::InternalFault => Status::InternalServerError,
        }
    }

    pub const fn default_message(self) -> &'static str {
        match self {
            OutcomeKind::Success | OutcomeKind::SuccessEmpty => "Request processed successfully",
            OutcomeKind::NotFound => "Resource not found",
            OutcomeKind::ValidationFailed => "Validation errors occurred",
            OutcomeKind::Unauthorized => "Unauthorized",
            OutcomeKind::Forbidden => "Forbidden",
            OutcomeKind::RateLimited => "Too many requests",
            OutcomeKind::InternalFault => "Internal server error",
        }
    }
}

impl<T> Outcome<T> {
    pub fn success(payload: T) -> Self {
        Outcome::Success {
            payload,
            message: OutcomeKind::Success.default_message().to_owned(),
        }
    }

    pub fn success_empty() -> Self {
        Outcome::SuccessEmpty {
            message: OutcomeKind::SuccessEmpty.default_message().to_owned(),
        }
    }

    pub fn not_found() -> Self {
        Outcome::NotFound {
            message: OutcomeKind::NotFound.default_message().to_owned(),
        }
    }

    /// Validation failure listing at least one field.
    ///
    /// An empty map is rejected with [`CoreError::InvalidArgument`]. Use
    /// [`build_validation_failure`](crate::field_errors::build_validation_failure)
    /// when starting from raw pairs.
    pub fn validation_failed(errors: FieldErrors) -> Result<Self, CoreError> {
        if errors.is_empty() {
            return Err(CoreError::InvalidArgument(
                "validation failure requires at least one field".into(),
            ));
        }
        Ok(Outcome::ValidationFailed {
            errors,
            message: OutcomeKind::ValidationFailed.default_message().to_owned(),
        })
    }

    pub fn unauthorized() -> Self {
        Outcome::Unauthorized {
            message: OutcomeKind::Unauthorized.default_message().to_owned(),
        }
    }

    pub fn forbidden() -> Self {
        Outcome::Forbidden {
            message: OutcomeKind::Forbidden.default_message().to_owned(),
        }
    }

    pub fn rate_limited() -> Self {
        Outcome::RateLimited {
            message: OutcomeKind::RateLimited.default_message().to_owned(),
        }
    }

    pub fn internal_fault() -> Self {
        Outcome::InternalFault {
            message: OutcomeKind::InternalFault.default_message().to_owned(),
        }
    }

    /// Replace the human-readable message, keeping the variant.
    #[must_use]
    pub fn with_message(mut self, new_message: impl Into<String>) -> Self {
        *self.message_mut() = new_message.into();
        self
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Success { .. } => OutcomeKind::Success,
            Outcome::SuccessEmpty { .. } => OutcomeKind::SuccessEmpty,
            Outcome::NotFound { .. } => OutcomeKind::NotFound,
            Outcome::ValidationFailed { .. } => OutcomeKind::ValidationFailed,
            Outcome::Unauthorized { .. } => OutcomeKind::Unauthorized,
            Outcome::Forbidden { .. } => OutcomeKind::Forbidden,
            Outcome::RateLimited { .. } => OutcomeKind::RateLimited,
            Outcome::InternalFault { .. } => OutcomeKind::InternalFault,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Success { message, .. }
            | Outcome::SuccessEmpty { message }
            | Outcome::NotFound { message }
            | Outcome::ValidationFailed { message, .. }
            | Outcome::Unauthorized { message }
            | Outcome::Forbidden { message }
            | Outcome::RateLimited { message }
            | Outcome::InternalFault { message } => message,
        }
    }

    fn message_mut(&mut self) -> &mut String {
        match self {
            Outcome::Success { message, .. }
            | Outcome::SuccessEmpty { message }
            | Outcome::NotFound { message }
            | Outcome::ValidationFailed { message, .. }
            | Outcome::Unauthorized { message }
            | Outcome::Forbidden { message }
            | Outcome::RateLimited { message }
            | Outcome::InternalFault { message } => message,
        }
    }

    /// Transform the success payload, carrying every other variant over as-is.
    pub fn map_payload<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success { payload, message } => Outcome::Success {
                payload: f(payload),
                message,
            },
            Outcome::SuccessEmpty { message } => Outcome::SuccessEmpty { message },
            Outcome::NotFound { message } => Outcome::NotFound { message },
            Outcome::ValidationFailed { errors, message } => {
                Outcome::ValidationFailed { errors, message }
            }
            Outcome::Unauthorized { message } => Outcome::Unauthorized { message },
            Outcome::Forbidden { message } => Outcome::Forbidden { message },
            Outcome::RateLimited { message } => Outcome::RateLimited { message },
            Outcome::InternalFault { message } => Outcome::InternalFault { message },
        }
    }
}

/// Classify a domain error once.
///
/// `Internal` and `InvalidArgument` carry details meant for logs, so both
/// collapse into an `InternalFault` with the generic message. A `Validation`
/// error with no fields is a caller bug and collapses the same way.
impl<T> From<CoreError> for Outcome<T> {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { entity, .. } => {
                Outcome::not_found().with_message(format!("{entity} not found"))
            }
            CoreError::Validation(errors) => {
                Outcome::validation_failed(errors).unwrap_or_else(|_| Outcome::internal_fault())
            }
            CoreError::Unauthorized(msg) => Outcome::unauthorized().with_message(msg),
            CoreError::Forbidden(msg) => Outcome::forbidden().with_message(msg),
            CoreError::RateLimited(msg) => Outcome::rate_limited().with_message(msg),
            CoreError::Internal(_) | CoreError::InvalidArgument(_) => Outcome::internal_fault(),
        }
    }
}
