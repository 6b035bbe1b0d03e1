use crate::field_errors::FieldErrors;

/// Domain-level failures raised by application logic and by the outcome
/// constructors themselves.
///
/// Converting a `CoreError` into an [`Outcome`](crate::outcome::Outcome) is the
/// single place where failures are classified; see the `From` impl there.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Internal error: {0}")]
    Internal(String),

    /// A constructor was called with arguments that break an envelope
    /// invariant (empty message list, zero page size, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
