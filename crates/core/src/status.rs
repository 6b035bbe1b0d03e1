//! Status codes the mapper can emit.
//!
//! Kept independent of any HTTP library so the core stays transport-agnostic.
//! Adapters translate [`Status`] into their own status type via [`Status::code`].

use std::fmt;

/// The closed set of HTTP status codes produced by [`map`](crate::mapper::map).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Created,
    Unauthorized,
    Forbidden,
    NotFound,
    UnprocessableEntity,
    TooManyRequests,
    InternalServerError,
}

impl Status {
    /// Numeric HTTP status code.
    pub const fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Created => 201,
            Status::Unauthorized => 401,
            Status::Forbidden => 403,
            Status::NotFound => 404,
            Status::UnprocessableEntity => 422,
            Status::TooManyRequests => 429,
            Status::InternalServerError => 500,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Status::Ok | Status::Created)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
