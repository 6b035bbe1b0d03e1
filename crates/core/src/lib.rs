//! Courier core: response envelopes and the outcome-to-status decision table.
//!
//! Application code describes what happened as an [`Outcome`]; [`map`] turns
//! it into a [`Status`] and an [`Envelope`]. Nothing in this crate knows about
//! a particular HTTP framework.

pub mod envelope;
pub mod error;
pub mod field_errors;
pub mod mapper;
pub mod outcome;
pub mod pagination;
pub mod status;

pub use envelope::Envelope;
pub use error::CoreError;
pub use field_errors::{build_validation_failure, FieldErrors};
pub use mapper::map;
pub use outcome::{Outcome, OutcomeKind};
pub use pagination::{build_paginated, paginate, PaginatedPayload};
pub use status::Status;
