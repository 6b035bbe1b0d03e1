//! Cross-cutting middleware.
//!
//! - [`catch_panic::panic_response`] -- Converts panics into `InternalFault` envelopes.
//! - [`rate_limit::enforce`] -- Global request budget, answering `RateLimited`.

pub mod catch_panic;
pub mod rate_limit;
