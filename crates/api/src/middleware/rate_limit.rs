//! Global request rate limiting.
//!
//! A single token bucket shared by every route. Rejected requests get the
//! standard `RateLimited` envelope plus a `Retry-After` header.

use std::num::NonZeroU32;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::RETRY_AFTER;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use courier_core::Outcome;
use governor::clock::{Clock, DefaultClock};
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

use crate::response::respond;

type DirectLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Shared limiter state for [`enforce`].
#[derive(Clone)]
pub struct GlobalRateLimit {
    limiter: Arc<DirectLimiter>,
}

impl GlobalRateLimit {
    /// Allow `requests` per minute across all clients. `None` when `requests`
    /// is zero, meaning rate limiting is disabled.
    pub fn per_minute(requests: u32) -> Option<Self> {
        let requests = NonZeroU32::new(requests)?;
        Some(Self {
            limiter: Arc::new(RateLimiter::direct(Quota::per_minute(requests))),
        })
    }
}

impl std::fmt::Debug for GlobalRateLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalRateLimit").finish_non_exhaustive()
    }
}

/// Middleware: pass the request through or answer 429.
pub async fn enforce(State(limit): State<GlobalRateLimit>, req: Request, next: Next) -> Response {
    match limit.limiter.check() {
        Ok(()) => next.run(req).await,
        Err(not_until) => {
            let wait = not_until.wait_time_from(DefaultClock::default().now());
            let retry_after = wait.as_secs().max(1);

            tracing::warn!(uri = %req.uri(), retry_after, "Rate limit exceeded");

            let mut response = respond(Outcome::<()>::rate_limited());
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(retry_after));
            response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_disables_limiting() {
        assert!(GlobalRateLimit::per_minute(0).is_none());
    }

    #[test]
    fn budget_is_spent_then_refused() {
        let limit = GlobalRateLimit::per_minute(2).unwrap();

        assert!(limit.limiter.check().is_ok());
        assert!(limit.limiter.check().is_ok());
        assert!(limit.limiter.check().is_err());
    }
}
