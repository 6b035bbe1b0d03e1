//! Last-resort fault boundary.
//!
//! Installed through `tower_http::catch_panic::CatchPanicLayer::custom`, so a
//! panic anywhere below it becomes an `InternalFault` envelope instead of a
//! dropped connection. The panic payload is logged, never returned.

use std::any::Any;

use axum::response::Response;
use courier_core::Outcome;

use crate::response::respond;

pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "non-string panic payload"
    };

    tracing::error!(panic = %detail, "Request handler panicked");

    respond(Outcome::<()>::internal_fault())
}
