//! Courier API server library.
//!
//! The axum adapter around `courier_core`: every response, including
//! rejections, panics and unknown routes, is written as the standard
//! envelope. Exposed as a library so integration tests and the binary
//! entrypoint share the same router.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod query;
pub mod repositories;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
