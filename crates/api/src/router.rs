//! Router shared by the binary and the integration tests.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{ConfigError, ServerConfig};
use crate::middleware::catch_panic::panic_response;
use crate::middleware::rate_limit::{self, GlobalRateLimit};
use crate::routes;
use crate::state::AppState;

/// Build the application [`Router`].
///
/// Unknown paths and unsupported methods both answer with a `NotFound`
/// envelope. Outermost first, requests pass CORS, request-id assignment,
/// tracing, the optional rate limit and finally the panic boundary.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Result<Router, ConfigError> {
    let cors = build_cors_layer(config)?;
    let request_id_header = HeaderName::from_static("x-request-id");

    let mut app = Router::new()
        // Health check at root level (not under /api/v1).
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .fallback(routes::route_not_found)
        // Must follow every route it covers.
        .method_not_allowed_fallback(routes::method_not_allowed)
        .layer(CatchPanicLayer::custom(panic_response));

    if let Some(limit) = GlobalRateLimit::per_minute(config.rate_limit_per_minute) {
        app = app.layer(axum::middleware::from_fn_with_state(limit, rate_limit::enforce));
    }

    Ok(app
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state))
}

/// CORS for the configured origins, with credentials allowed.
///
/// Credentials rule out the `*` wildcard, so it is rejected as a
/// [`ConfigError::InvalidOrigin`].
pub fn build_cors_layer(config: &ServerConfig) -> Result<CorsLayer, ConfigError> {
    let origins = config
        .cors_origins
        .iter()
        .map(|o| {
            if o.trim() == "*" {
                return Err(ConfigError::InvalidOrigin {
                    origin: o.clone(),
                    reason: "wildcard origin cannot be combined with credentials".into(),
                });
            }
            o.parse::<HeaderValue>()
                .map_err(|e| ConfigError::InvalidOrigin {
                    origin: o.clone(),
                    reason: e.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}
