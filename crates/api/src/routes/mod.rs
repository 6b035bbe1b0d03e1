pub mod health;
pub mod users;

use axum::http::{Method, Uri};
use axum::Router;
use courier_core::Outcome;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /users                 list (paginated), create
/// /users/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/users", users::router())
}

/// Fallback for paths no route matches.
pub async fn route_not_found(uri: Uri) -> ApiResponse<()> {
    tracing::debug!(%uri, "No route matched");
    Outcome::not_found().with_message("Route not found").into()
}

/// Fallback for a known path requested with a method it does not serve.
///
/// 405 is not an emitted status, so this reports the route as missing.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiResponse<()> {
    tracing::debug!(%method, %uri, "Method not allowed on route");
    Outcome::not_found().with_message("Route not found").into()
}
