//! Handlers for the users resource.
//!
//! Every handler answers with the standard envelope. Lookups of unknown or
//! malformed ids report "User not found".

use axum::extract::State;
use courier_core::{build_paginated, CoreError, Outcome, PaginatedPayload};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::models::user::{CreateUser, UpdateUser, User};
use crate::query::PageParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/users?page=&limit=
pub async fn list_users(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<ApiResponse<PaginatedPayload<User>>> {
    let (page, limit) = params.resolve()?;
    let (items, total) = state.users.list_page(page, limit).await?;

    let outcome = build_paginated(items, total, page, limit)?
        .with_message("Users retrieved successfully");
    Ok(outcome.into())
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<String>,
) -> AppResult<ApiResponse<User>> {
    let id = parse_user_id(&raw_id)?;
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| user_not_found(&raw_id))?;

    Ok(Outcome::success(user)
        .with_message("User retrieved successfully")
        .into())
}

/// POST /api/v1/users
///
/// Creation returns the stored user, so it answers 200 (payload present).
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> AppResult<ApiResponse<User>> {
    let new_user = input.into_new_user().ok_or_else(|| {
        AppError::InternalError("validated CreateUser is missing a required field".into())
    })?;

    let user = state.users.create(new_user).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User created");

    Ok(Outcome::success(user)
        .with_message("User created successfully")
        .into())
}

/// PUT /api/v1/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<String>,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> AppResult<ApiResponse<User>> {
    let id = parse_user_id(&raw_id)?;
    let user = state
        .users
        .update(id, input)
        .await?
        .ok_or_else(|| user_not_found(&raw_id))?;

    tracing::info!(user_id = %user.id, "User updated");

    Ok(Outcome::success(user)
        .with_message("User updated successfully")
        .into())
}

/// DELETE /api/v1/users/{id}
///
/// Nothing to return, so this is a `SuccessEmpty` (201).
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<String>,
) -> AppResult<ApiResponse<()>> {
    let id = parse_user_id(&raw_id)?;
    if !state.users.delete(id).await? {
        return Err(user_not_found(&raw_id).into());
    }

    tracing::info!(user_id = %id, "User deleted");

    Ok(Outcome::success_empty()
        .with_message("User deleted successfully")
        .into())
}

fn parse_user_id(raw: &str) -> Result<Uuid, CoreError> {
    Uuid::parse_str(raw).map_err(|_| user_not_found(raw))
}

fn user_not_found(raw: &str) -> CoreError {
    CoreError::NotFound {
        entity: "User",
        id: raw.to_string(),
    }
}
