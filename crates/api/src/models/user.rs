//! User model and request DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to insert a user, after validation.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Body of `POST /api/v1/users`.
///
/// Both fields are optional at the serde level so a missing field is
/// reported as "required" rather than as a JSON parse error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(
        required(message = "Username is required"),
        length(min = 8, message = "Username must be 8 character long")
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "Email is required"),
        email(message = "Email must be valid email address")
    )]
    pub email: Option<String>,
}

impl CreateUser {
    /// The validated insert, or `None` if a required field is missing.
    pub fn into_new_user(self) -> Option<NewUser> {
        Some(NewUser {
            username: self.username?,
            email: self.email?,
        })
    }
}

/// Body of `PUT /api/v1/users/{id}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 8, message = "Username must be 8 character long"))]
    pub username: Option<String>,
    #[validate(email(message = "Email must be valid email address"))]
    pub email: Option<String>,
}
