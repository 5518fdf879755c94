//! User profile model and DTOs.
//!
//! Authentication lives with the external identity provider; this table
//! only mirrors the profile fields the catalog needs (display name, email
//! as the ownership key, avatar) plus login bookkeeping.

use movieverse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    /// Identity-provider uid; unique.
    pub uid: String,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub created_at: Timestamp,
    pub last_login: Timestamp,
}

/// Profile fields supplied by the client on login; the uid comes from the
/// verified token, never from the payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}
