//! Review entity model and DTOs.

use movieverse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A review row from the `reviews` table.
///
/// At most one review exists per (movie, user) pair; reviews are never
/// updated and are removed only when their movie is deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: DbId,
    pub movie_id: DbId,
    /// Identity-provider uid of the reviewer.
    pub user_id: String,
    pub user_email: Option<String>,
    pub user_name: String,
    /// 1-5 scale, distinct from the movie's 0-10 rating.
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for posting a review.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    pub rating: i16,
    pub comment: Option<String>,
}

/// A validated review insert with caller identity attached.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub movie_id: DbId,
    pub user_id: String,
    pub user_email: Option<String>,
    pub user_name: String,
    pub rating: i16,
    pub comment: Option<String>,
}
