//! Watchlist entry model.

use movieverse_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A watchlist row pairing a user with a movie.
///
/// At most one entry exists per (user, movie) pair.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub id: DbId,
    /// Identity-provider uid of the owning user.
    pub user_id: String,
    pub movie_id: DbId,
    pub added_at: Timestamp,
}
