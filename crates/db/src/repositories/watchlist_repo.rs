//! Repository for the `watchlist` table.

use movieverse_core::types::DbId;
use sqlx::PgPool;

use crate::models::watchlist::WatchlistEntry;

const COLUMNS: &str = "id, user_id, movie_id, added_at";

/// Provides watchlist operations keyed by (user, movie).
pub struct WatchlistRepo;

impl WatchlistRepo {
    /// Insert a watchlist entry, returning the created row.
    ///
    /// The `uq_watchlist_user_movie` constraint rejects a duplicate entry
    /// for the same (user, movie) pair.
    pub async fn add(
        pool: &PgPool,
        user_id: &str,
        movie_id: DbId,
    ) -> Result<WatchlistEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO watchlist (user_id, movie_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WatchlistEntry>(&query)
            .bind(user_id)
            .bind(movie_id)
            .fetch_one(pool)
            .await
    }

    /// Whether a movie is already on a user's watchlist.
    pub async fn exists(
        pool: &PgPool,
        user_id: &str,
        movie_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM watchlist WHERE user_id = $1 AND movie_id = $2)",
        )
        .bind(user_id)
        .bind(movie_id)
        .fetch_one(pool)
        .await
    }

    /// IDs of the movies on a user's watchlist, newest first.
    pub async fn movie_ids_for_user(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT movie_id FROM watchlist WHERE user_id = $1 ORDER BY added_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Remove a movie from a user's watchlist. Returns `true` if a row was
    /// removed.
    pub async fn remove(
        pool: &PgPool,
        user_id: &str,
        movie_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM watchlist WHERE user_id = $1 AND movie_id = $2")
            .bind(user_id)
            .bind(movie_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a movie from every watchlist (cascade step on movie delete).
    /// Returns the number of rows removed.
    pub async fn delete_by_movie(pool: &PgPool, movie_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM watchlist WHERE movie_id = $1")
            .bind(movie_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
