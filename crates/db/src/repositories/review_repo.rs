//! Repository for the `reviews` table.

use movieverse_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{NewReview, Review};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, movie_id, user_id, user_email, user_name, rating, comment, created_at";

/// Provides review operations keyed by movie and reviewer.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review, returning the created row.
    ///
    /// The `uq_reviews_movie_user` constraint rejects a second review for
    /// the same (movie, user) pair, covering concurrent writers that pass
    /// the handler's pre-check simultaneously.
    pub async fn create(pool: &PgPool, input: &NewReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (movie_id, user_id, user_email, user_name, rating, comment)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.movie_id)
            .bind(&input.user_id)
            .bind(&input.user_email)
            .bind(&input.user_name)
            .bind(input.rating)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// Whether a user has already reviewed a movie.
    pub async fn exists(
        pool: &PgPool,
        movie_id: DbId,
        user_id: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM reviews WHERE movie_id = $1 AND user_id = $2)",
        )
        .bind(movie_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// All reviews for a movie, newest first.
    pub async fn list_by_movie(pool: &PgPool, movie_id: DbId) -> Result<Vec<Review>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM reviews WHERE movie_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Review>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Just the rating values for a movie's current review set.
    pub async fn ratings_for_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<i16>, sqlx::Error> {
        sqlx::query_scalar::<_, i16>("SELECT rating FROM reviews WHERE movie_id = $1")
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Remove every review for a movie (cascade step on movie delete).
    /// Returns the number of rows removed.
    pub async fn delete_by_movie(pool: &PgPool, movie_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE movie_id = $1")
            .bind(movie_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
