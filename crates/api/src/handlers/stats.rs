//! Handlers for catalog statistics and genre discovery.
//!
//! Both endpoints are public, read-only point-in-time snapshots. Dirty
//! rating values are cleaned in memory; a malformed record never fails the
//! computation.

use axum::extract::State;
use axum::Json;
use movieverse_core::stats;
use movieverse_db::repositories::MovieRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Catalog-wide metrics snapshot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_movies: i64,
    /// Mean of the cleaned ratings, one decimal; `0` for an empty catalog.
    pub average_rating: f64,
    /// Distinct genre tags across the whole catalog.
    pub total_genres: usize,
}

/// GET /api/v1/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    let total_movies = MovieRepo::count_all(&state.pool).await?;

    let ratings: Vec<serde_json::Value> = MovieRepo::rating_values(&state.pool)
        .await?
        .into_iter()
        .flatten()
        .collect();
    let average_rating = stats::catalog_average(&ratings);

    let total_genres = stats::distinct_tags(MovieRepo::genre_rows(&state.pool).await?).len();

    Ok(Json(StatsResponse {
        total_movies,
        average_rating,
        total_genres,
    }))
}

/// GET /api/v1/genres
///
/// Sorted distinct genre tags across the catalog.
pub async fn genres(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let genres = MovieRepo::genre_rows(&state.pool).await?;
    Ok(Json(stats::distinct_tags(genres)))
}
