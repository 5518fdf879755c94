//! Handlers for the caller's watchlist.
//!
//! All endpoints require authentication; entries belong to the caller and
//! are invisible to everyone else.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use movieverse_core::error::CoreError;
use movieverse_core::types::DbId;
use movieverse_db::models::movie::Movie;
use movieverse_db::models::watchlist::WatchlistEntry;
use movieverse_db::repositories::{MovieRepo, WatchlistRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/watchlist/{movie_id}
pub async fn add(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<WatchlistEntry>)> {
    if MovieRepo::find_by_id(&state.pool, movie_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }));
    }

    if WatchlistRepo::exists(&state.pool, &auth.uid, movie_id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Movie already in watchlist".into(),
        )));
    }

    let entry = WatchlistRepo::add(&state.pool, &auth.uid, movie_id).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/watchlist
///
/// The caller's watchlisted movies, resolved to full movie documents.
pub async fn list(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let ids = WatchlistRepo::movie_ids_for_user(&state.pool, &auth.uid).await?;
    if ids.is_empty() {
        return Ok(Json(Vec::new()));
    }
    Ok(Json(MovieRepo::find_by_ids(&state.pool, &ids).await?))
}

/// DELETE /api/v1/watchlist/{movie_id}
pub async fn remove(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = WatchlistRepo::remove(&state.pool, &auth.uid, movie_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Watchlist entry",
            id: movie_id,
        }))
    }
}
