//! Handlers for the `/movies` resource.
//!
//! Listing is public; mutations require authentication, and update/delete
//! additionally require ownership (the caller's email must match the
//! movie's `addedBy`).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use movieverse_core::catalog::{self, MovieListParams, MovieQuery};
use movieverse_core::error::CoreError;
use movieverse_core::movie as movie_rules;
use movieverse_core::types::DbId;
use movieverse_db::models::movie::{CreateMovie, GenreInput, Movie, NewMovie, UpdateMovie};
use movieverse_db::repositories::{MovieRepo, ReviewRepo, WatchlistRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response envelope for the paginated listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListResponse {
    pub movies: Vec<Movie>,
    pub total_pages: i64,
    pub current_page: i64,
    pub total: i64,
}

/// GET /api/v1/movies
///
/// Filtered, sorted, paginated listing. `total` counts every match before
/// the page window is applied.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<MovieListResponse>> {
    let query = MovieQuery::from_params(&params);

    let movies = MovieRepo::list(&state.pool, &query).await?;
    let total = MovieRepo::count(&state.pool, &query).await?;

    Ok(Json(MovieListResponse {
        movies,
        total_pages: catalog::total_pages(total, query.limit),
        current_page: query.page,
        total,
    }))
}

/// GET /api/v1/movies/featured
pub async fn featured(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(MovieRepo::featured(&state.pool).await?))
}

/// GET /api/v1/movies/top-rated
pub async fn top_rated(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(MovieRepo::top_rated(&state.pool).await?))
}

/// GET /api/v1/movies/recent
pub async fn recent(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(MovieRepo::recent(&state.pool).await?))
}

/// GET /api/v1/movies/my-collection
///
/// Every movie added by the caller, newest first.
pub async fn my_collection(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(MovieRepo::list_by_owner(&state.pool, &auth.email).await?))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(movie))
}

/// POST /api/v1/movies
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let new_movie = validate_create(input, auth.email)?;
    let movie = MovieRepo::create(&state.pool, &new_movie).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /api/v1/movies/{id}
///
/// Owner-only partial update. `addedBy` and `addedDate` are not updatable;
/// such keys in the payload are dropped.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    load_owned(&state, id, &auth.email).await?;

    if let Some(rating) = &input.rating {
        movie_rules::validate_new_rating(rating)?;
    }
    if let Some(genre) = &input.genre {
        movie_rules::validate_genres(&genre.clone().into_tags())?;
    }

    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(movie))
}

/// DELETE /api/v1/movies/{id}
///
/// Owner-only. Deletes the movie, then removes dependent watchlist entries
/// and reviews as independent best-effort steps: a failed cascade step is
/// logged and does not undo the movie deletion.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    load_owned(&state, id, &auth.email).await?;

    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Movie", id }));
    }

    match WatchlistRepo::delete_by_movie(&state.pool, id).await {
        Ok(count) => tracing::debug!(movie_id = id, count, "Removed watchlist entries"),
        Err(err) => tracing::warn!(
            movie_id = id,
            error = %err,
            "Failed to remove watchlist entries for deleted movie"
        ),
    }
    match ReviewRepo::delete_by_movie(&state.pool, id).await {
        Ok(count) => tracing::debug!(movie_id = id, count, "Removed reviews"),
        Err(err) => tracing::warn!(
            movie_id = id,
            error = %err,
            "Failed to remove reviews for deleted movie"
        ),
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a movie and verify the caller owns it.
///
/// Returns `NotFound` if the movie does not exist and `Forbidden` if it
/// exists but was added by someone else -- the two must stay
/// distinguishable.
async fn load_owned(state: &AppState, id: DbId, caller_email: &str) -> Result<Movie, AppError> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;

    if movie.added_by != caller_email {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not authorized to modify this movie".into(),
        )));
    }

    Ok(movie)
}

/// Validate a create payload and attach server-assigned ownership.
fn validate_create(input: CreateMovie, added_by: String) -> Result<NewMovie, CoreError> {
    let title = movie_rules::validate_required_text("title", input.title.as_deref())?;

    let genre = input.genre.map(GenreInput::into_tags).unwrap_or_default();
    movie_rules::validate_genres(&genre)?;

    let release_year = movie_rules::validate_required("releaseYear", input.release_year)?;
    let director = movie_rules::validate_required_text("director", input.director.as_deref())?;

    let rating = movie_rules::validate_required("rating", input.rating)?;
    movie_rules::validate_new_rating(&rating)?;

    let plot_summary =
        movie_rules::validate_required_text("plotSummary", input.plot_summary.as_deref())?;
    let poster_url =
        movie_rules::validate_required_text("posterUrl", input.poster_url.as_deref())?;

    Ok(NewMovie {
        title,
        genre,
        release_year,
        director,
        cast_members: input.cast_members,
        plot_summary,
        poster_url,
        rating,
        featured: input.featured.unwrap_or(false),
        added_by,
    })
}
