//! Handlers for movie reviews.
//!
//! A user may review a movie at most once; reviews are never edited and
//! are removed only when their movie is deleted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use movieverse_core::error::CoreError;
use movieverse_core::review::{validate_review_rating, ANONYMOUS_REVIEWER};
use movieverse_core::stats;
use movieverse_core::types::DbId;
use movieverse_db::models::review::{CreateReview, NewReview, Review};
use movieverse_db::repositories::{MovieRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/movies/{id}/reviews
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(input): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    validate_review_rating(input.rating)?;

    if MovieRepo::find_by_id(&state.pool, movie_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }));
    }

    if ReviewRepo::exists(&state.pool, movie_id, &auth.uid).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "You have already reviewed this movie".into(),
        )));
    }

    let new_review = NewReview {
        movie_id,
        user_id: auth.uid,
        user_email: Some(auth.email),
        user_name: auth.name.unwrap_or_else(|| ANONYMOUS_REVIEWER.to_string()),
        rating: input.rating,
        comment: input.comment,
    };
    let review = ReviewRepo::create(&state.pool, &new_review).await?;

    update_movie_rating(&state, movie_id).await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/v1/movies/{id}/reviews
pub async fn list_by_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<Vec<Review>>> {
    Ok(Json(ReviewRepo::list_by_movie(&state.pool, movie_id).await?))
}

/// Recompute one movie's stored average from its current review set.
///
/// Idempotent for an unchanged review set. A movie with zero reviews keeps
/// its previous average untouched.
pub(crate) async fn update_movie_rating(
    state: &AppState,
    movie_id: DbId,
) -> Result<(), AppError> {
    let ratings = ReviewRepo::ratings_for_movie(&state.pool, movie_id).await?;
    if let Some(average) = stats::review_average(&ratings) {
        MovieRepo::set_average_rating(&state.pool, movie_id, average).await?;
    }
    Ok(())
}
