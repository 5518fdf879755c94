//! Route definitions for movies and their reviews.

use axum::routing::get;
use axum::Router;

use crate::handlers::{movie, review};
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /featured          -> featured
/// GET    /top-rated         -> top_rated
/// GET    /recent            -> recent
/// GET    /my-collection     -> my_collection
/// GET    /{id}              -> get_by_id
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /{id}/reviews      -> reviews list
/// POST   /{id}/reviews      -> reviews create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list).post(movie::create))
        .route("/featured", get(movie::featured))
        .route("/top-rated", get(movie::top_rated))
        .route("/recent", get(movie::recent))
        .route("/my-collection", get(movie::my_collection))
        .route(
            "/{id}",
            get(movie::get_by_id)
                .patch(movie::update)
                .delete(movie::delete),
        )
        .route(
            "/{id}/reviews",
            get(review::list_by_movie).post(review::create),
        )
}
