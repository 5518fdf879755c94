//! Route definitions for the caller's watchlist.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::watchlist;
use crate::state::AppState;

/// Routes mounted at `/watchlist`.
///
/// ```text
/// GET    /             -> list
/// POST   /{movie_id}   -> add
/// DELETE /{movie_id}   -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(watchlist::list))
        .route(
            "/{movie_id}",
            post(watchlist::add).delete(watchlist::remove),
        )
}
