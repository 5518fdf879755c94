pub mod health;
pub mod movie;
pub mod stats;
pub mod user;
pub mod watchlist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                      list (public), create (auth)
/// /movies/featured             featured carousel (public)
/// /movies/top-rated            best-rated (public)
/// /movies/recent               recently added (public)
/// /movies/my-collection        caller's movies (auth)
/// /movies/{id}                 get (public), update/delete (auth + owner)
/// /movies/{id}/reviews         list (public), create (auth)
///
/// /watchlist                   caller's watchlist (auth)
/// /watchlist/{movie_id}        add/remove (auth)
///
/// /users                       login upsert (auth)
///
/// /stats                       catalog metrics (public)
/// /genres                      distinct genre tags (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movie::router())
        .nest("/watchlist", watchlist::router())
        .nest("/users", user::router())
        .merge(stats::router())
}
