//! Route definitions for user profiles.

use axum::routing::post;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST / -> login upsert
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(user::login))
}
