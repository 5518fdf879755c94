//! Route definitions for catalog statistics and genre discovery.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes merged at the `/api/v1` root.
///
/// ```text
/// GET /stats  -> catalog metrics
/// GET /genres -> distinct genre tags
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats::stats))
        .route("/genres", get(stats::genres))
}
