//! Handlers for user profiles.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use movieverse_db::models::user::{CreateUserProfile, User};
use movieverse_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/users
///
/// Record a login for the authenticated caller: the first call creates the
/// profile (201), later calls bump `last_login` and return the existing
/// profile (200). The uid comes from the verified token, never from the
/// payload.
pub async fn login(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(profile): Json<CreateUserProfile>,
) -> AppResult<(StatusCode, Json<User>)> {
    if let Some(user) = UserRepo::touch_last_login(&state.pool, &auth.uid).await? {
        return Ok((StatusCode::OK, Json(user)));
    }

    let user = UserRepo::create(&state.pool, &auth.uid, &profile).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
