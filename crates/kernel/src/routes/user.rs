//! Current-user route handler.

use axum::{Extension, Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::error::AppResult;
use crate::models::{RequestUser, User};
use crate::state::AppState;

use super::helpers::require_user;

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: User,
}

/// Create the user router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/users/me", get(get_current_user))
}

/// GET /api/v1/users/me
async fn get_current_user(
    State(state): State<AppState>,
    Extension(user): Extension<RequestUser>,
) -> AppResult<Json<CurrentUserResponse>> {
    let user_id = require_user(&user)?;
    Ok(Json(CurrentUserResponse {
        user: state.subscriptions().user(user_id),
    }))
}
