//! Newsletter sign-up handler.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::post,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NewsletterRequest {
    #[serde(default)]
    pub email: String,
}

/// Create the newsletter router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/v1/newsletter/subscription",
        post(create_newsletter_subscription),
    )
}

/// POST /api/v1/newsletter/subscription
async fn create_newsletter_subscription(
    State(state): State<AppState>,
    request: Result<Json<NewsletterRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(request) = request?;
    state
        .newsletter()
        .subscribe(&request.email)
        .map_err(|e| AppError::bad_request(e.to_string()))?;
    Ok(StatusCode::CREATED)
}
