//! Subscription catalog and purchase handlers.

use axum::{
    Extension, Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{RequestUser, Subscription};
use crate::state::AppState;

use super::helpers::require_user;

#[derive(Debug, Serialize)]
pub struct SubscriptionsResponse {
    pub subscriptions: Vec<Subscription>,
}

/// Query parameters for creating a subscription.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionQuery {
    pub subscription_id: Option<String>,
}

/// Create the subscription router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/v1/subscriptions",
        get(list_subscriptions).post(create_subscription),
    )
}

/// GET /api/v1/subscriptions
async fn list_subscriptions(State(state): State<AppState>) -> Json<SubscriptionsResponse> {
    Json(SubscriptionsResponse {
        subscriptions: state.subscriptions().catalog().to_vec(),
    })
}

/// POST /api/v1/subscriptions?subscriptionId=...
///
/// Unknown plan ids are accepted and change nothing.
async fn create_subscription(
    State(state): State<AppState>,
    Extension(user): Extension<RequestUser>,
    query: Result<Query<CreateSubscriptionQuery>, QueryRejection>,
) -> AppResult<StatusCode> {
    let user_id = require_user(&user)?;
    let Query(query) = query?;
    let subscription_id = query
        .subscription_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::bad_request("subscriptionId is required"))?;

    state.subscriptions().create(user_id, subscription_id);
    Ok(StatusCode::CREATED)
}
