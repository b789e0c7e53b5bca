//! HTTP route handlers.

pub mod article;
pub mod feed;
pub mod health;
pub mod helpers;
pub mod newsletter;
pub mod search;
pub mod subscription;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the full API router with identity resolution applied.
///
/// Transport layers (tracing, CORS) are added by the binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(article::router())
        .merge(feed::router())
        .merge(user::router())
        .merge(subscription::router())
        .merge(newsletter::router())
        .merge(search::router())
        .layer(axum::middleware::from_fn(
            crate::middleware::resolve_request_user,
        ))
        .with_state(state)
}
