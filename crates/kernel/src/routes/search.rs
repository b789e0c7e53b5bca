//! Search route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::SearchResults;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RelevantSearchQuery {
    pub q: Option<String>,
}

/// Create the search router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/search/popular", get(popular_search))
        .route("/api/v1/search/relevant", get(relevant_search))
}

/// GET /api/v1/search/popular
async fn popular_search(State(state): State<AppState>) -> Json<SearchResults> {
    Json(state.news().popular_search())
}

/// GET /api/v1/search/relevant?q=term
async fn relevant_search(
    State(state): State<AppState>,
    query: Result<Query<RelevantSearchQuery>, QueryRejection>,
) -> AppResult<Json<SearchResults>> {
    let Query(query) = query?;
    let term = query
        .q
        .ok_or_else(|| AppError::bad_request("q is required"))?;
    Ok(Json(state.news().relevant_search(&term)))
}
