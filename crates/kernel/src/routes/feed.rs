//! Feed and category route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::content::Category;
use crate::error::{AppError, AppResult};
use crate::models::Feed;
use crate::state::AppState;

use super::helpers::PageQuery;

/// Query parameters for the feed.
#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl FeedQuery {
    /// Requested category, `general` when absent.
    pub fn category(&self) -> AppResult<Category> {
        match self.category.as_deref() {
            None => Ok(Category::default()),
            Some(name) => name
                .parse::<Category>()
                .map_err(|e| AppError::bad_request(e.to_string())),
        }
    }

    pub fn page(&self) -> PageQuery {
        PageQuery {
            limit: self.limit,
            offset: self.offset,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

/// Create the feed router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/feed", get(get_feed))
        .route("/api/v1/categories", get(get_categories))
}

/// GET /api/v1/feed?category=general&limit=20&offset=0
async fn get_feed(
    State(state): State<AppState>,
    query: Result<Query<FeedQuery>, QueryRejection>,
) -> AppResult<Json<Feed>> {
    let Query(query) = query?;
    let category = query.category()?;
    let page = query.page();
    Ok(Json(state.news().feed(category, page.limit(), page.offset())))
}

/// GET /api/v1/categories
async fn get_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.news().categories(),
    })
}
