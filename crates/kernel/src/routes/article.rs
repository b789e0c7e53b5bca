//! Article route handlers.
//!
//! Serves article content, choosing between the full body and the preview
//! per caller, and the related-articles list.

use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    routing::get,
};
use serde::Deserialize;
use tracing::debug;

use crate::access::ContentAccess;
use crate::error::{AppError, AppResult};
use crate::models::{Article, RelatedArticles, RequestUser};
use crate::state::AppState;

use super::helpers::PageQuery;

/// Query parameters for fetching an article.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    #[serde(default)]
    pub preview: bool,
}

impl ArticleQuery {
    pub fn page(&self) -> PageQuery {
        PageQuery {
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// Create the article router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/articles/{id}", get(get_article))
        .route("/api/v1/articles/{id}/related", get(get_related_articles))
}

/// GET /api/v1/articles/{id}?limit=20&offset=0&preview=false
async fn get_article(
    State(state): State<AppState>,
    Extension(user): Extension<RequestUser>,
    Path(id): Path<String>,
    query: Result<Query<ArticleQuery>, QueryRejection>,
) -> AppResult<Json<Article>> {
    let Query(query) = query?;
    let news = state.news();
    let is_premium = news.is_premium_article(&id).ok_or(AppError::NotFound)?;

    let access = ContentAccess::decide(query.preview, is_premium, &user, |user_id| {
        state.subscriptions().tier(user_id)
    });
    debug!(article = %id, ?access, is_premium, "article access decided");

    let page = query.page();
    let slice = news
        .article(&id, page.limit(), page.offset(), access.is_preview())
        .ok_or(AppError::NotFound)?;

    Ok(Json(Article::from_slice(
        slice,
        is_premium,
        access.is_preview(),
    )))
}

/// GET /api/v1/articles/{id}/related?limit=20&offset=0
///
/// Unknown ids answer with an empty list, not 404.
async fn get_related_articles(
    State(state): State<AppState>,
    Path(id): Path<String>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> AppResult<Json<RelatedArticles>> {
    let Query(page) = page?;
    Ok(Json(
        state
            .news()
            .related_articles(&id, page.limit(), page.offset()),
    ))
}
