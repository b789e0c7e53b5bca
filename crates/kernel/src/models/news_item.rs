//! News items and the paginated views derived from them.
//!
//! A `NewsItem` bundles the full article body, its preview, the post metadata
//! used in feeds, and the related-article blocks. Items are built once at
//! startup and never mutated.

use serde::{Deserialize, Serialize};

use crate::content::{NewsBlock, PostBlock};

/// Internal bundle of full and preview content for one article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub content: Vec<NewsBlock>,
    pub content_preview: Vec<NewsBlock>,
    pub post: PostBlock,
    pub url: String,
    #[serde(default)]
    pub related_articles: Vec<NewsBlock>,
}

impl NewsItem {
    pub fn id(&self) -> &str {
        &self.post.id
    }

    pub fn title(&self) -> &str {
        &self.post.title
    }

    pub fn is_premium(&self) -> bool {
        self.post.is_premium
    }
}

/// One page of an article's content as chosen by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleSlice {
    pub title: String,
    pub blocks: Vec<NewsBlock>,
    pub total_blocks: usize,
    pub url: String,
}

/// Article response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub content: Vec<NewsBlock>,
    pub total_count: usize,
    pub url: String,
    pub is_premium: bool,
    pub is_preview: bool,
}

impl Article {
    pub fn from_slice(slice: ArticleSlice, is_premium: bool, is_preview: bool) -> Self {
        Self {
            title: slice.title,
            content: slice.blocks,
            total_count: slice.total_blocks,
            url: slice.url,
            is_premium,
            is_preview,
        }
    }
}

/// Feed response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    pub feed: Vec<NewsBlock>,
    pub total_count: usize,
}

/// Related-articles response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedArticles {
    pub related_articles: Vec<NewsBlock>,
    pub total_count: usize,
}

impl RelatedArticles {
    pub fn empty() -> Self {
        Self {
            related_articles: Vec::new(),
            total_count: 0,
        }
    }
}

/// Search response body, shared by popular and relevant search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub articles: Vec<NewsBlock>,
    pub topics: Vec<String>,
}
