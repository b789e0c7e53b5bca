//! Newsdesk test utilities.
//!
//! Helpers for integration testing: post and news-item fixture builders,
//! a store shortcut, and assertion helpers for JSON responses.

use chrono::{DateTime, Utc};
use newsdesk_kernel::content::{BlockAction, Category, NewsBlock, NewsSeed, NewsStore, PostBlock};
use newsdesk_kernel::models::NewsItem;

/// Fixed publication time used by fixtures (2022-09-01T00:00:00Z).
pub fn published_at() -> DateTime<Utc> {
    DateTime::from_timestamp(1_661_990_400, 0).unwrap_or_default()
}

/// `count` numbered paragraph blocks.
pub fn paragraphs(prefix: &str, count: usize) -> Vec<NewsBlock> {
    (0..count)
        .map(|i| NewsBlock::paragraph(format!("{prefix} paragraph {i}")))
        .collect()
}

/// Create a test post with default values.
pub fn test_post(id: &str) -> PostBlock {
    PostBlock {
        id: id.to_string(),
        category: Category::General,
        author: "Test Author".to_string(),
        published_at: published_at(),
        title: format!("Article {id}"),
        image_url: None,
        description: None,
        action: Some(BlockAction::to_article(id)),
        is_premium: false,
        is_content_overlaid: false,
    }
}

/// Create a test news item with default values: free, general, ten
/// content blocks with the first three as preview, no related articles.
pub fn test_item(id: &str) -> TestItem {
    TestItem {
        post: test_post(id),
        content_len: 10,
        preview_len: 3,
        related: Vec::new(),
    }
}

/// A news item builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestItem {
    pub post: PostBlock,
    pub content_len: usize,
    pub preview_len: usize,
    pub related: Vec<NewsBlock>,
}

impl TestItem {
    /// Mark as premium.
    pub fn premium(mut self) -> Self {
        self.post.is_premium = true;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.post.title = title.to_string();
        self
    }

    pub fn in_category(mut self, category: Category) -> Self {
        self.post.category = category;
        self
    }

    /// Number of full content blocks.
    pub fn with_content(mut self, blocks: usize) -> Self {
        self.content_len = blocks;
        self
    }

    /// Number of preview blocks.
    pub fn with_preview(mut self, blocks: usize) -> Self {
        self.preview_len = blocks;
        self
    }

    /// Add related articles as small posts of the given ids.
    pub fn with_related(mut self, ids: &[&str]) -> Self {
        self.related = ids
            .iter()
            .map(|id| NewsBlock::PostSmall(test_post(id)))
            .collect();
        self
    }

    /// Build the item. Preview blocks are labelled distinctly from content
    /// blocks so tests can tell which list was served.
    pub fn build(self) -> NewsItem {
        let id = self.post.id.clone();
        NewsItem {
            content: paragraphs(&format!("{id} full"), self.content_len),
            content_preview: paragraphs(&format!("{id} preview"), self.preview_len),
            url: format!("https://news.example.com/{id}"),
            post: self.post,
            related_articles: self.related,
        }
    }
}

/// Build a store holding `items` and nothing else.
pub fn store_with(items: Vec<NewsItem>) -> NewsStore {
    NewsStore::from_seed(NewsSeed {
        items,
        ..NewsSeed::default()
    })
}

/// Assertion helpers for JSON content.
pub mod assert {
    use serde_json::Value;

    /// Assert that a JSON value has a specific key.
    pub fn has_key(value: &Value, key: &str) {
        assert!(
            value.get(key).is_some(),
            "Expected JSON to have key '{key}', got: {value}"
        );
    }

    /// Assert the `type` discriminators of a JSON block array.
    pub fn block_types(blocks: &Value, expected: &[&str]) {
        let actual: Vec<&str> = blocks
            .as_array()
            .map(|a| a.iter().filter_map(|b| b["type"].as_str()).collect())
            .unwrap_or_default();
        assert_eq!(actual, expected, "block types mismatch in {blocks}");
    }
}
