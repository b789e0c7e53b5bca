//! In-memory news repository.
//!
//! Owns every news item, the per-category feeds and the search data. Built
//! once at startup from a [`NewsSeed`] and read concurrently afterwards
//! without locking.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use super::blocks::NewsBlock;
use super::category::Category;
use crate::models::{ArticleSlice, Feed, NewsItem, RelatedArticles, SearchResults};

/// Raw data a store is built from.
///
/// Matches the JSON layout accepted by [`NewsSeed::from_path`]; blocks in it
/// go through the tolerant block decoder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsSeed {
    pub items: Vec<NewsItem>,
    pub feeds: BTreeMap<Category, Vec<NewsBlock>>,
    pub popular_articles: Vec<NewsBlock>,
    pub popular_topics: Vec<String>,
    pub topics: Vec<String>,
}

impl NewsSeed {
    /// Read a seed from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse seed file {}", path.display()))
    }
}

/// Slice `items` by offset and limit.
///
/// The offset is clamped to `[0, len]` and the window never runs past the
/// end, so an offset at or beyond the end yields an empty page.
pub fn paginate<T: Clone>(items: &[T], limit: usize, offset: usize) -> Vec<T> {
    let start = offset.min(items.len());
    let end = start.saturating_add(limit).min(items.len());
    items[start..end].to_vec()
}

/// The content repository.
pub struct NewsStore {
    items: HashMap<String, NewsItem>,
    feeds: BTreeMap<Category, Vec<NewsBlock>>,
    popular_articles: Vec<NewsBlock>,
    popular_topics: Vec<String>,
    topics: Vec<String>,
}

impl NewsStore {
    /// Build a store from seed data. Later items replace earlier ones with
    /// the same id.
    pub fn from_seed(seed: NewsSeed) -> Self {
        let items: HashMap<String, NewsItem> = seed
            .items
            .into_iter()
            .map(|item| (item.id().to_string(), item))
            .collect();

        info!(
            items = items.len(),
            feeds = seed.feeds.len(),
            "news store loaded"
        );

        Self {
            items,
            feeds: seed.feeds,
            popular_articles: seed.popular_articles,
            popular_topics: seed.popular_topics,
            topics: seed.topics,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by post id.
    pub fn news_item(&self, id: &str) -> Option<&NewsItem> {
        self.items.get(id)
    }

    /// One page of an article's content or preview.
    ///
    /// Returns `None` for unknown ids.
    pub fn article(
        &self,
        id: &str,
        limit: usize,
        offset: usize,
        preview: bool,
    ) -> Option<ArticleSlice> {
        let item = self.news_item(id)?;
        let blocks = if preview {
            &item.content_preview
        } else {
            &item.content
        };

        Some(ArticleSlice {
            title: item.title().to_string(),
            blocks: paginate(blocks, limit, offset),
            total_blocks: blocks.len(),
            url: item.url.clone(),
        })
    }

    /// Premium flag of an item, `None` for unknown ids.
    pub fn is_premium_article(&self, id: &str) -> Option<bool> {
        self.news_item(id).map(NewsItem::is_premium)
    }

    /// One page of an item's related articles.
    ///
    /// Unknown ids give an empty result rather than `None`, unlike
    /// [`NewsStore::article`].
    pub fn related_articles(&self, id: &str, limit: usize, offset: usize) -> RelatedArticles {
        let Some(item) = self.news_item(id) else {
            debug!(id, "related articles requested for unknown item");
            return RelatedArticles::empty();
        };

        RelatedArticles {
            related_articles: paginate(&item.related_articles, limit, offset),
            total_count: item.related_articles.len(),
        }
    }

    /// One page of a category feed. Categories without a feed are empty.
    pub fn feed(&self, category: Category, limit: usize, offset: usize) -> Feed {
        let blocks = self
            .feeds
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default();

        Feed {
            feed: paginate(blocks, limit, offset),
            total_count: blocks.len(),
        }
    }

    /// Categories that have a feed, in declaration order.
    pub fn categories(&self) -> Vec<Category> {
        self.feeds.keys().copied().collect()
    }

    pub fn popular_search(&self) -> SearchResults {
        SearchResults {
            articles: self.popular_articles.clone(),
            topics: self.popular_topics.clone(),
        }
    }

    /// Items whose title contains `term`, as small posts, plus matching
    /// topics. Matching is case-insensitive; a blank term matches nothing.
    pub fn relevant_search(&self, term: &str) -> SearchResults {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return SearchResults {
                articles: Vec::new(),
                topics: Vec::new(),
            };
        }

        let mut matches: Vec<&NewsItem> = self
            .items
            .values()
            .filter(|item| item.title().to_lowercase().contains(&term))
            .collect();
        matches.sort_by(|a, b| {
            b.post
                .published_at
                .cmp(&a.post.published_at)
                .then_with(|| a.id().cmp(b.id()))
        });

        SearchResults {
            articles: matches
                .into_iter()
                .map(|item| NewsBlock::PostSmall(item.post.clone()))
                .collect(),
            topics: self
                .topics
                .iter()
                .filter(|topic| topic.to_lowercase().contains(&term))
                .cloned()
                .collect(),
        }
    }
}
