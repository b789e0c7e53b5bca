//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::content::{NewsSeed, NewsStore, seed};
use crate::services::{NewsletterStore, SubscriptionStore};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Articles, feeds and search data. Read-only after startup.
    news: NewsStore,

    /// User subscriptions and the plan catalog.
    subscriptions: SubscriptionStore,

    /// Newsletter sign-ups.
    newsletter: NewsletterStore,
}

impl AppState {
    /// Build the state from configuration, loading the seed file if one is set.
    pub fn new(config: &Config) -> Result<Self> {
        let seed = match &config.seed_file {
            Some(path) => {
                info!(path = %path.display(), "loading news seed file");
                NewsSeed::from_path(path).context("failed to load news seed")?
            }
            None => seed::builtin(),
        };

        Ok(Self::with_store(NewsStore::from_seed(seed)))
    }

    /// Build the state around an existing store with empty subscriptions.
    pub fn with_store(news: NewsStore) -> Self {
        Self::from_parts(news, SubscriptionStore::default(), NewsletterStore::new())
    }

    pub fn from_parts(
        news: NewsStore,
        subscriptions: SubscriptionStore,
        newsletter: NewsletterStore,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                news,
                subscriptions,
                newsletter,
            }),
        }
    }

    pub fn news(&self) -> &NewsStore {
        &self.inner.news
    }

    pub fn subscriptions(&self) -> &SubscriptionStore {
        &self.inner.subscriptions
    }

    pub fn newsletter(&self) -> &NewsletterStore {
        &self.inner.newsletter
    }
}
