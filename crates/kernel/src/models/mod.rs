//! Data models.

pub mod news_item;
pub mod subscription;
pub mod user;

pub use news_item::{Article, ArticleSlice, Feed, NewsItem, RelatedArticles, SearchResults};
pub use subscription::{Subscription, SubscriptionCost, SubscriptionTier};
pub use user::{RequestUser, User};
