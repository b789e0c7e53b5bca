//! Mutable in-memory services shared by the route handlers.

pub mod newsletter;
pub mod subscription;

pub use newsletter::{NewsletterError, NewsletterStore};
pub use subscription::SubscriptionStore;
