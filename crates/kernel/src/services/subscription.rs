//! Subscription store.
//!
//! Maps user ids to the tier they bought and holds the static plan catalog.
//! Writes are serialized behind one lock; readers see a consistent map.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::models::{Subscription, SubscriptionTier, User, subscription};

/// In-memory subscription store.
pub struct SubscriptionStore {
    catalog: Vec<Subscription>,

    /// User id to tier. Absent users are unsubscribed.
    tiers: RwLock<HashMap<String, SubscriptionTier>>,
}

impl Default for SubscriptionStore {
    fn default() -> Self {
        Self::new(subscription::catalog())
    }
}

impl SubscriptionStore {
    /// Create a store over the given catalog with no subscribers.
    pub fn new(catalog: Vec<Subscription>) -> Self {
        Self {
            catalog,
            tiers: RwLock::new(HashMap::new()),
        }
    }

    /// All purchasable plans.
    pub fn catalog(&self) -> &[Subscription] {
        &self.catalog
    }

    /// Subscribe `user_id` to the plan with `subscription_id`.
    ///
    /// Overwrites any previous tier. Unknown plan ids leave the user
    /// untouched. Returns the tier that was stored, if any.
    pub fn create(&self, user_id: &str, subscription_id: &str) -> Option<SubscriptionTier> {
        let Some(plan) = self.catalog.iter().find(|s| s.id == subscription_id) else {
            debug!(user_id, subscription_id, "unknown subscription, ignoring");
            return None;
        };

        self.tiers.write().insert(user_id.to_string(), plan.name);
        info!(user_id, tier = %plan.name, "subscription stored");
        Some(plan.name)
    }

    /// Tier for `user_id`, or [`SubscriptionTier::None`] when absent.
    pub fn tier(&self, user_id: &str) -> SubscriptionTier {
        self.tiers.read().get(user_id).copied().unwrap_or_default()
    }

    pub fn user(&self, user_id: &str) -> User {
        User {
            id: user_id.to_string(),
            subscription: self.tier(user_id),
        }
    }

    /// Number of users with a stored tier.
    pub fn subscriber_count(&self) -> usize {
        self.tiers.read().len()
    }
}
