//! Full-versus-preview access decision for articles.

use crate::models::{RequestUser, SubscriptionTier};

/// Which block list a request is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentAccess {
    Full,
    Preview,
}

impl ContentAccess {
    /// Decide access for one article request.
    ///
    /// Rules apply in order and short-circuit:
    /// 1. an explicit preview request gets the preview;
    /// 2. free articles are served in full;
    /// 3. anonymous requests for premium articles get the preview;
    /// 4. known users without a subscription get the preview;
    /// 5. any subscribed user gets the full article.
    ///
    /// `tier_of` is only called for known users.
    pub fn decide<F>(
        preview_requested: bool,
        is_premium: bool,
        identity: &RequestUser,
        tier_of: F,
    ) -> Self
    where
        F: FnOnce(&str) -> SubscriptionTier,
    {
        if preview_requested {
            return Self::Preview;
        }
        if !is_premium {
            return Self::Full;
        }

        let Some(user_id) = identity.id() else {
            return Self::Preview;
        };

        if tier_of(user_id).is_subscribed() {
            Self::Full
        } else {
            Self::Preview
        }
    }

    pub fn is_preview(&self) -> bool {
        *self == Self::Preview
    }
}
