//! User identity and subscription state.

use serde::{Deserialize, Serialize};

use super::subscription::SubscriptionTier;

/// A user and the tier they are subscribed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub subscription: SubscriptionTier,
}

impl User {
    /// A user with no stored subscription.
    pub fn unsubscribed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subscription: SubscriptionTier::None,
        }
    }
}

/// Identity attached to an incoming request.
///
/// Resolved from the `Authorization: Bearer <user id>` header; requests
/// without one are anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestUser {
    #[default]
    Anonymous,
    Known(String),
}

impl RequestUser {
    /// Build from an optional user id; blank ids count as anonymous.
    pub fn from_id(id: Option<&str>) -> Self {
        match id.map(str::trim) {
            Some(id) if !id.is_empty() => Self::Known(id.to_string()),
            _ => Self::Anonymous,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Known(id) => Some(id),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn blank_id_is_anonymous() {
        assert!(RequestUser::from_id(None).is_anonymous());
        assert!(RequestUser::from_id(Some("  ")).is_anonymous());
    }

    #[test]
    fn id_is_trimmed() {
        let user = RequestUser::from_id(Some(" u-1 "));
        assert_eq!(user.id(), Some("u-1"));
    }

    #[test]
    fn serializes_tier_name() {
        let json = serde_json::to_value(User::unsubscribed("u-1")).unwrap();
        assert_eq!(json["id"], "u-1");
        assert_eq!(json["subscription"], "none");
    }
}
