//! Subscription plans.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Subscription level determining content access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    None,
    Basic,
    Plus,
    Premium,
}

impl SubscriptionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic => "basic",
            Self::Plus => "plus",
            Self::Premium => "premium",
        }
    }

    /// Whether this tier pays for anything at all.
    pub fn is_subscribed(&self) -> bool {
        *self != Self::None
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price of a plan in minor currency units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionCost {
    pub monthly: u32,
    pub annual: u32,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub name: SubscriptionTier,
    pub cost: SubscriptionCost,
    pub benefits: Vec<String>,
}

/// The static plan catalog.
pub fn catalog() -> Vec<Subscription> {
    vec![
        Subscription {
            id: "dd339fda-33e9-49d0-9eb5-0ccb77eb760f".to_string(),
            name: SubscriptionTier::Premium,
            cost: SubscriptionCost {
                monthly: 1499,
                annual: 16200,
            },
            benefits: vec![
                "Unlimited access to all articles".to_string(),
                "Ad-free reading".to_string(),
                "Exclusive newsletters".to_string(),
            ],
        },
        Subscription {
            id: "375af719-c9e0-44c4-be05-4527df45a13d".to_string(),
            name: SubscriptionTier::Plus,
            cost: SubscriptionCost {
                monthly: 999,
                annual: 10800,
            },
            benefits: vec![
                "Unlimited access to all articles".to_string(),
                "Ad-free reading".to_string(),
            ],
        },
        Subscription {
            id: "34809bc1-28e5-4967-b029-2432638b0dc7".to_string(),
            name: SubscriptionTier::Basic,
            cost: SubscriptionCost {
                monthly: 499,
                annual: 5400,
            },
            benefits: vec!["Unlimited access to all articles".to_string()],
        },
    ]
}
