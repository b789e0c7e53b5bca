//! Newsletter sign-ups.

use std::collections::HashSet;
use std::sync::LazyLock;

use parking_lot::RwLock;
use regex::Regex;
use thiserror::Error;
use tracing::info;

/// Loose address check: one `@`, non-empty local part, dotted domain.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex literal")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NewsletterError {
    #[error("email is required")]
    MissingEmail,

    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// Set of subscribed addresses, stored lowercase.
#[derive(Default)]
pub struct NewsletterStore {
    emails: RwLock<HashSet<String>>,
}

impl NewsletterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe an address. Re-subscribing is a no-op.
    ///
    /// Returns `true` if the address was new.
    pub fn subscribe(&self, email: &str) -> Result<bool, NewsletterError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(NewsletterError::MissingEmail);
        }
        if !EMAIL.is_match(email) {
            return Err(NewsletterError::InvalidEmail(email.to_string()));
        }

        let added = self.emails.write().insert(email.to_lowercase());
        if added {
            info!("newsletter subscription added");
        }
        Ok(added)
    }

    pub fn is_subscribed(&self, email: &str) -> bool {
        self.emails.read().contains(&email.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.emails.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.read().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_is_idempotent_and_case_insensitive() {
        let store = NewsletterStore::new();
        assert!(store.subscribe("Reader@Example.com").unwrap());
        assert!(!store.subscribe("reader@example.com ").unwrap());
        assert_eq!(store.len(), 1);
        assert!(store.is_subscribed("READER@example.com"));
    }

    #[test]
    fn rejects_empty_and_malformed_addresses() {
        let store = NewsletterStore::new();
        assert_eq!(store.subscribe("  "), Err(NewsletterError::MissingEmail));
        assert!(matches!(
            store.subscribe("user@nodot"),
            Err(NewsletterError::InvalidEmail(_))
        ));
        assert!(matches!(
            store.subscribe("a@@b.c"),
            Err(NewsletterError::InvalidEmail(_))
        ));
        assert!(store.is_empty());
    }
}
