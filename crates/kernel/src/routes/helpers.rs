//! Shared route helpers.

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::RequestUser;

/// Page size when the client does not send `limit`.
pub const DEFAULT_LIMIT: usize = 20;

/// `limit`/`offset` query parameters.
///
/// Negative values are clamped to zero rather than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PageQuery {
    pub fn limit(&self) -> usize {
        self.limit.map(non_negative).unwrap_or(DEFAULT_LIMIT)
    }

    pub fn offset(&self) -> usize {
        self.offset.map(non_negative).unwrap_or(0)
    }
}

fn non_negative(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

/// Require a known caller, rejecting anonymous requests.
pub fn require_user(user: &RequestUser) -> AppResult<&str> {
    user.id()
        .ok_or_else(|| AppError::bad_request("an authenticated user is required"))
}
