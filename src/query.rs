//! List query parameters: exact-name filter plus 1-based page/limit windowing.

use serde::Deserialize;

use crate::error::StoreError;

/// Page size used when a request gives `page` without `limit`.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Raw list parameters as they arrive on the query string.
///
/// `page` and `limit` stay strings until [`ListQuery::page_request`] so a
/// value like `abc` can be reported as a validation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl ListQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page.to_string());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit.to_string());
        self
    }

    /// Resolve the pagination window, if any was asked for.
    ///
    /// Returns `None` when neither `page` nor `limit` is present.
    pub fn page_request(&self, default_limit: usize) -> Result<Option<PageRequest>, StoreError> {
        if self.page.is_none() && self.limit.is_none() {
            return Ok(None);
        }

        let page = match &self.page {
            Some(raw) => parse_positive("page", raw)?,
            None => 1,
        };
        let limit = match &self.limit {
            Some(raw) => parse_positive("limit", raw)?,
            None => default_limit,
        };

        Ok(Some(PageRequest { page, limit }))
    }
}

/// A validated 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl PageRequest {
    /// Index of the first record on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Digits-only and non-zero. Values past `usize::MAX` saturate, so an
/// absurdly large page is out of range rather than malformed.
fn parse_positive(field: &str, raw: &str) -> Result<usize, StoreError> {
    let is_digits = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
    if !is_digits || raw.bytes().all(|b| b == b'0') {
        return Err(StoreError::Validation(format!(
            "{} must be a positive integer, got {:?}",
            field, raw
        )));
    }
    Ok(raw.parse::<usize>().unwrap_or(usize::MAX))
}
