//! Optional filters for paginated listing calls.

use crate::{Error, Result};

/// Optional filters for [`DomainEndpoint::list`] and [`AliasEndpoint::list`].
///
/// All fields start unset. Setting an out-of-range value is legal; the value
/// is only checked when the option is used, before any network call.
///
/// [`DomainEndpoint::list`]: crate::DomainEndpoint::list
/// [`AliasEndpoint::list`]: crate::AliasEndpoint::list
///
/// # Examples
/// ```
/// use improvmx_client::ListOption;
///
/// let option = ListOption::new()
///     .starts_with("sales")
///     .is_active(true)
///     .limit(20)
///     .page(2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOption {
    starts_with: Option<String>,
    is_active: Option<bool>,
    limit: Option<i64>,
    page: Option<i64>,
}

impl ListOption {
    /// Create an option with every filter unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict results to names starting with the given prefix.
    pub fn starts_with(mut self, value: impl Into<String>) -> Self {
        self.starts_with = Some(value.into());
        self
    }

    /// Restrict results to active (`true`) or inactive (`false`) resources.
    ///
    /// Unset means both active and inactive resources are returned.
    pub fn is_active(mut self, value: bool) -> Self {
        self.is_active = Some(value);
        self
    }

    /// Number of items per page. The service accepts values in `[5, 100]`
    /// and defaults to 50 when unset.
    pub fn limit(mut self, value: i64) -> Self {
        self.limit = Some(value);
        self
    }

    /// Page to start listing from. Must be at least 1 when set.
    pub fn page(mut self, value: i64) -> Self {
        self.page = Some(value);
        self
    }

    /// Clears the value provided by [`starts_with`](Self::starts_with).
    pub fn clear_starts_with(mut self) -> Self {
        self.starts_with = None;
        self
    }

    /// Clears the value provided by [`is_active`](Self::is_active).
    pub fn clear_is_active(mut self) -> Self {
        self.is_active = None;
        self
    }

    /// Clears the value provided by [`limit`](Self::limit).
    pub fn clear_limit(mut self) -> Self {
        self.limit = None;
        self
    }

    /// Clears the value provided by [`page`](Self::page).
    pub fn clear_page(mut self) -> Self {
        self.page = None;
        self
    }

    /// Checks the set fields against the ranges the service accepts.
    ///
    /// Runs automatically before the first request of a listing call; a
    /// failure there aborts the call without any network traffic.
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.limit {
            if !(5..=100).contains(&limit) {
                return Err(Error::InvalidLimit(limit));
            }
        }
        if let Some(page) = self.page {
            if page < 1 {
                return Err(Error::InvalidPage(page));
            }
        }
        Ok(())
    }

    /// First page to request, defaulting to 1.
    pub(crate) fn start_page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    /// Wire query parameters for the set filters.
    ///
    /// The alias listing endpoint rejects a `limit` parameter, so callers
    /// opt into it with `with_limit`.
    pub(crate) fn query_params(&self, with_limit: bool) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(prefix) = &self.starts_with {
            if !prefix.is_empty() {
                params.push(("q", prefix.clone()));
            }
        }
        if let Some(active) = self.is_active {
            params.push(("is_active", if active { "1" } else { "0" }.to_string()));
        }
        if with_limit {
            if let Some(limit) = self.limit {
                params.push(("limit", limit.to_string()));
            }
        }
        params
    }
}
