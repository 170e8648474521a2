//! Transparent aggregation of paginated listings.

use serde::de::DeserializeOwned;

use crate::Result;
use crate::error::Error;
use crate::http::ApiRequest;

/// A wire envelope carrying one page of a listing.
pub(crate) trait Page {
    type Item;

    /// Total number of matching items across all pages, as advertised by
    /// the service.
    fn total(&self) -> usize;

    /// The items of this page, in server order.
    fn into_items(self) -> Vec<Self::Item>;
}

/// Fetch pages sequentially until the advertised total is reached.
///
/// `next` builds the request for a given page number; pages are requested
/// one at a time and items are concatenated in arrival order. If the
/// service reports differing totals across pages, the latest one governs.
/// A page that contributes no new items while the total is unreached stops
/// the loop with [`Error::PaginationStalled`] instead of spinning. Any page
/// failure aborts the whole listing; no partial result is returned.
pub(crate) async fn fetch_all<'a, P, F>(start_page: i64, mut next: F) -> Result<Vec<P::Item>>
where
    P: Page + DeserializeOwned,
    F: FnMut(i64) -> ApiRequest<'a>,
{
    let mut items = Vec::new();
    let mut page = start_page;
    loop {
        let response: P = next(page).send().await?;
        let total = response.total();
        let before = items.len();
        items.extend(response.into_items());
        if items.len() >= total {
            return Ok(items);
        }
        if items.len() == before {
            return Err(Error::PaginationStalled {
                fetched: items.len(),
                total,
            });
        }
        page += 1;
    }
}
