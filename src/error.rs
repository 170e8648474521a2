//! Error types for ImprovMX API operations.

use reqwest::StatusCode;

/// Errors returned by ImprovMX API operations.
///
/// Validation problems ([`Error::InvalidLimit`], [`Error::InvalidPage`]) are
/// raised before any network traffic. Transport problems surface as
/// [`Error::Request`]; a well-formed error envelope from the service becomes
/// [`Error::Api`] and renders as `"<code>: <message>"`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The service returned an error envelope.
    #[error("{code}: {message}")]
    Api {
        /// Numeric error code reported by the service.
        code: i64,
        /// Human-readable error message reported by the service.
        message: String,
    },

    /// The underlying HTTP request failed (DNS, connection, timeout).
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status and no usable
    /// error envelope in the body.
    #[error("unexpected http status: {0}")]
    Status(StatusCode),

    /// A response body could not be decoded into the expected shape.
    #[error("response parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Limit is outside the range accepted by the service.
    #[error("limit is outside the expected range of [5, 100]: {0}")]
    InvalidLimit(i64),

    /// Page numbers start at 1.
    #[error("page must be greater than or equal to 1: {0}")]
    InvalidPage(i64),

    /// A path template placeholder was never bound to a value.
    #[error("unbound path parameter: {{{0}}}")]
    UnboundParameter(String),

    /// A paginated listing stopped returning new items before reaching
    /// the total advertised by the service.
    #[error("pagination did not make progress: fetched {fetched} of {total} items")]
    PaginationStalled {
        /// Items accumulated so far.
        fetched: usize,
        /// Total advertised by the latest page response.
        total: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_renders_code_and_message() {
        let error = Error::Api {
            code: 420,
            message: "fake error".into(),
        };
        assert_eq!(error.to_string(), "420: fake error");
    }

    #[test]
    fn limit_error_names_value_and_range() {
        assert_eq!(
            Error::InvalidLimit(4).to_string(),
            "limit is outside the expected range of [5, 100]: 4"
        );
    }

    #[test]
    fn page_error_names_value() {
        assert_eq!(
            Error::InvalidPage(0).to_string(),
            "page must be greater than or equal to 1: 0"
        );
    }
}
