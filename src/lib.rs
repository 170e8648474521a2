//! # ImprovMX Client
//! Asynchronous wrapper around the [ImprovMX](https://improvmx.com) email forwarding REST API, exposing the account, domain, alias, and SMTP credential endpoints as typed methods on a [`Session`].
//!
//! ## Audience and uses
//! For Rust developers managing email forwarding programmatically: register domains, point aliases at destination addresses, inspect delivery logs, and rotate SMTP credentials without touching the dashboard. Construct a [`Session`] with an API token, then call methods on its endpoint groups.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`, so ensure the chosen Tokio features (`rt-multi-thread` or `current_thread`) are available in your application.
//!
//! ## Pagination
//! The domain and alias listing endpoints are paginated by the service. `list` methods drive the pages sequentially and return the fully aggregated result; callers never see a page boundary. Filters are supplied through [`ListOption`], which is validated before the first request.
//!
//! ## Out of scope
//! No rate limiting, caching, retries, or offline queuing: each call issues exactly one HTTP exchange per page and either returns the full result or an error. Cancellation follows the usual async rule, dropping a call's future aborts it, including mid-pagination.
//!
//! ## Errors
//! All methods return the crate-wide [`Result`]. Transport failures surface as [`Error::Request`], error envelopes from the service as [`Error::Api`], and invalid list options as [`Error::InvalidLimit`] or [`Error::InvalidPage`] before any network traffic.
//!
//! ## Example
//! ```no_run
//! use improvmx_client::Session;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), improvmx_client::Error> {
//!     let session = Session::new(std::env::var("IMPROVMX_API_TOKEN").unwrap())?;
//!
//!     let account = session.account().read().await?;
//!     println!("logged in as {}", account.email);
//!
//!     for domain in session.domains().list(None).await? {
//!         println!("{} (active: {})", domain.name, domain.active);
//!     }
//!
//!     let alias = session
//!         .aliases()
//!         .create("example.com", "richard", "richard@example.test")
//!         .await?;
//!     println!("forwarding {} to {}", alias.name, alias.address);
//!     Ok(())
//! }
//! ```

mod endpoints;
mod error;
mod http;
mod models;
mod options;
mod pager;
mod session;
mod time;

pub use endpoints::{AccountEndpoint, AliasEndpoint, CredentialEndpoint, DomainEndpoint};
pub use error::Error;
pub use models::{
    Account, AccountLimits, AccountPlan, Alias, Contact, Credential, Domain, DomainOptions,
    LogEntry, LogEvent, MessageStatus, Whitelabel,
};
pub use options::ListOption;
pub use session::{BASE_URL, Session, SessionBuilder};
pub use time::Timestamp;

/// Result type alias for ImprovMX operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
