//! Session construction and shared transport configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::endpoints::{AccountEndpoint, AliasEndpoint, CredentialEndpoint, DomainEndpoint};
use crate::http::Http;
use crate::Result;

/// Production endpoint of the ImprovMX REST API.
pub const BASE_URL: &str = "https://api.improvmx.com/v3";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// An authenticated connection to the ImprovMX API.
///
/// The session owns the shared transport configuration (base URL, API
/// token, timeout) and hands out one endpoint group per resource family.
/// It is immutable after construction; use [`Session::builder`] to change
/// defaults.
///
/// Authentication uses HTTP Basic with username `api` and the API token as
/// password, attached to every request.
///
/// # Examples
/// ```no_run
/// # use improvmx_client::Session;
/// # #[tokio::main]
/// # async fn main() -> Result<(), improvmx_client::Error> {
/// let session = Session::new("api-token")?;
/// let domains = session.domains().list(None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Session {
    account: AccountEndpoint,
    domains: DomainEndpoint,
    aliases: AliasEndpoint,
    credentials: CredentialEndpoint,
}

impl Session {
    /// Create a session with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Create a builder for configuring the session.
    pub fn builder(token: impl Into<String>) -> SessionBuilder {
        SessionBuilder::new(token)
    }

    /// Account profile and whitelabel endpoints.
    pub fn account(&self) -> &AccountEndpoint {
        &self.account
    }

    /// Domain endpoints.
    pub fn domains(&self) -> &DomainEndpoint {
        &self.domains
    }

    /// Alias endpoints.
    pub fn aliases(&self) -> &AliasEndpoint {
        &self.aliases
    }

    /// SMTP credential endpoints.
    pub fn credentials(&self) -> &CredentialEndpoint {
        &self.credentials
    }
}

/// Builder for configuring a [`Session`].
///
/// # Examples
/// ```no_run
/// # use improvmx_client::Session;
/// # fn main() -> Result<(), improvmx_client::Error> {
/// let session = Session::builder("api-token")
///     .user_agent("my-app/1.0")
///     .debug(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    token: String,
    base_url: String,
    user_agent: Option<String>,
    timeout: Duration,
    debug: bool,
    client: Option<reqwest::Client>,
}

impl SessionBuilder {
    fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: BASE_URL.to_string(),
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
            debug: false,
            client: None,
        }
    }

    /// Override the base URL, typically for testing or sandboxing.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the `User-Agent` header for all requests. Unset by default.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override the per-request timeout (default: 60 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Emit `tracing` debug events for every request and response.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Supply a pre-built [`reqwest::Client`].
    ///
    /// This is provided for extreme user needs; the timeout and user agent
    /// configured on this builder are ignored in favor of whatever the
    /// given client was built with.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the session. No network traffic happens here.
    pub fn build(self) -> Result<Session> {
        let client = match self.client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder().timeout(self.timeout);
                if let Some(user_agent) = &self.user_agent {
                    builder = builder.user_agent(user_agent.clone());
                }
                builder.build()?
            }
        };
        let http = Arc::new(Http::new(client, self.base_url, self.token, self.debug));
        Ok(Session {
            account: AccountEndpoint::new(Arc::clone(&http)),
            domains: DomainEndpoint::new(Arc::clone(&http)),
            aliases: AliasEndpoint::new(Arc::clone(&http)),
            credentials: CredentialEndpoint::new(http),
        })
    }
}
