//! Domain endpoints.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::http::Http;
use crate::models::{Domain, DomainOptions, LogEntry};
use crate::options::ListOption;
use crate::pager::{self, Page};

const LIST_PATH: &str = "/domains/";
const CREATE_PATH: &str = "/domains/";
const READ_PATH: &str = "/domains/{domain}/";
const UPDATE_PATH: &str = "/domains/{domain}/";
const DELETE_PATH: &str = "/domains/{domain}/";
const VERIFY_PATH: &str = "/domains/{domain}/check/";
const LOGS_PATH: &str = "/domains/{domain}/logs/";

#[derive(Debug, Deserialize)]
struct DomainsEnvelope {
    #[serde(default)]
    domains: Vec<Domain>,
    #[serde(default)]
    total: usize,
}

impl Page for DomainsEnvelope {
    type Item = Domain;

    fn total(&self) -> usize {
        self.total
    }

    fn into_items(self) -> Vec<Domain> {
        self.domains
    }
}

#[derive(Debug, Deserialize)]
struct DomainEnvelope {
    domain: Domain,
}

#[derive(Debug, Deserialize)]
struct LogsEnvelope {
    #[serde(default)]
    logs: Vec<LogEntry>,
}

#[derive(Debug, Serialize)]
struct CreateDomainBody<'a> {
    domain: &'a str,
    #[serde(flatten)]
    options: &'a DomainOptions,
}

/// Access to the domains registered under the account.
///
/// Obtained from [`Session::domains`](crate::Session::domains).
#[derive(Debug, Clone)]
pub struct DomainEndpoint {
    http: Arc<Http>,
}

impl DomainEndpoint {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// List every domain on the account, optionally filtered.
    ///
    /// Pagination is handled internally: pages are fetched sequentially
    /// starting at the option's page (default 1) until the total reported
    /// by the service is reached, and the concatenated result is returned.
    /// An invalid option fails the call before any request is made.
    ///
    /// # Examples
    /// ```no_run
    /// # use improvmx_client::{ListOption, Session};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), improvmx_client::Error> {
    /// let session = Session::new("api-token")?;
    /// let option = ListOption::new().is_active(true);
    /// for domain in session.domains().list(Some(&option)).await? {
    ///     println!("{}", domain.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, option: Option<&ListOption>) -> Result<Vec<Domain>> {
        let option = option.cloned().unwrap_or_default();
        option.validate()?;
        let filters = option.query_params(true);
        pager::fetch_all::<DomainsEnvelope, _>(option.start_page(), |page| {
            let mut request = self.http.get(LIST_PATH);
            for &(name, ref value) in &filters {
                request = request.query_param(name, value.clone());
            }
            request.query_param("page", page.to_string())
        })
        .await
    }

    /// Fetch a single domain by name.
    pub async fn read(&self, domain: &str) -> Result<Domain> {
        let envelope: DomainEnvelope = self
            .http
            .get(READ_PATH)
            .path_param("domain", domain)
            .send()
            .await?;
        Ok(envelope.domain)
    }

    /// Add a domain to the account, with an optional notification email
    /// and whitelabel.
    pub async fn create(&self, domain: &str, options: Option<&DomainOptions>) -> Result<Domain> {
        let default = DomainOptions::default();
        let body = CreateDomainBody {
            domain,
            options: options.unwrap_or(&default),
        };
        let envelope: DomainEnvelope = self.http.post(CREATE_PATH).json(&body)?.send().await?;
        Ok(envelope.domain)
    }

    /// Update the notification email or whitelabel of a domain.
    ///
    /// Fields left unset in `options` are not transmitted and keep their
    /// server-side values. The domain name itself cannot be changed.
    pub async fn update(&self, domain: &str, options: Option<&DomainOptions>) -> Result<Domain> {
        let default = DomainOptions::default();
        let envelope: DomainEnvelope = self
            .http
            .put(UPDATE_PATH)
            .path_param("domain", domain)
            .json(options.unwrap_or(&default))?
            .send()
            .await?;
        Ok(envelope.domain)
    }

    /// Remove a domain from the account.
    pub async fn delete(&self, domain: &str) -> Result<()> {
        self.http
            .delete(DELETE_PATH)
            .path_param("domain", domain)
            .send::<serde_json::Value>()
            .await?;
        Ok(())
    }

    /// Check whether the DNS and MX entries of a domain are valid.
    ///
    /// Only success or failure is reported; the diagnostic payload returned
    /// by the service is discarded.
    pub async fn verify(&self, domain: &str) -> Result<()> {
        self.http
            .get(VERIFY_PATH)
            .path_param("domain", domain)
            .send::<serde_json::Value>()
            .await?;
        Ok(())
    }

    /// Fetch the delivery logs for a domain.
    pub async fn logs(&self, domain: &str) -> Result<Vec<LogEntry>> {
        let envelope: LogsEnvelope = self
            .http
            .get(LOGS_PATH)
            .path_param("domain", domain)
            .send()
            .await?;
        Ok(envelope.logs)
    }
}
