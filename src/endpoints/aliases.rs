//! Alias endpoints.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use crate::Result;
use crate::http::Http;
use crate::models::{Alias, LogEntry};
use crate::options::ListOption;
use crate::pager::{self, Page};

const LIST_PATH: &str = "/domains/{domain}/aliases/";
const CREATE_PATH: &str = "/domains/{domain}/aliases/";
const READ_PATH: &str = "/domains/{domain}/aliases/{alias}/";
const UPDATE_PATH: &str = "/domains/{domain}/aliases/{alias}/";
const DELETE_PATH: &str = "/domains/{domain}/aliases/{alias}/";
const LOGS_PATH: &str = "/domains/{domain}/logs/{alias}/";

#[derive(Debug, Deserialize)]
struct AliasesEnvelope {
    #[serde(default)]
    aliases: Vec<Alias>,
    #[serde(default)]
    total: usize,
}

impl Page for AliasesEnvelope {
    type Item = Alias;

    fn total(&self) -> usize {
        self.total
    }

    fn into_items(self) -> Vec<Alias> {
        self.aliases
    }
}

#[derive(Debug, Deserialize)]
struct AliasEnvelope {
    alias: Alias,
}

#[derive(Debug, Deserialize)]
struct LogsEnvelope {
    #[serde(default)]
    logs: Vec<LogEntry>,
}

/// Access to the forwarding aliases of a domain.
///
/// Obtained from [`Session::aliases`](crate::Session::aliases).
#[derive(Debug, Clone)]
pub struct AliasEndpoint {
    http: Arc<Http>,
}

impl AliasEndpoint {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// List every alias of a domain, optionally filtered by prefix or
    /// active state.
    ///
    /// Pagination is handled internally, as in
    /// [`DomainEndpoint::list`](crate::DomainEndpoint::list). The alias
    /// listing endpoint does not accept a `limit` parameter, so that
    /// filter is never transmitted here.
    ///
    /// # Examples
    /// ```no_run
    /// # use improvmx_client::Session;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), improvmx_client::Error> {
    /// let session = Session::new("api-token")?;
    /// for alias in session.aliases().list("example.com", None).await? {
    ///     println!("{} -> {}", alias.name, alias.address);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, domain: &str, option: Option<&ListOption>) -> Result<Vec<Alias>> {
        let option = option.cloned().unwrap_or_default();
        option.validate()?;
        let filters = option.query_params(false);
        pager::fetch_all::<AliasesEnvelope, _>(option.start_page(), |page| {
            let mut request = self.http.get(LIST_PATH).path_param("domain", domain);
            for &(name, ref value) in &filters {
                request = request.query_param(name, value.clone());
            }
            request.query_param("page", page.to_string())
        })
        .await
    }

    /// Create an alias forwarding to the given address.
    ///
    /// # Examples
    /// ```no_run
    /// # use improvmx_client::Session;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), improvmx_client::Error> {
    /// let session = Session::new("api-token")?;
    /// let alias = session
    ///     .aliases()
    ///     .create("example.com", "richard", "richard@example.test")
    ///     .await?;
    /// println!("created alias {}", alias.name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, domain: &str, alias: &str, address: &str) -> Result<Alias> {
        let envelope: AliasEnvelope = self
            .http
            .post(CREATE_PATH)
            .path_param("domain", domain)
            .json(&json!({ "alias": alias, "forward": address }))?
            .send()
            .await?;
        Ok(envelope.alias)
    }

    /// Fetch a single alias of a domain.
    pub async fn read(&self, domain: &str, alias: &str) -> Result<Alias> {
        let envelope: AliasEnvelope = self
            .http
            .get(READ_PATH)
            .path_param("domain", domain)
            .path_param("alias", alias)
            .send()
            .await?;
        Ok(envelope.alias)
    }

    /// Change the forwarding address of an alias.
    pub async fn update(&self, domain: &str, alias: &str, address: &str) -> Result<Alias> {
        let envelope: AliasEnvelope = self
            .http
            .put(UPDATE_PATH)
            .path_param("domain", domain)
            .path_param("alias", alias)
            .json(&json!({ "forward": address }))?
            .send()
            .await?;
        Ok(envelope.alias)
    }

    /// Remove an alias from a domain.
    pub async fn delete(&self, domain: &str, alias: &str) -> Result<()> {
        self.http
            .delete(DELETE_PATH)
            .path_param("domain", domain)
            .path_param("alias", alias)
            .send::<serde_json::Value>()
            .await?;
        Ok(())
    }

    /// Fetch the delivery logs for one alias of a domain.
    pub async fn logs(&self, domain: &str, alias: &str) -> Result<Vec<LogEntry>> {
        let envelope: LogsEnvelope = self
            .http
            .get(LOGS_PATH)
            .path_param("domain", domain)
            .path_param("alias", alias)
            .send()
            .await?;
        Ok(envelope.logs)
    }
}
