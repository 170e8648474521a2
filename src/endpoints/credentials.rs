//! SMTP credential endpoints.
//!
//! SMTP credentials are a premium feature; on accounts without it the
//! service answers every call here with an error envelope, which surfaces
//! as a regular [`Error::Api`](crate::Error::Api).

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use crate::Result;
use crate::http::Http;
use crate::models::Credential;

const LIST_PATH: &str = "/domains/{domain}/credentials/";
const CREATE_PATH: &str = "/domains/{domain}/credentials/";
// The service rejects a trailing slash on the keyed credential routes.
const UPDATE_PATH: &str = "/domains/{domain}/credentials/{username}";
const DELETE_PATH: &str = "/domains/{domain}/credentials/{username}";

#[derive(Debug, Deserialize)]
struct CredentialsEnvelope {
    #[serde(default)]
    credentials: Vec<Credential>,
}

#[derive(Debug, Deserialize)]
struct CredentialEnvelope {
    credential: Credential,
}

/// Access to the SMTP credentials of a domain.
///
/// Obtained from [`Session::credentials`](crate::Session::credentials).
/// The service offers no way to fetch a single credential, so there is no
/// `read` method.
#[derive(Debug, Clone)]
pub struct CredentialEndpoint {
    http: Arc<Http>,
}

impl CredentialEndpoint {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// List the SMTP credentials of a domain. Single-page by service
    /// design.
    pub async fn list(&self, domain: &str) -> Result<Vec<Credential>> {
        let envelope: CredentialsEnvelope = self
            .http
            .get(LIST_PATH)
            .path_param("domain", domain)
            .send()
            .await?;
        Ok(envelope.credentials)
    }

    /// Create an SMTP account for sending email from the domain.
    ///
    /// # Examples
    /// ```no_run
    /// # use improvmx_client::Session;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), improvmx_client::Error> {
    /// let session = Session::new("api-token")?;
    /// let credential = session
    ///     .credentials()
    ///     .create("example.com", "outbound", "hunter2")
    ///     .await?;
    /// println!("created {}", credential.username);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, domain: &str, username: &str, password: &str) -> Result<Credential> {
        let envelope: CredentialEnvelope = self
            .http
            .post(CREATE_PATH)
            .path_param("domain", domain)
            .json(&json!({ "username": username, "password": password }))?
            .send()
            .await?;
        Ok(envelope.credential)
    }

    /// Change the password of an SMTP account, keyed by username.
    pub async fn update(&self, domain: &str, username: &str, password: &str) -> Result<Credential> {
        let envelope: CredentialEnvelope = self
            .http
            .put(UPDATE_PATH)
            .path_param("domain", domain)
            .path_param("username", username)
            .json(&json!({ "password": password }))?
            .send()
            .await?;
        Ok(envelope.credential)
    }

    /// Remove an SMTP account from a domain.
    pub async fn delete(&self, domain: &str, username: &str) -> Result<()> {
        self.http
            .delete(DELETE_PATH)
            .path_param("domain", domain)
            .path_param("username", username)
            .send::<serde_json::Value>()
            .await?;
        Ok(())
    }
}
