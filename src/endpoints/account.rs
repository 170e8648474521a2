//! Account endpoints.

use std::sync::Arc;

use serde::Deserialize;

use crate::Result;
use crate::http::Http;
use crate::models::{Account, Whitelabel};

const READ_PATH: &str = "/account/";
const LABELS_PATH: &str = "/account/whitelabels/";

#[derive(Debug, Deserialize)]
struct AccountEnvelope {
    account: Account,
}

#[derive(Debug, Deserialize)]
struct WhitelabelsEnvelope {
    #[serde(default)]
    whitelabels: Vec<Whitelabel>,
}

/// Access to the account profile and its whitelabel domains.
///
/// Obtained from [`Session::account`](crate::Session::account).
#[derive(Debug, Clone)]
pub struct AccountEndpoint {
    http: Arc<Http>,
}

impl AccountEndpoint {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Fetch the account profile, including its plan and limits snapshot.
    ///
    /// # Examples
    /// ```no_run
    /// # use improvmx_client::Session;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), improvmx_client::Error> {
    /// let session = Session::new("api-token")?;
    /// let account = session.account().read().await?;
    /// println!("{} (premium: {})", account.email, account.premium);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn read(&self) -> Result<Account> {
        let envelope: AccountEnvelope = self.http.get(READ_PATH).send().await?;
        Ok(envelope.account)
    }

    /// List the domains used as whitelabels on the account.
    pub async fn labels(&self) -> Result<Vec<Whitelabel>> {
        let envelope: WhitelabelsEnvelope = self.http.get(LABELS_PATH).send().await?;
        Ok(envelope.whitelabels)
    }
}
