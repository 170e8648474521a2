//! Request construction and outcome classification.
//!
//! Every endpoint call flows through [`Http::request`]: a path template with
//! `{name}` placeholders is rendered, the session's Basic credentials and
//! query parameters are attached, the call is issued once, and the response
//! is classified as a typed payload or an [`Error`].

use reqwest::Method;
use reqwest::header::ACCEPT;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{Error, Result};

/// Shared transport state owned by the session.
#[derive(Debug)]
pub(crate) struct Http {
    client: reqwest::Client,
    base_url: String,
    token: String,
    debug: bool,
}

impl Http {
    pub(crate) fn new(client: reqwest::Client, base_url: String, token: String, debug: bool) -> Self {
        Self {
            client,
            base_url,
            token,
            debug,
        }
    }

    /// Start describing a single API call against a path template.
    pub(crate) fn request(&self, method: Method, template: &'static str) -> ApiRequest<'_> {
        ApiRequest {
            http: self,
            method,
            template,
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn get(&self, template: &'static str) -> ApiRequest<'_> {
        self.request(Method::GET, template)
    }

    pub(crate) fn post(&self, template: &'static str) -> ApiRequest<'_> {
        self.request(Method::POST, template)
    }

    pub(crate) fn put(&self, template: &'static str) -> ApiRequest<'_> {
        self.request(Method::PUT, template)
    }

    pub(crate) fn delete(&self, template: &'static str) -> ApiRequest<'_> {
        self.request(Method::DELETE, template)
    }
}

/// One API call in the making. Issues exactly one network request on
/// [`send`](ApiRequest::send).
#[derive(Debug)]
pub(crate) struct ApiRequest<'a> {
    http: &'a Http,
    method: Method,
    template: &'static str,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
    body: Option<serde_json::Value>,
}

impl ApiRequest<'_> {
    /// Bind a `{name}` placeholder in the path template.
    pub(crate) fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Add a query parameter.
    pub(crate) fn query_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    /// Attach a JSON request body.
    pub(crate) fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Issue the call and decode a success payload into `T`.
    pub(crate) async fn send<T: DeserializeOwned>(self) -> Result<T> {
        let path = render_path(self.template, &self.path_params)?;
        let url = format!("{}{}", self.http.base_url, path);

        if self.http.debug {
            debug!(method = %self.method, %url, "sending request");
        }

        let mut builder = self
            .http
            .client
            .request(self.method, &url)
            .basic_auth("api", Some(&self.http.token))
            .header(ACCEPT, "application/json");
        if !self.query.is_empty() {
            builder = builder.query(&self.query);
        }
        if let Some(body) = &self.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if self.http.debug {
            debug!(status = %status, length = bytes.len(), "received response");
        }

        if !status.is_success() {
            if let Ok(failure) = serde_json::from_slice::<ErrorEnvelope>(&bytes) {
                return Err(failure.into());
            }
            return Err(Error::Status(status));
        }

        let value: serde_json::Value = serde_json::from_slice(&bytes)?;
        if value.get("success").and_then(serde_json::Value::as_bool) == Some(false) {
            let failure: ErrorEnvelope = serde_json::from_value(value)?;
            return Err(failure.into());
        }
        serde_json::from_value(value).map_err(Error::Json)
    }
}

/// Wire shape of an error response.
#[derive(Debug, serde::Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "error")]
    message: String,
    #[serde(default)]
    code: i64,
}

impl From<ErrorEnvelope> for Error {
    fn from(envelope: ErrorEnvelope) -> Self {
        Error::Api {
            code: envelope.code,
            message: envelope.message,
        }
    }
}

/// Substitute `{name}` placeholders with their bound values.
fn render_path(template: &str, params: &[(&str, String)]) -> Result<String> {
    let mut path = template.to_string();
    for (name, value) in params {
        path = path.replace(&format!("{{{name}}}"), value);
    }
    if let Some(start) = path.find('{') {
        let rest = &path[start + 1..];
        let name = rest[..rest.find('}').unwrap_or(rest.len())].to_string();
        return Err(Error::UnboundParameter(name));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_bound_placeholders() {
        let path = render_path(
            "/domains/{domain}/aliases/{alias}/",
            &[
                ("domain", "example.com".to_string()),
                ("alias", "richard".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(path, "/domains/example.com/aliases/richard/");
    }

    #[test]
    fn template_without_placeholders_passes_through() {
        assert_eq!(render_path("/account/", &[]).unwrap(), "/account/");
    }

    #[test]
    fn unbound_placeholder_is_a_configuration_error() {
        let error = render_path(
            "/domains/{domain}/aliases/{alias}/",
            &[("domain", "example.com".to_string())],
        )
        .unwrap_err();
        assert!(matches!(error, Error::UnboundParameter(name) if name == "alias"));
    }

    #[test]
    fn error_envelope_maps_to_api_error() {
        let envelope: ErrorEnvelope =
            serde_json::from_str(r#"{"error":"fake error","code":420,"success":false}"#).unwrap();
        let error = Error::from(envelope);
        assert_eq!(error.to_string(), "420: fake error");
    }

    #[test]
    fn envelope_without_message_is_rejected() {
        assert!(serde_json::from_str::<ErrorEnvelope>(r#"{"code":500}"#).is_err());
    }
}
