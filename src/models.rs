//! Resource records decoded from API responses.
//!
//! Field names mirror the ImprovMX wire format. Every record is decoded
//! fresh per response; absent fields fall back to their zero values.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Delivery state of a forwarded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum MessageStatus {
    /// The email was accepted to be processed.
    Queued,
    /// The email was refused at the SMTP connection.
    Refused,
    /// The email was successfully delivered to the end destination.
    Delivered,
    /// The end destination refused the email temporarily; delivery will be
    /// retried with increasing delays.
    SoftBounce,
    /// The end destination could not accept the email definitively.
    HardBounce,
    /// A state this client version does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A named email address appearing in delivery logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// One step in the delivery of a logged message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogEvent {
    #[serde(default)]
    pub code: i64,
    #[serde(rename = "created", default)]
    pub created_at: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub local: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub status: MessageStatus,
}

/// A delivery log entry for a domain or alias.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "created", default)]
    pub created_at: String,
    #[serde(rename = "created_raw", default)]
    pub created_raw: String,
    #[serde(default)]
    pub events: Vec<LogEvent>,
    /// Destination the message was forwarded to.
    #[serde(rename = "forward", default)]
    pub address: Contact,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub id: String,
    #[serde(rename = "messageId", default)]
    pub message_id: String,
    #[serde(default)]
    pub recipient: Contact,
    #[serde(default)]
    pub sender: Contact,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub transport: String,
}

/// A domain configured as a whitelabel for the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Whitelabel {
    #[serde(default)]
    pub name: String,
}

/// Plan the account is subscribed to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountPlan {
    #[serde(default)]
    pub aliases_limit: i64,
    #[serde(default)]
    pub daily_quota: i64,
    #[serde(default)]
    pub domains_limit: i64,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub yearly: bool,
}

/// Usage limits attached to the account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountLimits {
    #[serde(default)]
    pub aliases: i64,
    #[serde(default)]
    pub daily_quota: i64,
    #[serde(default)]
    pub domains: i64,
    #[serde(rename = "ratelimit", default)]
    pub rate_limit: i64,
    #[serde(default)]
    pub redirections: i64,
    #[serde(default)]
    pub subdomains: i64,
}

/// The account profile, including plan and limits snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub billing_email: String,
    #[serde(default)]
    pub cancels_on: Timestamp,
    #[serde(default)]
    pub card_brand: String,
    #[serde(default)]
    pub company_details: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(rename = "company_vat", default)]
    pub company_vat: String,
    #[serde(default)]
    pub country: String,
    #[serde(rename = "created", default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub last4: String,
    #[serde(default)]
    pub limits: AccountLimits,
    #[serde(default)]
    pub lock_reason: String,
    #[serde(default)]
    pub locked: bool,
    /// Whether a password is set on the account.
    #[serde(default)]
    pub password: bool,
    #[serde(default)]
    pub plan: Option<AccountPlan>,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub privacy_level: i64,
    #[serde(default)]
    pub renew_date: Timestamp,
}

/// A verified mail domain under the account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Domain {
    #[serde(default)]
    pub active: bool,
    #[serde(rename = "domain", default)]
    pub name: String,
    #[serde(default)]
    pub display: String,
    #[serde(rename = "dkim_selector", default)]
    pub dkim_selector: String,
    #[serde(default)]
    pub notification_email: String,
    #[serde(rename = "white_label", default)]
    pub whitelabel: String,
    #[serde(default)]
    pub added: Timestamp,
    #[serde(default)]
    pub aliases: Vec<Alias>,
}

/// Optional fields for creating or updating a domain.
///
/// Unset fields are not transmitted, so an update never overwrites values
/// the caller left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainOptions {
    /// Address notified about delivery problems for the domain.
    #[serde(rename = "notification_email", skip_serializing_if = "Option::is_none")]
    pub notification_email: Option<String>,
    /// Whitelabel domain used for outbound presentation.
    #[serde(rename = "whitelabel", skip_serializing_if = "Option::is_none")]
    pub whitelabel: Option<String>,
}

/// An email forwarding rule scoped to a domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Alias {
    /// The address the alias forwards to.
    #[serde(rename = "forward", default)]
    pub address: String,
    #[serde(rename = "alias", default)]
    pub name: String,
    #[serde(default)]
    pub id: i64,
}

/// An SMTP credential permitting send-as-domain access.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credential {
    #[serde(rename = "created", default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub usage: i64,
}
