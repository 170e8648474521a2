//! Endpoint groups, one per resource family.

mod account;
mod aliases;
mod credentials;
mod domains;

pub use account::AccountEndpoint;
pub use aliases::AliasEndpoint;
pub use credentials::CredentialEndpoint;
pub use domains::DomainEndpoint;
