use crate::RecordType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Malformed DNS response from {server}: {reason}")]
    MalformedResponse { server: String, reason: String },

    #[error("error getting NS for {suffix:?}: {reason}")]
    Delegation { suffix: String, reason: String },

    #[error("error getting {query_type} for {fqdn:?}: {reason}")]
    Query {
        query_type: RecordType,
        fqdn: String,
        reason: String,
    },

    #[error("error resolving {hostname}: {reason}")]
    Verification { hostname: String, reason: String },
}

impl DomainError {
    /// Hostname a verification failure is attributed to.
    pub fn hostname(&self) -> Option<&str> {
        match self {
            DomainError::Verification { hostname, .. } => Some(hostname),
            _ => None,
        }
    }

    /// Message without the attribution prefix, as reported to API clients.
    pub fn reason(&self) -> String {
        match self {
            DomainError::Verification { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }
}
