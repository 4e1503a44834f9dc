use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

pub const DNS_PORT: u16 = 53;

/// A nameserver to send queries to: either an IP literal or a hostname
/// that still has to be resolved before a socket can be opened.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameServerAddress {
    host: Arc<str>,
    port: u16,
}

impl NameServerAddress {
    pub fn new(host: impl Into<Arc<str>>) -> Self {
        Self::with_port(host, DNS_PORT)
    }

    pub fn with_port(host: impl Into<Arc<str>>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn ip(&self) -> Option<IpAddr> {
        self.host.parse().ok()
    }

    /// Socket address when the host is an IP literal.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.ip().map(|ip| SocketAddr::new(ip, self.port))
    }

    pub fn is_resolved(&self) -> bool {
        self.ip().is_some()
    }
}

impl fmt::Display for NameServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ip() {
            Some(IpAddr::V6(_)) => write!(f, "[{}]:{}", self.host, self.port),
            _ => write!(f, "{}:{}", self.host, self.port),
        }
    }
}
