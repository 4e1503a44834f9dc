use dnsverify_domain::{DomainError, NameServerAddress};

/// The system's configured resolvers, read once at startup.
pub trait ResolverConfigSource: Send + Sync {
    fn nameservers(&self) -> Result<Vec<NameServerAddress>, DomainError>;
}
