use dnsverify_application::ports::ResolverConfigSource;
use dnsverify_domain::{DomainError, NameServerAddress};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the system resolver list from a resolv.conf file.
#[derive(Debug, Clone)]
pub struct ResolvConfReader {
    path: PathBuf,
}

impl ResolvConfReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Collects `nameserver` entries in file order.
    ///
    /// Comment lines start with `#` or `;`. Other directives (`search`,
    /// `domain`, `options`, `sortlist`) are ignored.
    pub fn parse(contents: &str) -> Result<Vec<NameServerAddress>, DomainError> {
        let mut servers = Vec::new();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let mut words = line.split_whitespace();
            if words.next() != Some("nameserver") {
                continue;
            }

            match words.next() {
                Some(addr) => servers.push(NameServerAddress::new(addr)),
                None => debug!(line, "nameserver directive without an address"),
            }
        }

        if servers.is_empty() {
            return Err(DomainError::ConfigError(
                "resolv.conf lists no nameservers".to_string(),
            ));
        }

        Ok(servers)
    }
}

impl ResolverConfigSource for ResolvConfReader {
    fn nameservers(&self) -> Result<Vec<NameServerAddress>, DomainError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::ConfigError(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        Self::parse(&contents).map_err(|e| match e {
            DomainError::ConfigError(reason) => {
                DomainError::ConfigError(format!("{}: {}", self.path.display(), reason))
            }
            other => other,
        })
    }
}
