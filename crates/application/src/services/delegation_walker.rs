use super::RootDirectory;
use crate::ports::{pick, DnsExchange, RandomSource};
use dnsverify_domain::{DomainError, DomainName, NameServerAddress, RecordType};
use std::sync::Arc;
use tracing::debug;

/// Finds a nameserver for a name by following NS delegations down from the root.
pub struct DelegationWalker {
    exchange: Arc<dyn DnsExchange>,
    root: Arc<RootDirectory>,
    rng: Arc<dyn RandomSource>,
}

impl DelegationWalker {
    pub fn new(
        exchange: Arc<dyn DnsExchange>,
        root: Arc<RootDirectory>,
        rng: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            exchange,
            root,
            rng,
        }
    }

    /// Walks every suffix of `fqdn`, shortest first, issuing one NS query per
    /// non-root suffix against the nameserver found for its parent.
    ///
    /// A suffix with no NS records inherits its parent's nameserver.
    pub async fn walk(&self, fqdn: &DomainName) -> Result<NameServerAddress, DomainError> {
        let mut nameserver = self.root.pick_walk_root();
        debug!(fqdn = %fqdn, root = %nameserver, "Starting delegation walk");

        for suffix in fqdn.suffixes().into_iter().filter(|s| !s.is_root()) {
            nameserver = self.step(&suffix, nameserver).await?;
        }

        debug!(fqdn = %fqdn, nameserver = %nameserver, "Delegation walk finished");
        Ok(nameserver)
    }

    async fn step(
        &self,
        suffix: &DomainName,
        parent: NameServerAddress,
    ) -> Result<NameServerAddress, DomainError> {
        let response = self
            .exchange
            .exchange(&parent, suffix, RecordType::NS)
            .await
            .map_err(|e| DomainError::Delegation {
                suffix: suffix.to_string(),
                reason: e.to_string(),
            })?;

        let candidates = response.nameservers();
        match pick(self.rng.as_ref(), &candidates) {
            Some(ns) => {
                debug!(
                    suffix = %suffix,
                    candidates = candidates.len(),
                    nameserver = %ns,
                    "Delegation found"
                );
                Ok(NameServerAddress::new(ns.as_str()))
            }
            None => {
                debug!(suffix = %suffix, nameserver = %parent, "No delegation, keeping parent");
                Ok(parent)
            }
        }
    }
}
