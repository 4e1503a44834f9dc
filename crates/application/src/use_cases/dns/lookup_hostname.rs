use crate::services::{DelegationWalker, RecordAggregator, RootDirectory};
use dnsverify_domain::{DomainError, DomainName, ResolutionResult};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct LookupHostnameUseCase {
    root: Arc<RootDirectory>,
    walker: Arc<DelegationWalker>,
    aggregator: Arc<RecordAggregator>,
}

impl LookupHostnameUseCase {
    pub fn new(
        root: Arc<RootDirectory>,
        walker: Arc<DelegationWalker>,
        aggregator: Arc<RecordAggregator>,
    ) -> Self {
        Self {
            root,
            walker,
            aggregator,
        }
    }

    /// Resolves `hostname` to its merged A/CNAME records.
    ///
    /// With `nocache` the authoritative nameserver is found by a delegation
    /// walk; otherwise the configured system resolver answers directly.
    pub async fn execute(
        &self,
        hostname: &DomainName,
        nocache: bool,
    ) -> Result<ResolutionResult, DomainError> {
        let nameserver = if nocache {
            self.walker.walk(hostname).await.inspect_err(|e| {
                warn!(hostname = %hostname, error = %e, "Delegation walk failed");
            })?
        } else {
            self.root.pick_starting_server()
        };

        debug!(hostname = %hostname, nameserver = %nameserver, nocache, "Looking up records");

        self.aggregator
            .aggregate(&nameserver, hostname)
            .await
            .inspect_err(|e| {
                warn!(hostname = %hostname, nameserver = %nameserver, error = %e, "Lookup failed");
            })
    }
}
