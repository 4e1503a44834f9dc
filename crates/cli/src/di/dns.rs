use anyhow::Context;
use dnsverify_application::ports::{DnsExchange, RandomSource};
use dnsverify_application::services::{DelegationWalker, RecordAggregator, RootDirectory};
use dnsverify_domain::Config;
use dnsverify_infrastructure::dns::HickoryDnsExchange;
use dnsverify_infrastructure::system::{FastrandSource, ResolvConfReader};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub root: Arc<RootDirectory>,
    pub walker: Arc<DelegationWalker>,
    pub aggregator: Arc<RecordAggregator>,
}

impl DnsServices {
    /// Reads resolv.conf once; a missing or empty file aborts startup.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver = &config.resolver;
        let timeout = Duration::from_secs(resolver.query_timeout_secs);
        let rng: Arc<dyn RandomSource> = Arc::new(FastrandSource);

        let resolv_conf = ResolvConfReader::new(&resolver.resolv_conf);
        let root = Arc::new(
            RootDirectory::initialize(&resolv_conf, resolver.walk_root, rng.clone())
                .context("error loading root config")?,
        );

        let walk_exchange: Arc<dyn DnsExchange> =
            Arc::new(HickoryDnsExchange::new(resolver.walk_protocol, timeout));
        let lookup_exchange: Arc<dyn DnsExchange> =
            Arc::new(HickoryDnsExchange::new(resolver.lookup_protocol, timeout));

        info!(
            nameservers = root.servers().len(),
            walk_protocol = resolver.walk_protocol.as_str(),
            lookup_protocol = resolver.lookup_protocol.as_str(),
            timeout_secs = resolver.query_timeout_secs,
            "DNS services initialized"
        );

        Ok(Self {
            walker: Arc::new(DelegationWalker::new(walk_exchange, root.clone(), rng)),
            aggregator: Arc::new(RecordAggregator::new(lookup_exchange)),
            root,
        })
    }
}
