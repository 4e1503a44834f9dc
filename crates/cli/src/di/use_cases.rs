use super::DnsServices;
use dnsverify_application::use_cases::{LookupHostnameUseCase, VerifyTargetUseCase};
use dnsverify_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub lookup: Arc<LookupHostnameUseCase>,
    pub verify: Arc<VerifyTargetUseCase>,
}

impl UseCases {
    pub fn new(dns: &DnsServices, config: &Config) -> Self {
        let lookup = Arc::new(LookupHostnameUseCase::new(
            dns.root.clone(),
            dns.walker.clone(),
            dns.aggregator.clone(),
        ));
        let verify = Arc::new(VerifyTargetUseCase::new(
            lookup.clone(),
            config.verification.policy(),
        ));

        Self { lookup, verify }
    }
}
