#![allow(dead_code)]
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use dnsverify_api::{create_api_routes, AppState, Credentials};
use dnsverify_application::ports::{DnsExchange, RandomSource};
use dnsverify_application::services::{DelegationWalker, RecordAggregator, RootDirectory};
use dnsverify_application::use_cases::{LookupHostnameUseCase, VerifyTargetUseCase};
use dnsverify_domain::config::RootMode;
use dnsverify_domain::{
    DnsRecord, DnsResponse, DomainError, DomainName, NameServerAddress, RecordType,
    VerificationPolicy,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const USER: &str = "user";
pub const PASSWORD: &str = "changeme";

pub fn name(s: &str) -> DomainName {
    DomainName::fqdn(s).unwrap()
}

pub fn a(owner: &str, ip: &str) -> DnsRecord {
    DnsRecord::A {
        owner: name(owner),
        address: ip.parse().unwrap(),
    }
}

pub fn cname(owner: &str, target: &str) -> DnsRecord {
    DnsRecord::Cname {
        owner: name(owner),
        target: name(target),
    }
}

/// Answers ANY and A queries from a fixed zone; everything else is empty.
#[derive(Default)]
pub struct ZoneExchange {
    records: Mutex<HashMap<String, Vec<DnsRecord>>>,
    failing: Mutex<Vec<String>>,
}

impl ZoneExchange {
    pub fn host(&self, host: &str, records: Vec<DnsRecord>) -> &Self {
        self.records
            .lock()
            .unwrap()
            .insert(name(host).to_string(), records);
        self
    }

    pub fn fail(&self, host: &str) -> &Self {
        self.failing.lock().unwrap().push(name(host).to_string());
        self
    }
}

#[async_trait]
impl DnsExchange for ZoneExchange {
    async fn exchange(
        &self,
        server: &NameServerAddress,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError> {
        if self.failing.lock().unwrap().contains(&name.to_string()) {
            return Err(DomainError::Transport {
                server: server.to_string(),
                reason: "connection refused".to_string(),
            });
        }
        if record_type == RecordType::NS {
            return Ok(DnsResponse::default());
        }
        let answers = self
            .records
            .lock()
            .unwrap()
            .get(name.as_str())
            .cloned()
            .unwrap_or_default();
        Ok(DnsResponse::new(answers, vec![]))
    }
}

struct FirstIndex;

impl RandomSource for FirstIndex {
    fn index(&self, _upper: usize) -> usize {
        0
    }
}

pub fn app_with_policy(zone: Arc<ZoneExchange>, policy: VerificationPolicy) -> Router {
    let rng: Arc<dyn RandomSource> = Arc::new(FirstIndex);
    let root = Arc::new(
        RootDirectory::new(
            vec![NameServerAddress::new("10.0.0.53")],
            RootMode::System,
            rng.clone(),
        )
        .unwrap(),
    );
    let walker = Arc::new(DelegationWalker::new(zone.clone(), root.clone(), rng));
    let aggregator = Arc::new(RecordAggregator::new(zone));
    let lookup = Arc::new(LookupHostnameUseCase::new(root, walker, aggregator));
    let verify = Arc::new(VerifyTargetUseCase::new(lookup.clone(), policy));

    create_api_routes(AppState {
        lookup,
        verify,
        credentials: Arc::new(Credentials::new(USER, PASSWORD)),
    })
}

pub fn app(zone: Arc<ZoneExchange>) -> Router {
    app_with_policy(zone, VerificationPolicy::default())
}

pub fn basic(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, basic(USER, PASSWORD))
        .body(Body::empty())
        .unwrap()
}

pub fn get_anonymous(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
