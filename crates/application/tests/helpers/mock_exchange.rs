use async_trait::async_trait;
use dnsverify_application::ports::{DnsExchange, RandomSource, ResolverConfigSource};
use dnsverify_application::services::{DelegationWalker, RecordAggregator, RootDirectory};
use dnsverify_application::use_cases::LookupHostnameUseCase;
use dnsverify_domain::config::RootMode;
use dnsverify_domain::{
    DnsRecord, DnsResponse, DomainError, DomainName, NameServerAddress, RecordType,
};
use std::collections::{HashMap, VecDeque};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn name(s: &str) -> DomainName {
    DomainName::fqdn(s).unwrap()
}

pub fn ip(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}

pub fn a(owner: &str, address: &str) -> DnsRecord {
    DnsRecord::A {
        owner: name(owner),
        address: ip(address),
    }
}

pub fn cname(owner: &str, target: &str) -> DnsRecord {
    DnsRecord::Cname {
        owner: name(owner),
        target: name(target),
    }
}

pub fn ns(owner: &str, nameserver: &str) -> DnsRecord {
    DnsRecord::Ns {
        owner: name(owner),
        nameserver: name(nameserver),
    }
}

pub fn soa(owner: &str, primary: &str) -> DnsRecord {
    DnsRecord::Soa {
        owner: name(owner),
        primary_ns: name(primary),
    }
}

pub fn answers(records: Vec<DnsRecord>) -> DnsResponse {
    DnsResponse::new(records, vec![])
}

pub fn referral(records: Vec<DnsRecord>) -> DnsResponse {
    DnsResponse::new(vec![], records)
}

pub fn transport_error(server: &str) -> DomainError {
    DomainError::Transport {
        server: server.to_string(),
        reason: "connection refused".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeCall {
    pub server: String,
    pub name: String,
    pub record_type: RecordType,
}

type Scripted = Result<DnsResponse, DomainError>;

/// Scripted exchange. Unscripted queries get an empty, successful response.
#[derive(Default)]
pub struct MockDnsExchange {
    by_server: Mutex<HashMap<(String, String, RecordType), Scripted>>,
    by_name: Mutex<HashMap<(String, RecordType), Scripted>>,
    queued: Mutex<HashMap<(String, RecordType), VecDeque<DnsResponse>>>,
    calls: Mutex<Vec<ExchangeCall>>,
}

impl MockDnsExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, name: &str, record_type: RecordType, response: DnsResponse) -> &Self {
        self.by_name
            .lock()
            .unwrap()
            .insert((fqdn(name), record_type), Ok(response));
        self
    }

    pub fn respond_from(
        &self,
        server: &str,
        name: &str,
        record_type: RecordType,
        response: DnsResponse,
    ) -> &Self {
        self.by_server
            .lock()
            .unwrap()
            .insert((server.to_string(), fqdn(name), record_type), Ok(response));
        self
    }

    /// Responses handed out one per query, before any scripted response.
    pub fn respond_in_turn(
        &self,
        name: &str,
        record_type: RecordType,
        responses: Vec<DnsResponse>,
    ) -> &Self {
        self.queued
            .lock()
            .unwrap()
            .insert((fqdn(name), record_type), responses.into());
        self
    }

    pub fn fail(&self, name: &str, record_type: RecordType, error: DomainError) -> &Self {
        self.by_name
            .lock()
            .unwrap()
            .insert((fqdn(name), record_type), Err(error));
        self
    }

    /// Same records for both the ANY and the A query.
    pub fn host(&self, name: &str, records: Vec<DnsRecord>) -> &Self {
        self.respond(name, RecordType::ANY, answers(records.clone()));
        self.respond(name, RecordType::A, answers(records))
    }

    pub fn calls(&self) -> Vec<ExchangeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_of(&self, record_type: RecordType) -> Vec<ExchangeCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.record_type == record_type)
            .collect()
    }

    pub fn queried(&self, name: &str) -> bool {
        let wanted = fqdn(name);
        self.calls().iter().any(|c| c.name == wanted)
    }
}

fn fqdn(name: &str) -> String {
    DomainName::fqdn(name).unwrap().to_string()
}

#[async_trait]
impl DnsExchange for MockDnsExchange {
    async fn exchange(
        &self,
        server: &NameServerAddress,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError> {
        self.calls.lock().unwrap().push(ExchangeCall {
            server: server.host().to_string(),
            name: name.to_string(),
            record_type,
        });

        let server_key = (server.host().to_string(), name.to_string(), record_type);
        if let Some(scripted) = self.by_server.lock().unwrap().get(&server_key) {
            return scripted.clone();
        }

        let name_key = (name.to_string(), record_type);
        if let Some(next) = self
            .queued
            .lock()
            .unwrap()
            .get_mut(&name_key)
            .and_then(VecDeque::pop_front)
        {
            return Ok(next);
        }

        match self.by_name.lock().unwrap().get(&name_key) {
            Some(scripted) => scripted.clone(),
            None => Ok(DnsResponse::default()),
        }
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
pub struct SequenceRandom {
    values: Vec<usize>,
    calls: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn zero() -> Self {
        Self::new(vec![0])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RandomSource for SequenceRandom {
    fn index(&self, upper: usize) -> usize {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        self.values[n % self.values.len()] % upper
    }
}

pub struct StaticResolverConfig(pub Vec<&'static str>);

impl ResolverConfigSource for StaticResolverConfig {
    fn nameservers(&self) -> Result<Vec<NameServerAddress>, DomainError> {
        Ok(self.0.iter().map(|s| NameServerAddress::new(*s)).collect())
    }
}

pub const SYSTEM_RESOLVER: &str = "10.0.0.53";

pub struct Harness {
    pub exchange: Arc<MockDnsExchange>,
    pub rng: Arc<SequenceRandom>,
    pub root: Arc<RootDirectory>,
    pub walker: Arc<DelegationWalker>,
    pub aggregator: Arc<RecordAggregator>,
    pub lookup: Arc<LookupHostnameUseCase>,
}

impl Harness {
    pub fn new(walk_root: RootMode, rng: SequenceRandom) -> Self {
        let exchange = Arc::new(MockDnsExchange::new());
        let rng = Arc::new(rng);
        let root = Arc::new(
            RootDirectory::initialize(
                &StaticResolverConfig(vec![SYSTEM_RESOLVER]),
                walk_root,
                rng.clone(),
            )
            .unwrap(),
        );
        let walker = Arc::new(DelegationWalker::new(
            exchange.clone(),
            root.clone(),
            rng.clone(),
        ));
        let aggregator = Arc::new(RecordAggregator::new(exchange.clone()));
        let lookup = Arc::new(LookupHostnameUseCase::new(
            root.clone(),
            walker.clone(),
            aggregator.clone(),
        ));

        Self {
            exchange,
            rng,
            root,
            walker,
            aggregator,
            lookup,
        }
    }

    pub fn system() -> Self {
        Self::new(RootMode::System, SequenceRandom::zero())
    }
}
