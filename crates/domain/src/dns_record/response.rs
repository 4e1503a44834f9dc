use super::DnsRecord;
use crate::DomainName;

/// The parts of a DNS response the walker and aggregator consume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsResponse {
    pub answers: Vec<DnsRecord>,

    pub authority: Vec<DnsRecord>,
}

impl DnsResponse {
    pub fn new(answers: Vec<DnsRecord>, authority: Vec<DnsRecord>) -> Self {
        Self { answers, authority }
    }

    /// NS targets from the authority section followed by the answer section.
    pub fn nameservers(&self) -> Vec<&DomainName> {
        self.authority
            .iter()
            .chain(self.answers.iter())
            .filter_map(|record| match record {
                DnsRecord::Ns { nameserver, .. } => Some(nameserver),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.authority.is_empty()
    }
}
