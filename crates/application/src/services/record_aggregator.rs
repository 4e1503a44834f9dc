use crate::ports::DnsExchange;
use dnsverify_domain::{
    AddressList, DnsRecord, DnsResponse, DomainError, DomainName, NameServerAddress, RecordType,
    ResolutionResult,
};
use std::sync::Arc;
use tracing::debug;

/// Merges an ANY and an A query for the same name into one result.
///
/// Many authoritative servers refuse or truncate ANY, so the A query fills in
/// whatever the first answer left out.
pub struct RecordAggregator {
    exchange: Arc<dyn DnsExchange>,
}

impl RecordAggregator {
    pub fn new(exchange: Arc<dyn DnsExchange>) -> Self {
        Self { exchange }
    }

    pub async fn aggregate(
        &self,
        nameserver: &NameServerAddress,
        fqdn: &DomainName,
    ) -> Result<ResolutionResult, DomainError> {
        let any = self.query(nameserver, fqdn, RecordType::ANY).await?;
        let (mut addresses, mut cname) = extract_answer(&any, fqdn);

        let a = self.query(nameserver, fqdn, RecordType::A).await?;
        let (more_addresses, a_cname) = extract_answer(&a, fqdn);

        addresses.extend_unique(more_addresses.iter().copied());
        if cname.is_none() {
            cname = a_cname;
        }

        debug!(
            fqdn = %fqdn,
            nameserver = %nameserver,
            addresses = addresses.len(),
            cname = ?cname.as_ref().map(DomainName::as_str),
            "Records aggregated"
        );

        Ok(ResolutionResult::new(addresses, cname, nameserver.clone()))
    }

    async fn query(
        &self,
        nameserver: &NameServerAddress,
        fqdn: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError> {
        self.exchange
            .exchange(nameserver, fqdn, record_type)
            .await
            .map_err(|e| DomainError::Query {
                query_type: record_type,
                fqdn: fqdn.to_string(),
                reason: e.to_string(),
            })
    }
}

/// A addresses and the first CNAME target owned by `fqdn` in the answer section.
pub fn extract_answer(response: &DnsResponse, fqdn: &DomainName) -> (AddressList, Option<DomainName>) {
    let mut addresses = AddressList::new();
    let mut cname = None;

    for record in response.answers.iter().filter(|r| r.is_owned_by(fqdn)) {
        match record {
            DnsRecord::A { address, .. } => {
                addresses.push_unique(*address);
            }
            DnsRecord::Cname { target, .. } if cname.is_none() => {
                cname = Some(target.clone());
            }
            _ => {}
        }
    }

    (addresses, cname)
}
