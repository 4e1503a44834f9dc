use async_trait::async_trait;
use dnsverify_domain::{DnsResponse, DomainError, DomainName, NameServerAddress, RecordType};

/// One query/response round trip against a specific nameserver.
///
/// Implementations own message encoding, transport and timeouts. A response
/// carrying an error rcode is still a response; only transport or decoding
/// failures are errors.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn exchange(
        &self,
        server: &NameServerAddress,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError>;
}
