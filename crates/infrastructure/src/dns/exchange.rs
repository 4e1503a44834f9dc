use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::{create_transport, resolver};
use async_trait::async_trait;
use dnsverify_application::ports::DnsExchange;
use dnsverify_domain::config::TransportProtocol;
use dnsverify_domain::{DnsResponse, DomainError, DomainName, NameServerAddress, RecordType};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Sends one query to one nameserver over a fixed transport protocol.
pub struct HickoryDnsExchange {
    protocol: TransportProtocol,
    timeout: Duration,
}

impl HickoryDnsExchange {
    pub fn new(protocol: TransportProtocol, timeout: Duration) -> Self {
        Self { protocol, timeout }
    }

    async fn server_addr(&self, server: &NameServerAddress) -> Result<SocketAddr, DomainError> {
        if let Some(addr) = server.socket_addr() {
            return Ok(addr);
        }

        let addrs = resolver::resolve_all(server.host(), server.port(), self.timeout).await?;
        resolver::prefer_ipv4(&addrs).ok_or_else(|| DomainError::Transport {
            server: server.to_string(),
            reason: "no addresses found for nameserver".to_string(),
        })
    }
}

#[async_trait]
impl DnsExchange for HickoryDnsExchange {
    async fn exchange(
        &self,
        server: &NameServerAddress,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError> {
        let addr = self.server_addr(server).await?;
        let (query_id, query) = MessageBuilder::build_query(name, record_type)?;

        let transport = create_transport(self.protocol, addr);
        let raw = transport.send(&query, self.timeout).await?;

        let parsed = ResponseParser::parse(&raw.bytes, server)?;
        if parsed.id != query_id {
            return Err(DomainError::MalformedResponse {
                server: server.to_string(),
                reason: format!(
                    "response id {} does not match query id {}",
                    parsed.id, query_id
                ),
            });
        }

        debug!(
            server = %server,
            addr = %addr,
            name = %name,
            record_type = %record_type,
            protocol = raw.protocol_used,
            rcode = ResponseParser::rcode_to_status(parsed.rcode),
            "DNS exchange complete"
        );

        Ok(parsed.response)
    }
}
