pub mod resolver;
pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use dnsverify_domain::config::TransportProtocol;
use dnsverify_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }
}

pub fn create_transport(protocol: TransportProtocol, addr: SocketAddr) -> Transport {
    match protocol {
        TransportProtocol::Udp => Transport::Udp(udp::UdpTransport::new(addr)),
        TransportProtocol::Tcp => Transport::Tcp(tcp::TcpTransport::new(addr)),
    }
}

pub(crate) fn transport_error(server: SocketAddr, reason: impl Into<String>) -> DomainError {
    DomainError::Transport {
        server: server.to_string(),
        reason: reason.into(),
    }
}
