//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing), one datagram each way.

use super::{transport_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use dnsverify_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr()).await.map_err(|e| {
            transport_error(self.server_addr, format!("failed to bind UDP socket: {}", e))
        })?;

        let bytes_sent =
            tokio::time::timeout(timeout, socket.send_to(message_bytes, self.server_addr))
                .await
                .map_err(|_| transport_error(self.server_addr, "timeout sending UDP query"))?
                .map_err(|e| {
                    transport_error(self.server_addr, format!("failed to send UDP query: {}", e))
                })?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let bytes_received = tokio::time::timeout(timeout, async {
            loop {
                let (received, from_addr) = socket.recv_from(&mut recv_buf).await?;
                if from_addr == self.server_addr {
                    return Ok::<usize, std::io::Error>(received);
                }
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "Discarding UDP datagram from unexpected source"
                );
            }
        })
        .await
        .map_err(|_| transport_error(self.server_addr, "timeout waiting for UDP response"))?
        .map_err(|e| {
            transport_error(
                self.server_addr,
                format!("failed to receive UDP response: {}", e),
            )
        })?;

        recv_buf.truncate(bytes_received);

        debug!(server = %self.server_addr, bytes_received, "UDP response received");

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "UDP",
        })
    }
}
