use dnsverify_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

/// Resolves a nameserver hostname through the OS to all its socket addresses.
pub async fn resolve_all(
    hostname: &str,
    port: u16,
    timeout: Duration,
) -> Result<Vec<SocketAddr>, DomainError> {
    let target = format!("{}:{}", hostname, port);

    let addrs_iter = tokio::time::timeout(timeout, tokio::net::lookup_host((hostname, port)))
        .await
        .map_err(|_| DomainError::Transport {
            server: target.clone(),
            reason: "timeout resolving nameserver address".to_string(),
        })?
        .map_err(|e| DomainError::Transport {
            server: target.clone(),
            reason: format!("nameserver address lookup failed: {}", e),
        })?;

    let addrs: Vec<SocketAddr> = addrs_iter.collect();

    if addrs.is_empty() {
        return Err(DomainError::Transport {
            server: target,
            reason: "no addresses found for nameserver".to_string(),
        });
    }

    Ok(addrs)
}

/// First IPv4 address, else the first address of any family.
pub fn prefer_ipv4(addrs: &[SocketAddr]) -> Option<SocketAddr> {
    addrs
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
}
