use serde::{Deserialize, Serialize};

/// Where the delegation walk starts.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RootMode {
    /// One of the thirteen global root servers.
    #[default]
    RootHints,

    /// One of the nameservers listed in the system resolver configuration.
    System,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransportProtocol {
    Udp,
    Tcp,
}

impl TransportProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Udp => "UDP",
            Self::Tcp => "TCP",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,

    #[serde(default)]
    pub walk_root: RootMode,

    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    /// Transport for the ANY and A queries.
    #[serde(default = "default_lookup_protocol")]
    pub lookup_protocol: TransportProtocol,

    /// Transport for the NS queries of the delegation walk.
    #[serde(default = "default_walk_protocol")]
    pub walk_protocol: TransportProtocol,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            resolv_conf: default_resolv_conf(),
            walk_root: RootMode::default(),
            query_timeout_secs: default_query_timeout_secs(),
            lookup_protocol: default_lookup_protocol(),
            walk_protocol: default_walk_protocol(),
        }
    }
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}

fn default_query_timeout_secs() -> u64 {
    5
}

fn default_lookup_protocol() -> TransportProtocol {
    TransportProtocol::Tcp
}

fn default_walk_protocol() -> TransportProtocol {
    TransportProtocol::Udp
}
