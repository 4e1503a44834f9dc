use crate::ports::{pick, RandomSource, ResolverConfigSource};
use dnsverify_domain::config::RootMode;
use dnsverify_domain::{DomainError, NameServerAddress};
use std::sync::Arc;
use tracing::info;

pub const ROOT_SERVERS: [&str; 13] = [
    "a.root-servers.net",
    "b.root-servers.net",
    "c.root-servers.net",
    "d.root-servers.net",
    "e.root-servers.net",
    "f.root-servers.net",
    "g.root-servers.net",
    "h.root-servers.net",
    "i.root-servers.net",
    "j.root-servers.net",
    "k.root-servers.net",
    "l.root-servers.net",
    "m.root-servers.net",
];

/// Candidate starting nameservers, fixed after startup.
pub struct RootDirectory {
    system_servers: Arc<[NameServerAddress]>,
    root_hints: Arc<[NameServerAddress]>,
    walk_root: RootMode,
    rng: Arc<dyn RandomSource>,
}

impl RootDirectory {
    pub fn new(
        system_servers: Vec<NameServerAddress>,
        walk_root: RootMode,
        rng: Arc<dyn RandomSource>,
    ) -> Result<Self, DomainError> {
        if system_servers.is_empty() {
            return Err(DomainError::ConfigError(
                "resolver configuration lists no nameservers".to_string(),
            ));
        }

        let root_hints: Vec<NameServerAddress> =
            ROOT_SERVERS.iter().map(|s| NameServerAddress::new(*s)).collect();

        Ok(Self {
            system_servers: system_servers.into(),
            root_hints: root_hints.into(),
            walk_root,
            rng,
        })
    }

    /// Reads the system resolver list once and builds the directory from it.
    pub fn initialize(
        source: &dyn ResolverConfigSource,
        walk_root: RootMode,
        rng: Arc<dyn RandomSource>,
    ) -> Result<Self, DomainError> {
        let servers = source.nameservers()?;
        info!(
            nameservers = servers.len(),
            walk_root = ?walk_root,
            "Root directory initialized"
        );
        Self::new(servers, walk_root, rng)
    }

    pub fn servers(&self) -> &[NameServerAddress] {
        &self.system_servers
    }

    pub fn walk_root(&self) -> RootMode {
        self.walk_root
    }

    /// A system resolver, uniformly at random when several are configured.
    pub fn pick_starting_server(&self) -> NameServerAddress {
        self.pick_from(&self.system_servers)
    }

    /// Nameserver for the root suffix of a delegation walk.
    pub fn pick_walk_root(&self) -> NameServerAddress {
        match self.walk_root {
            RootMode::RootHints => self.pick_from(&self.root_hints),
            RootMode::System => self.pick_from(&self.system_servers),
        }
    }

    fn pick_from(&self, candidates: &[NameServerAddress]) -> NameServerAddress {
        // both lists are non-empty by construction
        pick(self.rng.as_ref(), candidates)
            .cloned()
            .unwrap_or_else(|| NameServerAddress::new(ROOT_SERVERS[0]))
    }
}
