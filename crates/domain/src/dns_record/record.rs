use crate::DomainName;
use std::net::Ipv4Addr;

/// A resource record reduced to the kinds this service reasons about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsRecord {
    A {
        owner: DomainName,
        address: Ipv4Addr,
    },
    Cname {
        owner: DomainName,
        target: DomainName,
    },
    Ns {
        owner: DomainName,
        nameserver: DomainName,
    },
    Soa {
        owner: DomainName,
        primary_ns: DomainName,
    },
}

impl DnsRecord {
    pub fn owner(&self) -> &DomainName {
        match self {
            DnsRecord::A { owner, .. }
            | DnsRecord::Cname { owner, .. }
            | DnsRecord::Ns { owner, .. }
            | DnsRecord::Soa { owner, .. } => owner,
        }
    }

    pub fn is_owned_by(&self, name: &DomainName) -> bool {
        self.owner() == name
    }
}
