use crate::{DomainName, NameServerAddress};
use std::net::Ipv4Addr;

/// IPv4 addresses in first-seen order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressList(Vec<Ipv4Addr>);

impl AddressList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `address` unless it is already present. Returns whether it was added.
    pub fn push_unique(&mut self, address: Ipv4Addr) -> bool {
        if self.0.contains(&address) {
            return false;
        }
        self.0.push(address);
        true
    }

    pub fn extend_unique<I: IntoIterator<Item = Ipv4Addr>>(&mut self, addresses: I) {
        for address in addresses {
            self.push_unique(address);
        }
    }

    pub fn contains(&self, address: &Ipv4Addr) -> bool {
        self.0.contains(address)
    }

    /// First address of `self` that also appears in `other`.
    pub fn first_shared(&self, other: &AddressList) -> Option<Ipv4Addr> {
        self.0.iter().copied().find(|a| other.contains(a))
    }

    pub fn intersects(&self, other: &AddressList) -> bool {
        self.first_shared(other).is_some()
    }

    pub fn as_slice(&self) -> &[Ipv4Addr] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ipv4Addr> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Ipv4Addr> for AddressList {
    fn from_iter<I: IntoIterator<Item = Ipv4Addr>>(iter: I) -> Self {
        let mut list = AddressList::new();
        list.extend_unique(iter);
        list
    }
}

impl<'a> IntoIterator for &'a AddressList {
    type Item = &'a Ipv4Addr;
    type IntoIter = std::slice::Iter<'a, Ipv4Addr>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Merged answer for one name from one nameserver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    pub addresses: AddressList,

    /// First CNAME target seen for the name, if any.
    pub cname: Option<DomainName>,

    pub last_nameserver: NameServerAddress,
}

impl ResolutionResult {
    pub fn new(
        addresses: AddressList,
        cname: Option<DomainName>,
        last_nameserver: NameServerAddress,
    ) -> Self {
        Self {
            addresses,
            cname,
            last_nameserver,
        }
    }

    pub fn cname_is(&self, name: &DomainName) -> bool {
        self.cname.as_ref() == Some(name)
    }

    pub fn has_records(&self) -> bool {
        !self.addresses.is_empty() || self.cname.is_some()
    }
}
