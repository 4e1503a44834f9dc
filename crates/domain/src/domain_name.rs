use crate::DomainError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A fully-qualified, dot-terminated domain name.
///
/// Names are stored exactly as given apart from the trailing dot, so two
/// names compare equal only when their text matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainName(Arc<str>);

impl DomainName {
    /// Normalize `name` to an FQDN, validating its labels.
    pub fn fqdn(name: &str) -> Result<Self, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName("empty name".to_string()));
        }
        if trimmed == "." {
            return Ok(Self::root());
        }

        let body = trimmed.strip_suffix('.').unwrap_or(trimmed);
        if body.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "{} exceeds {} characters",
                trimmed, MAX_NAME_LEN
            )));
        }

        for label in body.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "{} contains an empty label",
                    trimmed
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label {} in {} exceeds {} characters",
                    label, trimmed, MAX_LABEL_LEN
                )));
            }
            if label
                .chars()
                .any(|c| c.is_whitespace() || c.is_control() || c == '/')
            {
                return Err(DomainError::InvalidDomainName(format!(
                    "{} contains an invalid character",
                    trimmed
                )));
            }
        }

        Ok(Self(format!("{}.", body).into()))
    }

    /// Wraps a name read off the wire, only adding the trailing dot if absent.
    pub fn from_wire(name: &str) -> Self {
        if name.ends_with('.') {
            Self(name.into())
        } else {
            Self(format!("{}.", name).into())
        }
    }

    pub fn root() -> Self {
        Self(".".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        &*self.0 == "."
    }

    /// Labels, most specific first. The root name has none.
    pub fn labels(&self) -> Vec<&str> {
        if self.is_root() {
            return Vec::new();
        }
        self.0[..self.0.len() - 1].split('.').collect()
    }

    pub fn label_count(&self) -> usize {
        self.labels().len()
    }

    /// The name one label shorter, or `None` for the root.
    pub fn parent(&self) -> Option<DomainName> {
        if self.is_root() {
            return None;
        }
        match self.0.split_once('.') {
            Some((_, rest)) if !rest.is_empty() => Some(Self(rest.into())),
            _ => Some(Self::root()),
        }
    }

    /// Every suffix of this name, shortest first: `.`, `com.`,
    /// `example.com.`, ..., ending with the name itself.
    pub fn suffixes(&self) -> Vec<DomainName> {
        let mut chain = Vec::with_capacity(self.label_count() + 1);
        let mut current = Some(self.clone());
        while let Some(name) = current {
            current = name.parent();
            chain.push(name);
        }
        chain.reverse();
        chain
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::fqdn(s)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
