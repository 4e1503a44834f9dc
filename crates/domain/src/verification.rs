use crate::{DomainName, ResolutionResult};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationStatus {
    Ok,
    Warning,
    NoMatch,
    Error,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::NoMatch => "no_match",
            Self::Error => "error",
        }
    }
}

/// How the primary hostname relates to the secondary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    DirectCname,
    CnameChain,
    SharedAddress,
    NoMatch,
}

impl MatchKind {
    pub fn code(&self) -> u8 {
        match self {
            Self::DirectCname => 1,
            Self::SharedAddress => 2,
            Self::CnameChain => 3,
            Self::NoMatch => 0,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::DirectCname => "direct CNAME match",
            Self::CnameChain => "indirect CNAME / CNAME chain",
            Self::SharedAddress => "ALIAS or Static IP match",
            Self::NoMatch => "no matches",
        }
    }
}

/// Knobs that differ between deployments of the verification procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationPolicy {
    /// Classify a secondary whose own CNAME points back at itself as a chain.
    pub enable_chain_detection: bool,

    /// Resolve the target alias, when one is given, instead of the secondary.
    pub alias_overrides_secondary: bool,

    /// Status reported when nothing matches.
    pub no_match_status: VerificationStatus,
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self {
            enable_chain_detection: false,
            alias_overrides_secondary: true,
            no_match_status: VerificationStatus::NoMatch,
        }
    }
}

impl VerificationPolicy {
    pub fn status_for(&self, kind: MatchKind) -> VerificationStatus {
        match kind {
            MatchKind::DirectCname => VerificationStatus::Ok,
            MatchKind::CnameChain | MatchKind::SharedAddress => VerificationStatus::Warning,
            MatchKind::NoMatch => self.no_match_status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    pub primary: DomainName,
    pub secondary: DomainName,
    pub target_alias: Option<DomainName>,
    pub nocache: bool,
}

impl VerificationRequest {
    pub fn new(primary: DomainName, secondary: DomainName) -> Self {
        Self {
            primary,
            secondary,
            target_alias: None,
            nocache: false,
        }
    }

    pub fn with_target_alias(mut self, alias: Option<DomainName>) -> Self {
        self.target_alias = alias;
        self
    }

    pub fn with_nocache(mut self, nocache: bool) -> Self {
        self.nocache = nocache;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub kind: MatchKind,

    pub status: VerificationStatus,

    /// Resolutions keyed by the hostname that was actually queried.
    pub per_host: HashMap<DomainName, ResolutionResult>,
}

impl VerificationOutcome {
    pub fn new(
        kind: MatchKind,
        status: VerificationStatus,
        per_host: HashMap<DomainName, ResolutionResult>,
    ) -> Self {
        Self {
            kind,
            status,
            per_host,
        }
    }

    pub fn code(&self) -> u8 {
        self.kind.code()
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}
