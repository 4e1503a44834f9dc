use super::LookupResponse;
use dnsverify_domain::VerificationOutcome;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub status: String,
    pub code: u8,
    pub message: String,
    pub data: BTreeMap<String, LookupResponse>,
}

impl From<&VerificationOutcome> for VerifyResponse {
    fn from(outcome: &VerificationOutcome) -> Self {
        Self {
            status: outcome.status.as_str().to_string(),
            code: outcome.code(),
            message: outcome.message().to_string(),
            data: outcome
                .per_host
                .iter()
                .map(|(host, result)| (host.to_string(), LookupResponse::from(result)))
                .collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct VerifyParams {
    pub nocache: Option<String>,
    pub target_alias: Option<String>,
}

impl VerifyParams {
    pub fn nocache(&self) -> bool {
        self.nocache.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// The alias, if one was given with a non-empty value.
    pub fn target_alias(&self) -> Option<&str> {
        self.target_alias.as_deref().filter(|v| !v.is_empty())
    }
}
