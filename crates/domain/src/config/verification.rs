use crate::{VerificationPolicy, VerificationStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchStatus {
    #[default]
    NoMatch,
    Error,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    #[serde(default)]
    pub enable_chain_detection: bool,

    #[serde(default = "default_true")]
    pub alias_overrides_secondary: bool,

    #[serde(default)]
    pub no_match_status: NoMatchStatus,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            enable_chain_detection: false,
            alias_overrides_secondary: true,
            no_match_status: NoMatchStatus::default(),
        }
    }
}

impl VerificationConfig {
    pub fn policy(&self) -> VerificationPolicy {
        VerificationPolicy {
            enable_chain_detection: self.enable_chain_detection,
            alias_overrides_secondary: self.alias_overrides_secondary,
            no_match_status: match self.no_match_status {
                NoMatchStatus::NoMatch => VerificationStatus::NoMatch,
                NoMatchStatus::Error => VerificationStatus::Error,
            },
        }
    }
}

fn default_true() -> bool {
    true
}
