use dnsverify_domain::ResolutionResult;
use serde::{Deserialize, Serialize};

/// Wire shape of one hostname's resolution, field names kept from the
/// original service's JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(rename = "A")]
    pub a: Vec<String>,

    /// Empty when the name has no CNAME.
    #[serde(rename = "CNAME")]
    pub cname: String,

    #[serde(rename = "LastNS")]
    pub last_ns: String,
}

impl From<&ResolutionResult> for LookupResponse {
    fn from(result: &ResolutionResult) -> Self {
        Self {
            a: result.addresses.iter().map(|ip| ip.to_string()).collect(),
            cname: result
                .cname
                .as_ref()
                .map(|c| c.to_string())
                .unwrap_or_default(),
            last_ns: result.last_nameserver.host().to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LookupParams {
    pub nocache: Option<String>,
}

impl LookupParams {
    /// Any non-empty value turns caching off.
    pub fn nocache(&self) -> bool {
        self.nocache.as_deref().is_some_and(|v| !v.is_empty())
    }
}
