use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hostname: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            hostname: None,
        }
    }

    pub fn for_hostname(error: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            hostname: Some(hostname.into()),
        }
    }
}
