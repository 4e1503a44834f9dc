use serde::{Deserialize, Serialize};

/// HTTP Basic-Auth credentials every request must present.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            password: default_password(),
        }
    }
}

fn default_user() -> String {
    "user".to_string()
}

fn default_password() -> String {
    "changeme".to_string()
}
