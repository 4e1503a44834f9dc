use serde::{Deserialize, Serialize};

use super::auth::AuthConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::server::ServerConfig;
use super::verification::VerificationConfig;

const LOCAL_CONFIG_PATH: &str = "dnsverify.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsverify/config.toml";

/// Main configuration structure for dnsverify
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Basic-Auth credentials
    #[serde(default)]
    pub auth: AuthConfig,

    /// Resolver bootstrap and transports
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Alias verification policy
    #[serde(default)]
    pub verification: VerificationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsverify.toml in current directory
    /// 3. /etc/dnsverify/config.toml
    /// 4. Default configuration
    ///
    /// Overrides are applied on top of whichever source was used.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line and environment overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(user) = overrides.auth_user {
            self.auth.user = user;
        }
        if let Some(password) = overrides.auth_password {
            self.auth.password = password;
        }
        if let Some(path) = overrides.resolv_conf {
            self.resolver.resolv_conf = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("HTTP port cannot be 0".to_string()));
        }

        if self.auth.user.is_empty() {
            return Err(ConfigError::Validation(
                "Basic-Auth user cannot be empty".to_string(),
            ));
        }

        if self.resolver.query_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "query_timeout_secs must be at least 1".to_string(),
            ));
        }

        if self.resolver.resolv_conf.is_empty() {
            return Err(ConfigError::Validation(
                "resolv_conf path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line (and environment) overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub auth_user: Option<String>,
    pub auth_password: Option<String>,
    pub resolv_conf: Option<String>,
    pub log_level: Option<String>,
}
