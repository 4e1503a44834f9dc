pub mod auth;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;
pub mod verification;

pub use auth::AuthConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::{ResolverConfig, RootMode, TransportProtocol};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use verification::{NoMatchStatus, VerificationConfig};
