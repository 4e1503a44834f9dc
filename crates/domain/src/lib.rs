//! dnsverify domain layer
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod nameserver;
pub mod resolution;
pub mod verification;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{DnsRecord, DnsResponse, RecordType};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use nameserver::{NameServerAddress, DNS_PORT};
pub use resolution::{AddressList, ResolutionResult};
pub use verification::{
    MatchKind, VerificationOutcome, VerificationPolicy, VerificationRequest, VerificationStatus,
};
