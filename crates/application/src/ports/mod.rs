mod dns_exchange;
mod random_source;
mod resolver_config_source;

pub use dns_exchange::DnsExchange;
pub use random_source::{pick, RandomSource};
pub use resolver_config_source::ResolverConfigSource;
