//! dnsverify application layer: ports, resolution services and use cases
pub mod ports;
pub mod services;
pub mod use_cases;
