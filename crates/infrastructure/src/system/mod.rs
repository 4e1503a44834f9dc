pub mod random;
pub mod resolv_conf;

pub use random::FastrandSource;
pub use resolv_conf::ResolvConfReader;
