pub mod dns;

pub use dns::{LookupHostnameUseCase, VerifyTargetUseCase};
