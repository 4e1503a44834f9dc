pub mod lookup_hostname;
pub mod verify_target;

pub use lookup_hostname::LookupHostnameUseCase;
pub use verify_target::VerifyTargetUseCase;
