pub mod error;
pub mod lookup;
pub mod verify;

pub use error::ErrorResponse;
pub use lookup::{LookupParams, LookupResponse};
pub use verify::{VerifyParams, VerifyResponse};
