pub mod health;
pub mod lookup;
pub mod not_found;
pub mod verify;

pub use health::health_check;
pub use lookup::lookup_hostname;
pub use not_found::not_found;
pub use verify::verify_target;
