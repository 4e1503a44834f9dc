use dnsverify_application::use_cases::{LookupHostnameUseCase, VerifyTargetUseCase};
use std::sync::Arc;
use subtle::ConstantTimeEq;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupHostnameUseCase>,
    pub verify: Arc<VerifyTargetUseCase>,
    pub credentials: Arc<Credentials>,
}

/// The single Basic-Auth user allowed to call the API.
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Compares both fields in constant time, without short-circuiting on the user.
    pub fn matches(&self, user: &str, password: &str) -> bool {
        let user_ok = self.user.as_bytes().ct_eq(user.as_bytes());
        let password_ok = self.password.as_bytes().ct_eq(password.as_bytes());
        (user_ok & password_ok).into()
    }
}
