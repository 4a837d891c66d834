// security/src/lib.rs

//! Session gate for the demo app: a single authenticated flag flipped by
//! comparing submitted credentials with the configured demo pair.

use log::{info, warn};

use thalcare_lib::config::AuthConfig;
use thalcare_models::Login;

#[derive(Debug, Clone)]
pub struct AuthGate {
    credentials: AuthConfig,
    authenticated: bool,
}

impl AuthGate {
    pub fn new(credentials: AuthConfig) -> Self {
        AuthGate {
            credentials,
            authenticated: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Returns whether the pair matched. A mismatch leaves the current
    /// session state as it was.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if username == self.credentials.username && password == self.credentials.password {
            self.authenticated = true;
            info!("User {} logged in", username);
            true
        } else {
            warn!("Rejected login attempt for user {}", username);
            false
        }
    }

    pub fn login_with(&mut self, login: &Login) -> bool {
        self.login(&login.username, &login.password)
    }

    pub fn logout(&mut self) {
        if self.authenticated {
            info!("User {} logged out", self.credentials.username);
        }
        self.authenticated = false;
    }
}

impl Default for AuthGate {
    fn default() -> Self {
        AuthGate::new(AuthConfig::default())
    }
}
