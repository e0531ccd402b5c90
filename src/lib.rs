pub mod client;
pub mod compatibility;
pub mod config;
pub mod logging;
pub mod models;
pub mod outfit;
pub mod session;
pub mod stats;

pub use client::ApiClient;
pub use session::{Role, SessionStore};

use config::Config;
use std::sync::Arc;

/// Everything a view needs to talk to the backend: the gateway client and
/// the session. Passed explicitly to components instead of living as
/// ambient global state.
pub struct AppContext {
    pub config: Config,
    pub api: ApiClient,
    pub session: Arc<SessionStore>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let api = ApiClient::new(&config.api);
        Self {
            config,
            api,
            session: Arc::new(SessionStore::new()),
        }
    }

    /// Start the email login flow. `true` when the backend accepted the
    /// address and mailed a verification code.
    pub async fn request_login(&self, email: &str) -> bool {
        self.api.employee_login(email).await.is_some()
    }

    /// Finish the login flow: exchange the emailed code for a token and
    /// populate the session. `false` leaves the session untouched.
    pub async fn verify_login(&self, code: &str) -> bool {
        match self.api.employee_verify(code).await {
            Some(response) => {
                self.session.login(response.access_token);
                true
            }
            None => false,
        }
    }

    pub fn logout(&self) {
        self.session.logout();
    }
}
