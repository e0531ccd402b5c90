//! Process-wide session store: populated at login, cleared at logout.
//!
//! The role decoded here drives UI visibility only. The server authorizes
//! every mutating call on its own; nothing in this module is a security
//! boundary.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// Privilege tiers as the backend encodes them in the JWT `role` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Coach = 1,
    Manager = 2,
}

impl Role {
    pub fn from_claim(value: i64) -> Option<Self> {
        match value {
            1 => Some(Role::Coach),
            2 => Some(Role::Manager),
            _ => None,
        }
    }

    /// Payment history is a manager-only view.
    pub fn can_view_payments(&self) -> bool {
        matches!(self, Role::Manager)
    }

    /// Coach management (assignments, employee edits) is manager-only.
    pub fn can_manage_coaches(&self) -> bool {
        matches!(self, Role::Manager)
    }
}

/// Shared bearer-token holder handed to every component that talks to the
/// API.
#[derive(Debug, Default)]
pub struct SessionStore {
    token: RwLock<Option<String>>,
    login_required: AtomicBool,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the token obtained from `employee_verify`.
    pub fn login(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
        self.login_required.store(false, Ordering::Relaxed);
    }

    pub fn logout(&self) {
        *self.token.write() = None;
    }

    /// The stored bearer token, or the empty sentinel when none is present.
    /// An absent token also raises the login-required flag so the shell can
    /// route to its login entry point while in-flight calls fail gracefully.
    pub fn token(&self) -> String {
        match self.token.read().as_ref() {
            Some(token) => token.clone(),
            None => {
                self.login_required.store(true, Ordering::Relaxed);
                String::new()
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.read().is_some()
    }

    /// Whether a caller hit the empty-token sentinel since the last login.
    pub fn login_required(&self) -> bool {
        self.login_required.load(Ordering::Relaxed)
    }

    /// Privilege tier from the token's JWT payload. The payload is decoded
    /// without signature verification; a garbled token simply yields no
    /// role, and the views fall back to the least-privileged rendering.
    pub fn role(&self) -> Option<Role> {
        let token = self.token.read().clone()?;
        match decode_role_claim(&token) {
            Some(value) => Role::from_claim(value),
            None => {
                warn!("Could not decode role claim from session token");
                None
            }
        }
    }
}

fn decode_role_claim(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let raw = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&raw).ok()?;
    let role = claims.get("role")?.as_i64()?;
    debug!(role, "Decoded role claim");
    Some(role)
}
