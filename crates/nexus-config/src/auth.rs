//! Login flow settings.

use serde::{Deserialize, Serialize};

use crate::ApiConfig;

const fn default_callback_timeout_secs() -> u64 {
    120
}

const fn default_open_browser() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Provider login endpoint. Empty means `{api.base_url}/auth/login`.
    #[serde(default)]
    pub login_url: String,

    /// How long the loopback callback server waits for the redirect.
    #[serde(default = "default_callback_timeout_secs")]
    pub callback_timeout_secs: u64,

    /// Open the system browser on login. When false the URL is only printed.
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,

    /// Loopback port for the callback server; `0` picks a free port.
    #[serde(default)]
    pub callback_port: u16,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_url: String::new(),
            callback_timeout_secs: default_callback_timeout_secs(),
            open_browser: default_open_browser(),
            callback_port: 0,
        }
    }
}

impl AuthConfig {
    /// Effective login URL, derived from the API base URL when unset.
    #[must_use]
    pub fn login_url(&self, api: &ApiConfig) -> String {
        if self.login_url.trim().is_empty() {
            format!("{}/auth/login", api.base_url())
        } else {
            self.login_url.clone()
        }
    }

    #[must_use]
    pub fn is_customized(&self) -> bool {
        *self != Self::default()
    }
}
