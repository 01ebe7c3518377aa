//! Client configuration.
//!
//! Every field has a default, so a `ClientConfig` can be deserialized from a
//! partial document (or built with `ClientConfig::default()`) and only the
//! overridden values change.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_USERS_BASE_URL: &str = "https://users.roblox.com";
pub const DEFAULT_GROUPS_BASE_URL: &str = "https://groups.roblox.com";
pub const DEFAULT_GAMES_BASE_URL: &str = "https://games.roblox.com";
pub const DEFAULT_APIS_BASE_URL: &str = "https://apis.roblox.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Base URLs, timeout and user agent shared by the transport and services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub users_base_url: String,
    pub groups_base_url: String,
    pub games_base_url: String,
    pub apis_base_url: String,
    /// Overall deadline for one request, connect through body read.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            users_base_url: DEFAULT_USERS_BASE_URL.to_string(),
            groups_base_url: DEFAULT_GROUPS_BASE_URL.to_string(),
            games_base_url: DEFAULT_GAMES_BASE_URL.to_string(),
            apis_base_url: DEFAULT_APIS_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("roblox-core/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Route every namespace to a single host, e.g. a local stub server.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            users_base_url: base_url.to_string(),
            groups_base_url: base_url.to_string(),
            games_base_url: base_url.to_string(),
            apis_base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Strip trailing slashes so paths can be appended with a leading `/`.
pub(crate) fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
