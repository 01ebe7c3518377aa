//! Top-level client and the response handling shared by every service.
//!
//! # Design
//! `RobloxClient` owns nothing but the three services, which all hold the
//! same `Arc<dyn Transport>`. Build one client and clone it freely; clones
//! share the transport and its connection pool. [`RobloxClient::shared`] is
//! the process-wide instance for callers that don't want to thread a client
//! through their code.

use std::sync::{Arc, OnceLock};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::games::Games;
use crate::groups::Groups;
use crate::http::HttpResponse;
use crate::transport::{Transport, UreqTransport};
use crate::users::Users;

/// Entry point bundling the users, groups and games services.
#[derive(Debug, Clone)]
pub struct RobloxClient {
    pub users: Users,
    pub groups: Groups,
    pub games: Games,
}

impl RobloxClient {
    /// Client for the public Roblox hosts with a 10 second timeout.
    pub fn new() -> Self {
        Self::with_config(&ClientConfig::default())
    }

    pub fn with_config(config: &ClientConfig) -> Self {
        Self::with_transport(Arc::new(UreqTransport::new(config)), config)
    }

    /// Build the services around a caller-supplied transport. Only the base
    /// URLs of `config` are used.
    pub fn with_transport(transport: Arc<dyn Transport>, config: &ClientConfig) -> Self {
        Self {
            users: Users::new(Arc::clone(&transport), &config.users_base_url),
            groups: Groups::new(Arc::clone(&transport), &config.groups_base_url),
            games: Games::new(transport, &config.games_base_url, &config.apis_base_url),
        }
    }

    /// Process-wide client with the default configuration, built on first use.
    pub fn shared() -> &'static RobloxClient {
        static SHARED: OnceLock<RobloxClient> = OnceLock::new();
        SHARED.get_or_init(RobloxClient::new)
    }
}

impl Default for RobloxClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject any status other than `expected`.
pub(crate) fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    debug!(status = response.status, expected, "unexpected response status");
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Require a 200 and decode the body.
pub(crate) fn parse_json<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    check_status(response, 200)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
