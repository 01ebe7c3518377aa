//! Users namespace: lookup by id and by username.

use std::sync::Arc;

use crate::client::parse_json;
use crate::config::normalize_base_url;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{DataEnvelope, User, UsernameMatch, UsernameSearch};

/// Client for `users.roblox.com`.
#[derive(Debug, Clone)]
pub struct Users {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl Users {
    pub fn new(transport: Arc<dyn Transport>, base_url: &str) -> Self {
        Self {
            transport,
            base_url: normalize_base_url(base_url),
        }
    }

    /// Fetch a user by id.
    pub fn get(&self, id: i64) -> Result<User, ApiError> {
        let response = self.transport.execute(&self.build_get(id))?;
        self.parse_get(response)
    }

    /// Resolve usernames to user ids. Unknown names are simply absent from
    /// the result.
    pub fn search<S: AsRef<str>>(&self, usernames: &[S]) -> Result<Vec<UsernameMatch>, ApiError> {
        let request = self.build_search(usernames)?;
        let response = self.transport.execute(&request)?;
        self.parse_search(response)
    }

    pub fn build_get(&self, id: i64) -> HttpRequest {
        HttpRequest::get(format!("{}/v1/users/{id}", self.base_url))
    }

    pub fn build_search<S: AsRef<str>>(&self, usernames: &[S]) -> Result<HttpRequest, ApiError> {
        let input = UsernameSearch {
            usernames: usernames.iter().map(|u| u.as_ref().to_string()).collect(),
        };
        let body =
            serde_json::to_string(&input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest::post_json(
            format!("{}/v1/usernames/users", self.base_url),
            body,
        ))
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<User, ApiError> {
        parse_json(&response)
    }

    pub fn parse_search(&self, response: HttpResponse) -> Result<Vec<UsernameMatch>, ApiError> {
        let envelope: DataEnvelope<UsernameMatch> = parse_json(&response)?;
        Ok(envelope.data)
    }
}
