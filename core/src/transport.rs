//! Blocking HTTP transport shared by every service.
//!
//! # Design
//! Services only see the `Transport` trait: hand it an `HttpRequest`, get an
//! `HttpResponse` back with the body fully read. Non-2xx statuses come back
//! as data so the services own status interpretation. `UreqTransport` is the
//! production implementation; its `ureq::Agent` pools connections and can be
//! used from several threads at once, so one instance serves the whole
//! process.

use std::fmt;

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
pub trait Transport: Send + Sync + fmt::Debug {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `Transport` backed by a single timeout-bounded `ureq::Agent`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    user_agent: String,
    timeout_secs: u64,
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            user_agent: config.user_agent.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport")
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    user_agent: &str,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    builder = builder.header("user-agent", user_agent);
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.path, "sending request");

        let result = match request.method {
            HttpMethod::Get => {
                with_headers(self.agent.get(&request.path), &self.user_agent, &request.headers).call()
            }
            HttpMethod::Post => {
                let builder =
                    with_headers(self.agent.post(&request.path), &self.user_agent, &request.headers);
                match &request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| {
            warn!(url = %request.path, error = %e, "request failed");
            ApiError::TransportError(e.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string().map_err(|e| {
            warn!(url = %request.path, error = %e, "reading response body failed");
            ApiError::TransportError(e.to_string())
        })?;

        debug!(url = %request.path, status, bytes = body.len(), "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// In-process `Transport` that replays canned responses and records requests.
#[cfg(test)]
pub(crate) mod stub {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Default)]
    pub(crate) struct StubTransport {
        responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl StubTransport {
        pub(crate) fn replying(status: u16, body: &str) -> Self {
            let stub = Self::default();
            stub.push(Ok(HttpResponse::new(status, body)));
            stub
        }

        pub(crate) fn push(&self, response: Result<HttpResponse, ApiError>) {
            self.responses.lock().unwrap().push_back(response);
        }

        pub(crate) fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for StubTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::TransportError("no canned response".to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_agent_internals() {
        let transport = UreqTransport::new(&ClientConfig::default());
        let rendered = format!("{transport:?}");
        assert!(rendered.contains("timeout_secs: 10"));
        assert!(rendered.contains("roblox-core/"));
    }

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let config = ClientConfig {
            timeout_secs: 2,
            ..ClientConfig::default()
        };
        let transport = UreqTransport::new(&config);
        // Port 9 on loopback: nothing listens there, connect is refused.
        let req = HttpRequest::get("http://127.0.0.1:9/v1/users/1".to_string());
        let err = transport.execute(&req).unwrap_err();
        assert!(matches!(err, ApiError::TransportError(_)));
    }
}
