//! Blocking ureq transport for the notices feed.

use std::time::Duration;

use notices_core::{body_text, ApiError, HttpRequest, HttpResponse, Transport};
use tracing::{debug, warn};
use ureq::tls::TlsConfig;
use ureq::Agent;

/// Executes feed requests with a shared ureq agent.
///
/// Status codes are returned as data (`http_status_as_error(false)`) so the
/// core client decides what a non-2xx means.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(verify_tls: bool, timeout: Duration) -> Self {
        if !verify_tls {
            warn!("TLS certificate verification is disabled for the notices feed");
        }

        let tls = TlsConfig::builder()
            .disable_verification(!verify_tls)
            .build();
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .tls_config(tls)
            .build()
            .new_agent();

        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.get(&req.url);
        for (key, value) in &req.query {
            builder = builder.query(key, value);
        }
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let mut response = builder
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

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
        let bytes = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = body_text(bytes)?;
        debug!("GET {} -> {}", req.url, status);

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
