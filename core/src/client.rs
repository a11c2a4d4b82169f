//! Request builder, response parser and adapter for the notices feed.
//!
//! # Design
//! `NoticesClient` holds only the feed endpoint and carries no mutable state
//! between calls. Fetching a page is split into `build_fetch_notices`, which
//! produces an `HttpRequest`, and `parse_fetch_notices`, which consumes an
//! `HttpResponse`. `NoticesApi` pairs the client with an injected `Transport`
//! and performs exactly one round-trip per `fetch`.

use tracing::{debug, instrument, warn};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::page::PAGE_PARAM;
use crate::types::ApiResponse;

/// Public endpoint of the notices feed.
pub const DEFAULT_ENDPOINT: &str = "https://www.thegazette.co.uk/all-notices/notice/data.json";

/// Stateless builder/parser for feed requests.
#[derive(Debug, Clone)]
pub struct NoticesClient {
    endpoint: String,
}

impl NoticesClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_fetch_notices(&self, page: u32) -> HttpRequest {
        HttpRequest {
            url: self.endpoint.clone(),
            query: vec![(PAGE_PARAM.to_string(), page.to_string())],
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn parse_fetch_notices(&self, response: HttpResponse) -> Result<ApiResponse, ApiError> {
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }
        let value: serde_json::Value =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        ApiResponse::from_value(value)
    }
}

impl Default for NoticesClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// The feed adapter: one client, one injected transport.
#[derive(Debug, Clone)]
pub struct NoticesApi<T> {
    client: NoticesClient,
    transport: T,
}

impl<T: Transport> NoticesApi<T> {
    pub fn new(client: NoticesClient, transport: T) -> Self {
        Self { client, transport }
    }

    #[instrument(skip(self), fields(endpoint = %self.client.endpoint))]
    pub fn fetch(&self, page: u32) -> Result<ApiResponse, ApiError> {
        let request = self.client.build_fetch_notices(page);
        debug!("Fetching notices page {}", page);

        let response = self.transport.execute(&request).map_err(|e| {
            warn!("Notices transport failed: {}", e);
            e
        })?;
        debug!(
            "Notices feed answered {} ({} bytes)",
            response.status,
            response.body.len()
        );

        self.client.parse_fetch_notices(response)
    }
}
