//! The notices page: parse the page parameter, fetch, build the views.
//!
//! `NoticesPage::handle` never fails. Every `ApiError` becomes an
//! `PageOutput::Error`, and a failed fetch never yields a partial table.

use serde::Serialize;
use tracing::{error, info};

use crate::client::NoticesApi;
use crate::error::ApiError;
use crate::http::Transport;
use crate::page::PageRequest;
use crate::view::{build_pagination, build_table, PaginationView, TableView};

/// Route the page is served from, and the target of pagination links.
pub const DEFAULT_ROUTE: &str = "/gazette-notices/info";

/// `Cache-Control` value for every rendering of the page. The feed is live,
/// so each request must re-fetch it.
pub const CACHE_CONTROL: &str = "no-store, max-age=0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Transport,
    Decode,
    Generic,
}

impl From<&ApiError> for ErrorKind {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Transport(_) | ApiError::Status { .. } => ErrorKind::Transport,
            ApiError::Decode(_) => ErrorKind::Decode,
            ApiError::Generic(_) => ErrorKind::Generic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageOutput {
    Listing {
        table: TableView,
        pagination: PaginationView,
    },
    Error {
        kind: ErrorKind,
        message: String,
    },
}

impl PageOutput {
    /// Error block for a failed fetch. Transport failures get their own
    /// wording; everything else is reported as a generic error.
    pub fn from_error(err: &ApiError) -> Self {
        let message = if err.is_transport() {
            format!("Error fetching data from API: {err}")
        } else {
            format!("An error occurred: {err}")
        };
        PageOutput::Error {
            kind: ErrorKind::from(err),
            message,
        }
    }

    /// Always false; see `CACHE_CONTROL`.
    pub fn cacheable(&self) -> bool {
        false
    }
}

pub struct NoticesPage<T> {
    api: NoticesApi<T>,
    route: String,
}

impl<T: Transport> NoticesPage<T> {
    pub fn new(api: NoticesApi<T>, route: &str) -> Self {
        Self {
            api,
            route: route.to_string(),
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    /// Build the page for a raw `results-page` query value.
    pub fn handle(&self, raw_page: Option<&str>) -> PageOutput {
        let request = PageRequest::from_query(raw_page);

        match self.api.fetch(request.page) {
            Ok(response) => {
                let table = build_table(&response);
                let pagination = build_pagination(&response, request.page, &self.route);
                info!(
                    "Rendered notices page {} with {} rows ({})",
                    request.page,
                    table.rows.len(),
                    pagination.current
                );
                PageOutput::Listing { table, pagination }
            }
            Err(err) => {
                error!("Failed to load notices page {}: {}", request.page, err);
                PageOutput::from_error(&err)
            }
        }
    }
}
