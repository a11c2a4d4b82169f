//! HTTP host for the gazette notices page.
//!
//! Serves the page as HTML on the configured route and as JSON on
//! `<route>.json`. The feed call is blocking, so each request runs
//! `NoticesPage::handle` on tokio's blocking pool. Every page response is
//! marked non-cacheable.

pub mod config;
pub mod logging;
pub mod transport;

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use notices_core::{
    render_document, ApiError, NoticesApi, NoticesClient, NoticesPage, PageOutput, Transport,
    CACHE_CONTROL, PAGE_PARAM,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::transport::UreqTransport;

/// Raw query pairs. Kept as a list so a repeated parameter is not rejected;
/// the last occurrence wins.
type QueryPairs = Vec<(String, String)>;

pub fn page_param(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .rev()
        .find(|(key, _)| key == PAGE_PARAM)
        .map(|(_, value)| value.as_str())
}

pub fn app<T>(page: NoticesPage<T>) -> Router
where
    T: Transport + Send + Sync + 'static,
{
    let route = page.route().to_string();
    let json_route = format!("{route}.json");

    Router::new()
        .route(&route, get(notices_html::<T>))
        .route(&json_route, get(notices_json::<T>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(page))
}

/// The page wired to the real feed as described by `config`.
pub fn notices_page(config: &ServerConfig) -> NoticesPage<UreqTransport> {
    let transport = UreqTransport::new(config.verify_tls, config.timeout);
    let api = NoticesApi::new(NoticesClient::new(&config.endpoint), transport);
    NoticesPage::new(api, &config.route)
}

pub async fn run(listener: TcpListener, config: ServerConfig) -> Result<(), std::io::Error> {
    info!(
        "Serving notices from {} on {} (json: {})",
        config.endpoint,
        config.route,
        config.json_route()
    );
    axum::serve(listener, app(notices_page(&config))).await
}

async fn notices_html<T>(
    State(page): State<Arc<NoticesPage<T>>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Response
where
    T: Transport + Send + Sync + 'static,
{
    let output = render(page, query).await;
    (
        [(header::CACHE_CONTROL, CACHE_CONTROL)],
        Html(render_document(&output)),
    )
        .into_response()
}

async fn notices_json<T>(
    State(page): State<Arc<NoticesPage<T>>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Response
where
    T: Transport + Send + Sync + 'static,
{
    let output = render(page, query).await;
    ([(header::CACHE_CONTROL, CACHE_CONTROL)], Json(output)).into_response()
}

async fn health() -> &'static str {
    "ok"
}

async fn render<T>(
    page: Arc<NoticesPage<T>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> PageOutput
where
    T: Transport + Send + Sync + 'static,
{
    let raw_page = match query {
        Ok(Query(pairs)) => page_param(&pairs).map(str::to_string),
        Err(rejection) => {
            warn!("Ignoring unparseable query string: {}", rejection);
            None
        }
    };

    tokio::task::spawn_blocking(move || page.handle(raw_page.as_deref()))
        .await
        .unwrap_or_else(|e| {
            error!("Notices page task failed: {}", e);
            PageOutput::from_error(&ApiError::Generic(e.to_string()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn page_param_takes_last_occurrence() {
        let q = pairs(&[("results-page", "2"), ("sort", "date"), ("results-page", "5")]);
        assert_eq!(page_param(&q), Some("5"));
    }

    #[test]
    fn page_param_absent() {
        assert_eq!(page_param(&pairs(&[("sort", "date")])), None);
        assert_eq!(page_param(&[]), None);
    }
}
