use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const FEED_PATH: &str = "/all-notices/notice/data.json";
pub const BROKEN_PATH: &str = "/broken/notice/data.json";
pub const INVALID_UTF8_PATH: &str = "/invalid-utf8/notice/data.json";
pub const UNAVAILABLE_PATH: &str = "/unavailable/notice/data.json";

/// Where the feed puts its pagination metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// `f:*` keys under a `feed` object.
    Nested,
    /// `f:*` keys at the top level of the document.
    TopLevel,
}

#[derive(Clone, Debug)]
pub struct Feed {
    pub total: u32,
    pub page_size: u32,
    pub layout: Layout,
}

impl Default for Feed {
    fn default() -> Self {
        Self {
            total: 25,
            page_size: 10,
            layout: Layout::Nested,
        }
    }
}

impl Feed {
    /// The document served for `page` (1-based, already clamped).
    pub fn page(&self, page: u32) -> Value {
        let start = page.saturating_sub(1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(self.total);
        let entries: Vec<Value> = (start..end).map(|i| notice(i + 1)).collect();

        let meta = json!({
            "f:total": self.total,
            "f:page-size": self.page_size,
            "f:page-number": page,
        });
        match self.layout {
            Layout::Nested => json!({ "entry": entries, "feed": meta }),
            Layout::TopLevel => {
                let mut doc = meta;
                doc["entry"] = Value::Array(entries);
                doc
            }
        }
    }
}

/// The `n`th notice of the fixture feed.
pub fn notice(n: u32) -> Value {
    json!({
        "id": format!("https://www.thegazette.co.uk/notice/{}", 4_000_000 + n),
        "title": format!("Notice {n}"),
        "f:status": if n % 2 == 0 { "published" } else { "updated" },
    })
}

pub fn app() -> Router {
    app_with(Feed::default())
}

pub fn app_with(feed: Feed) -> Router {
    Router::new()
        .route(FEED_PATH, get(feed_page))
        .route(BROKEN_PATH, get(broken))
        .route(INVALID_UTF8_PATH, get(invalid_utf8))
        .route(UNAVAILABLE_PATH, get(unavailable))
        .with_state(feed)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Feed::default()).await
}

pub async fn run_with(listener: TcpListener, feed: Feed) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(feed)).await
}

async fn feed_page(
    State(feed): State<Feed>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let page = params
        .get("results-page")
        .and_then(|raw| raw.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);
    Json(feed.page(page))
}

async fn broken() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], "not json")
}

/// A 200 whose body is not UTF-8.
async fn invalid_utf8() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        &b"{\"entry\": \"\xff\xfe\"}"[..],
    )
}

async fn unavailable() -> impl IntoResponse {
    (StatusCode::SERVICE_UNAVAILABLE, "maintenance")
}
