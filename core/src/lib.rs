//! Synchronous core of the gazette notices page.
//!
//! # Overview
//! Fetches one page of the public notices feed and turns it into a listing
//! table plus a pagination control, or into an inline error block. The core
//! never touches the network itself: requests and responses are plain data
//! and the round-trip goes through an injected `Transport`.
//!
//! # Design
//! - `NoticesClient` is stateless; it holds only the feed endpoint.
//! - `NoticesApi` pairs the client with a transport and makes exactly one
//!   call per fetch. There is no caching or retry.
//! - `view` produces plain view models; `render` turns them into HTML.
//! - `NoticesPage::handle` is the only entry point a host needs.

pub mod client;
pub mod error;
pub mod handler;
pub mod http;
pub mod page;
pub mod render;
pub mod types;
pub mod view;

pub use client::{NoticesApi, NoticesClient, DEFAULT_ENDPOINT};
pub use error::ApiError;
pub use handler::{ErrorKind, NoticesPage, PageOutput, CACHE_CONTROL, DEFAULT_ROUTE};
pub use http::{body_text, HttpRequest, HttpResponse, Transport};
pub use page::{PageRequest, PAGE_PARAM};
pub use render::{render_document, render_html};
pub use types::{ApiResponse, NoticeRecord};
pub use view::{
    build_pagination, build_table, PageLink, PaginationState, PaginationView, TableRow, TableView,
};
