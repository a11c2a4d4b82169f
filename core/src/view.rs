//! View models for the notices page: the listing table and the pagination
//! control. Both are plain data; turning them into markup is `render`'s job.

use serde::Serialize;

use crate::page::{clamp_page, PAGE_PARAM};
use crate::types::{ApiResponse, NoticeRecord, KEY_PAGE_NUMBER, KEY_PAGE_SIZE, KEY_TOTAL};

pub const TABLE_HEADERS: [&str; 3] = ["ID", "Title", "Status"];
pub const EMPTY_MESSAGE: &str = "No notices found.";
pub const DEFAULT_ITEMS_PER_PAGE: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub id: String,
    pub title: String,
    pub status: String,
}

impl From<&NoticeRecord> for TableRow {
    fn from(record: &NoticeRecord) -> Self {
        Self {
            id: record.display_id().to_string(),
            title: record.title.clone().unwrap_or_default(),
            status: record.status.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub headers: [&'static str; 3],
    pub rows: Vec<TableRow>,
    pub empty_message: &'static str,
}

impl TableView {
    pub fn from_records(records: &[NoticeRecord]) -> Self {
        Self {
            headers: TABLE_HEADERS,
            rows: records.iter().map(TableRow::from).collect(),
            empty_message: EMPTY_MESSAGE,
        }
    }

    /// True when the placeholder should be shown instead of a table body.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Rows for every entry of the feed page, in feed order.
pub fn build_table(response: &ApiResponse) -> TableView {
    TableView::from_records(&response.entries())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub total_results: u64,
    pub items_per_page: i64,
    pub current_page: u32,
    pub total_pages: u64,
}

impl PaginationState {
    /// Pagination metadata of a feed page.
    ///
    /// Values under `feed` win. The top-level `f:total` is only consulted
    /// while the total is still 0, and the top-level `f:page-size` only while
    /// the page size is still the default 10, so a nested page size of exactly
    /// 10 can be replaced by a top-level one. A nested `f:page-number`
    /// replaces `requested_page`.
    pub fn from_response(response: &ApiResponse, requested_page: u32) -> Self {
        let mut total_results: i64 = 0;
        let mut items_per_page = DEFAULT_ITEMS_PER_PAGE;
        let mut current_page = i64::from(requested_page);

        if response.feed().is_some() {
            if let Some(total) = response.feed_int(KEY_TOTAL) {
                total_results = total;
            }
            if let Some(size) = response.feed_int(KEY_PAGE_SIZE) {
                items_per_page = size;
            }
            if let Some(number) = response.feed_int(KEY_PAGE_NUMBER) {
                current_page = number;
            }
        }

        if total_results == 0 {
            if let Some(total) = response.top_level_int(KEY_TOTAL) {
                total_results = total;
            }
        }
        if items_per_page == DEFAULT_ITEMS_PER_PAGE {
            if let Some(size) = response.top_level_int(KEY_PAGE_SIZE) {
                items_per_page = size;
            }
        }

        let total_results = u64::try_from(total_results).unwrap_or(0);
        Self {
            total_results,
            items_per_page,
            current_page: clamp_page(current_page),
            total_pages: total_pages(total_results, items_per_page),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.current_page) < self.total_pages
    }
}

/// `ceil(total / per_page)`, never below 1. A non-positive page size leaves
/// a single page.
pub fn total_pages(total_results: u64, items_per_page: i64) -> u64 {
    match u64::try_from(items_per_page) {
        Ok(per_page) if per_page > 0 => total_results.div_ceil(per_page).max(1),
        _ => 1,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub label: &'static str,
    pub page: u32,
    pub href: String,
}

impl PageLink {
    fn new(label: &'static str, route: &str, page: u32) -> Self {
        Self {
            label,
            page,
            href: format!("{route}?{PAGE_PARAM}={page}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub state: PaginationState,
    pub prev: Option<PageLink>,
    pub current: String,
    pub next: Option<PageLink>,
}

impl PaginationView {
    pub fn from_state(state: PaginationState, route: &str) -> Self {
        let prev = state
            .has_previous()
            .then(|| PageLink::new("Previous", route, state.current_page - 1));
        let next = state
            .has_next()
            .then(|| state.current_page.checked_add(1))
            .flatten()
            .map(|page| PageLink::new("Next", route, page));

        Self {
            state,
            prev,
            current: format!("Page {} of {}", state.current_page, state.total_pages),
            next,
        }
    }
}

/// Previous/indicator/Next controls for a feed page. Links point at `route`.
pub fn build_pagination(response: &ApiResponse, requested_page: u32, route: &str) -> PaginationView {
    PaginationView::from_state(PaginationState::from_response(response, requested_page), route)
}
