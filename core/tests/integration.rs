//! End-to-end page rendering against the live mock feed.
//!
//! # Design
//! Starts the mock server on a random port, then drives `NoticesPage` over
//! real HTTP using a small ureq-backed `Transport`. Validates that request
//! building, response parsing and the view builders agree with an actual
//! server, including its failure routes.

use notices_core::{
    body_text, render_html, ApiError, ErrorKind, HttpRequest, HttpResponse, NoticesApi,
    NoticesClient, NoticesPage, PageOutput, Transport,
};

/// Execute `HttpRequest`s with ureq.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data, letting the core client interpret them.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
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
        let bytes = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = body_text(bytes)?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

/// Start the mock feed on a random port and return its base URL.
fn start_mock(feed: mock_server::Feed) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, feed).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn page_for(endpoint: &str) -> NoticesPage<UreqTransport> {
    let api = NoticesApi::new(NoticesClient::new(endpoint), UreqTransport::new());
    NoticesPage::new(api, "/gazette-notices/info")
}

fn listing(out: PageOutput) -> (notices_core::TableView, notices_core::PaginationView) {
    match out {
        PageOutput::Listing { table, pagination } => (table, pagination),
        other => panic!("expected listing, got {other:?}"),
    }
}

#[test]
fn nested_feed_walkthrough() {
    let base = start_mock(mock_server::Feed::default());
    let page = page_for(&format!("{base}{}", mock_server::FEED_PATH));

    // Step 1: no parameter: first page, ten rows, Next only.
    let (table, pagination) = listing(page.handle(None));
    assert_eq!(table.rows.len(), 10);
    assert_eq!(table.rows[0].id, "4000001");
    assert_eq!(table.rows[0].title, "Notice 1");
    assert_eq!(table.rows[0].status, "updated");
    assert_eq!(pagination.current, "Page 1 of 3");
    assert!(pagination.prev.is_none());
    assert_eq!(
        pagination.next.unwrap().href,
        "/gazette-notices/info?results-page=2"
    );

    // Step 2: middle page: both links.
    let (table, pagination) = listing(page.handle(Some("2")));
    assert_eq!(table.rows[0].id, "4000011");
    assert_eq!(pagination.prev.unwrap().page, 1);
    assert_eq!(pagination.next.unwrap().page, 3);

    // Step 3: last page: partial, Previous only.
    let (table, pagination) = listing(page.handle(Some("3")));
    assert_eq!(table.rows.len(), 5);
    assert_eq!(pagination.current, "Page 3 of 3");
    assert!(pagination.next.is_none());

    // Step 4: past the end: empty placeholder.
    let out = page.handle(Some("8"));
    let html = render_html(&out);
    assert!(html.contains("No notices found."));
    let (table, _) = listing(out);
    assert!(table.is_empty());

    // Step 5: garbage parameter: first page.
    let (_, pagination) = listing(page.handle(Some("-5")));
    assert_eq!(pagination.state.current_page, 1);
}

#[test]
fn top_level_metadata_feed() {
    let base = start_mock(mock_server::Feed {
        total: 42,
        page_size: 20,
        layout: mock_server::Layout::TopLevel,
    });
    let page = page_for(&format!("{base}{}", mock_server::FEED_PATH));

    let (table, pagination) = listing(page.handle(Some("3")));
    assert_eq!(table.rows.len(), 2);
    assert_eq!(pagination.state.items_per_page, 20);
    assert_eq!(pagination.current, "Page 3 of 3");
}

#[test]
fn malformed_body_renders_error_block() {
    let base = start_mock(mock_server::Feed::default());
    let page = page_for(&format!("{base}{}", mock_server::BROKEN_PATH));

    let out = page.handle(None);
    match &out {
        PageOutput::Error { kind, message } => {
            assert_eq!(*kind, ErrorKind::Decode);
            assert!(message.starts_with("An error occurred:"));
        }
        other => panic!("expected error, got {other:?}"),
    }
    let html = render_html(&out);
    assert!(html.contains("messages--error"));
    assert!(!html.contains("<table"));
}

#[test]
fn non_utf8_body_is_a_decode_error() {
    let base = start_mock(mock_server::Feed::default());
    let page = page_for(&format!("{base}{}", mock_server::INVALID_UTF8_PATH));

    match page.handle(None) {
        PageOutput::Error { kind, message } => {
            assert_eq!(kind, ErrorKind::Decode);
            assert!(message.starts_with("An error occurred: Error decoding JSON response"));
        }
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn unavailable_feed_renders_error_block() {
    let base = start_mock(mock_server::Feed::default());
    let page = page_for(&format!("{base}{}", mock_server::UNAVAILABLE_PATH));

    match page.handle(None) {
        PageOutput::Error { kind, message } => {
            assert_eq!(kind, ErrorKind::Transport);
            assert!(message.contains("HTTP 503"));
        }
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn connection_refused_renders_error_block() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let page = page_for(&format!("http://{addr}{}", mock_server::FEED_PATH));

    let out = page.handle(Some("1"));
    match &out {
        PageOutput::Error { kind, message } => {
            assert_eq!(*kind, ErrorKind::Transport);
            assert!(message.starts_with("Error fetching data from API:"));
        }
        other => panic!("expected error, got {other:?}"),
    }
    let html = render_html(&out);
    assert!(!html.contains("pagination-container"));
}
