//! HTML rendering of a `PageOutput`.

use std::fmt::Write;

use crate::handler::PageOutput;
use crate::view::{PageLink, PaginationView, TableView};

const TABLE_WRAPPER_STYLE: &str = "overflow-x:auto;";
const TABLE_STYLE: &str = "width: 100%; border-collapse: collapse; margin-bottom: 20px;";
const PAGER_STYLE: &str = "display: flex; justify-content: space-between; align-items: center; margin: 20px 0; padding: 10px; background-color: #f5f5f5; border-radius: 4px;";
const CURRENT_STYLE: &str =
    "padding: 0 10px; font-weight: bold; font-size: 16px; text-align: center; flex-grow: 1;";
const BUTTON_STYLE: &str = "padding: 8px 16px; background-color: #007bff; color: white; text-decoration: none; border-radius: 4px; display: inline-block;";
const PREV_MARGIN: &str = "margin-right: 10px;";
const NEXT_MARGIN: &str = "margin-left: 10px;";

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The page fragment: a container holding either the error block or the
/// table followed by the pagination control.
pub fn render_html(output: &PageOutput) -> String {
    let mut html = String::from("<div class=\"gazette-notices-container\">\n");
    match output {
        PageOutput::Listing { table, pagination } => {
            render_table(&mut html, table);
            render_pagination(&mut html, pagination);
        }
        PageOutput::Error { message, .. } => {
            let _ = writeln!(
                html,
                "<div class=\"messages messages--error\">{}</div>",
                escape_html(message)
            );
        }
    }
    html.push_str("</div>\n");
    html
}

/// `render_html` wrapped in a minimal standalone document.
pub fn render_document(output: &PageOutput) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Gazette notices</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        render_html(output)
    )
}

fn render_table(html: &mut String, table: &TableView) {
    let _ = writeln!(html, "<div style=\"{TABLE_WRAPPER_STYLE}\">");
    let _ = write!(html, "<table style=\"{TABLE_STYLE}\">\n<thead><tr>");
    for header in table.headers {
        let _ = write!(html, "<th>{}</th>", escape_html(header));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    if table.is_empty() {
        let _ = writeln!(
            html,
            "<tr class=\"empty\"><td colspan=\"{}\">{}</td></tr>",
            table.headers.len(),
            escape_html(table.empty_message)
        );
    }
    for row in &table.rows {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&row.id),
            escape_html(&row.title),
            escape_html(&row.status)
        );
    }
    html.push_str("</tbody>\n</table>\n</div>\n");
}

fn render_pagination(html: &mut String, pagination: &PaginationView) {
    let _ = writeln!(
        html,
        "<div class=\"pagination-container\" style=\"{PAGER_STYLE}\">"
    );
    if let Some(prev) = &pagination.prev {
        render_link(html, prev, "pager__prev", PREV_MARGIN);
    }
    let _ = writeln!(
        html,
        "<div class=\"pager__current\" style=\"{CURRENT_STYLE}\">{}</div>",
        escape_html(&pagination.current)
    );
    if let Some(next) = &pagination.next {
        render_link(html, next, "pager__next", NEXT_MARGIN);
    }
    html.push_str("</div>\n");
}

fn render_link(html: &mut String, link: &PageLink, class: &str, margin: &str) {
    let _ = writeln!(
        html,
        "<a class=\"button button--primary {class}\" style=\"{BUTTON_STYLE} {margin}\" href=\"{}\">{}</a>",
        escape_html(&link.href),
        escape_html(link.label)
    );
}
