//! Decoded shapes of the notices feed.
//!
//! # Design
//! The feed is kept as the raw `serde_json::Value` it decoded to. Nothing is
//! validated up front: accessors read what they need and fall back to empty
//! values, because the provider sends pagination metadata either nested under
//! `feed` or at the top level, and numbers sometimes arrive as strings.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

pub const KEY_ENTRY: &str = "entry";
pub const KEY_FEED: &str = "feed";
pub const KEY_TOTAL: &str = "f:total";
pub const KEY_PAGE_SIZE: &str = "f:page-size";
pub const KEY_PAGE_NUMBER: &str = "f:page-number";
pub const KEY_STATUS: &str = "f:status";

/// One page of the notices feed, as returned by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse(Value);

impl ApiResponse {
    /// Wrap a decoded document. `null` and bare scalars are rejected since
    /// they carry neither entries nor metadata.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        match value {
            Value::Null => Err(ApiError::Decode("response body is null".to_string())),
            Value::Object(_) | Value::Array(_) => Ok(Self(value)),
            other => Err(ApiError::Decode(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Notice records in feed order. Missing or non-array `entry` is empty.
    pub fn entries(&self) -> Vec<NoticeRecord> {
        match self.0.get(KEY_ENTRY) {
            Some(Value::Array(items)) => items.iter().map(NoticeRecord::from_value).collect(),
            _ => Vec::new(),
        }
    }

    /// The nested pagination block, when the provider sent one.
    pub fn feed(&self) -> Option<&Map<String, Value>> {
        self.0.get(KEY_FEED).and_then(Value::as_object)
    }

    /// Integer metadata under `feed`.
    pub fn feed_int(&self, key: &str) -> Option<i64> {
        self.feed().and_then(|feed| present(feed.get(key))).map(cast_int)
    }

    /// Integer metadata at the top level of the document.
    pub fn top_level_int(&self, key: &str) -> Option<i64> {
        present(self.0.get(key)).map(cast_int)
    }
}

/// A single published notice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoticeRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
}

impl NoticeRecord {
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| present(value.get(key)).map(scalar_text);
        Self {
            id: field("id"),
            title: field("title"),
            status: field(KEY_STATUS),
        }
    }

    /// Last `/`-separated segment of the notice URI, e.g. `"123"` for
    /// `"https://x/y/123"`. Empty when the record has no id.
    pub fn display_id(&self) -> &str {
        self.id
            .as_deref()
            .and_then(|id| id.rsplit('/').next())
            .unwrap_or("")
    }
}

/// A key holding `null` counts as missing.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Integer-cast of a loose JSON value. Floats truncate toward zero, strings
/// are read by their leading digits, booleans map to 0 and 1.
pub fn cast_int(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => leading_int(s),
        Value::Array(items) => i64::from(!items.is_empty()),
        Value::Object(_) => 1,
    }
}

/// Reads an optionally signed run of leading digits, ignoring surrounding
/// whitespace and any trailing garbage. No digits reads as 0; overflow
/// saturates.
pub fn leading_int(raw: &str) -> i64 {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        acc = acc.saturating_mul(10);
        acc = if negative {
            acc.saturating_sub(d)
        } else {
            acc.saturating_add(d)
        };
    }
    acc
}

/// Display text of a scalar. `true` prints as `"1"`, `false` as empty;
/// arrays and objects have no sensible cell text and print empty.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "1".to_string(),
        _ => String::new(),
    }
}
