//! The `results-page` query parameter.

use serde::Serialize;

use crate::types::leading_int;

/// Name of the query parameter carrying the requested page, both inbound and
/// on the outbound feed request.
pub const PAGE_PARAM: &str = "results-page";

/// The page a visitor asked for. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: u32,
}

impl PageRequest {
    /// Parse the raw query value. Absent, non-numeric and non-positive input
    /// all land on page 1; values past `u32::MAX` saturate.
    pub fn from_query(raw: Option<&str>) -> Self {
        let parsed = raw.map(leading_int).unwrap_or(1);
        Self {
            page: clamp_page(parsed),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1 }
    }
}

pub(crate) fn clamp_page(value: i64) -> u32 {
    u32::try_from(value.max(1)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_defaults_to_first_page() {
        assert_eq!(PageRequest::from_query(None).page, 1);
    }

    #[test]
    fn non_positive_and_garbage_clamp_to_one() {
        for raw in ["0", "-4", "abc", "", "   ", "-"] {
            assert_eq!(PageRequest::from_query(Some(raw)).page, 1, "input {raw:?}");
        }
    }

    #[test]
    fn leading_digits_are_used() {
        assert_eq!(PageRequest::from_query(Some("3abc")).page, 3);
        assert_eq!(PageRequest::from_query(Some("2.7")).page, 2);
        assert_eq!(PageRequest::from_query(Some(" 7 ")).page, 7);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(
            PageRequest::from_query(Some("99999999999999")).page,
            u32::MAX
        );
    }
}
