//! Paging parameters for list endpoints.

use serde::Deserialize;

fn default_limit() -> u64 {
    5
}

fn default_page() -> u64 {
    1
}

/// The `limit`/`page` query parameters of a paged listing.
///
/// Defaults to the first page of five entries.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub(crate) struct Pagination {
    #[serde(default = "default_limit")]
    limit: u64,
    #[serde(default = "default_page")]
    page: u64,
}

impl Pagination {
    /// The number of entries per page.
    pub(crate) fn limit(&self) -> u64 {
        self.limit
    }

    /// The requested page, starting at 1. Page 0 is treated as page 1.
    pub(crate) fn page(&self) -> u64 {
        self.page.max(1)
    }

    /// How many entries precede the requested page.
    pub(crate) fn offset(&self) -> u64 {
        (self.page() - 1) * self.limit
    }

    /// How many pages `total` entries span.
    pub(crate) fn total_pages(&self, total: u64) -> u64 {
        if self.limit == 0 {
            0
        } else {
            total.div_ceil(self.limit)
        }
    }
}

#[cfg(test)]
mod pagination_tests {
    use super::Pagination;

    fn pagination(limit: u64, page: u64) -> Pagination {
        Pagination { limit, page }
    }

    #[test]
    fn defaults_to_the_first_page_of_five() {
        let parsed: Pagination = serde_json::from_str("{}").unwrap();

        assert_eq!(parsed.limit(), 5);
        assert_eq!(parsed.page(), 1);
        assert_eq!(parsed.offset(), 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(pagination(5, 1).offset(), 0);
        assert_eq!(pagination(5, 3).offset(), 10);
    }

    #[test]
    fn page_zero_is_treated_as_page_one() {
        assert_eq!(pagination(5, 0).offset(), 0);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(pagination(5, 1).total_pages(0), 0);
        assert_eq!(pagination(5, 1).total_pages(5), 1);
        assert_eq!(pagination(5, 1).total_pages(6), 2);
    }
}
