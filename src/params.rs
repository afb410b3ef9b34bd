//! Core pagination parameter normalization and metadata derivation.

use serde::Serialize;
use tracing::debug;

/// Default page number when not specified in the request.
pub const DEFAULT_PAGE: u64 = 1;

/// Default number of items per page when not specified in the request.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Minimum allowed items per page.
pub const MIN_PAGE_SIZE: u64 = 1;

/// Maximum allowed items per page to prevent excessive data retrieval.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Validated pagination parameters.
///
/// Only constructible through [`PaginationParams::normalize`], so the fields
/// always hold clamped values: `page >= 1` and
/// `MIN_PAGE_SIZE <= page_size <= MAX_PAGE_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationParams {
    page: u64,
    page_size: u64,
}

impl PaginationParams {
    /// Clamp raw inputs into valid parameters.
    ///
    /// Missing values take the defaults; any page below 1 clamps up to 1 and
    /// page size clamps into `MIN_PAGE_SIZE..=MAX_PAGE_SIZE`. Never fails:
    /// every numeric input maps to a valid parameter set.
    pub fn normalize(page: Option<i64>, page_size: Option<i64>) -> Self {
        let raw_page = page.unwrap_or(DEFAULT_PAGE as i64);
        let raw_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE as i64);

        let page = raw_page.max(DEFAULT_PAGE as i64) as u64;
        let page_size = raw_size.clamp(MIN_PAGE_SIZE as i64, MAX_PAGE_SIZE as i64) as u64;

        if raw_page != page as i64 || raw_size != page_size as i64 {
            debug!(raw_page, raw_size, page, page_size, "clamped pagination input");
        }

        Self { page, page_size }
    }

    /// 1-based page index.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Items per page.
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of leading items to omit before the page begins.
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Maximum number of items to return.
    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// Derive page metadata from the total count of matching items.
    ///
    /// `total` typically comes from a separate count query. `pages` is the
    /// integer ceiling of `total / page_size`, avoiding float rounding at
    /// exact multiples. `has_prev` reflects the requested page alone, not
    /// whether earlier pages hold data.
    pub fn info(&self, total: u64) -> PageInfo {
        let pages = if total > 0 {
            total.div_ceil(self.page_size)
        } else {
            0
        };

        PageInfo {
            page: self.page,
            page_size: self.page_size,
            total,
            pages,
            has_next: self.page < pages,
            has_prev: self.page > 1,
        }
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Page metadata accompanying a paginated result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// 1-based page index.
    pub page: u64,
    /// Items per page.
    pub page_size: u64,
    /// Total number of matching items.
    pub total: u64,
    /// Total number of pages.
    pub pages: u64,
    /// Whether a page after this one exists.
    pub has_next: bool,
    /// Whether a page before this one exists.
    pub has_prev: bool,
}
