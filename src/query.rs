//! Raw pagination inputs as they arrive from a query string.

use serde::Deserialize;

use crate::params::PaginationParams;

/// Untrusted pagination fields of a list request.
///
/// Both fields are optional and may hold any integer; [`PageQuery::normalize`]
/// clamps them into valid [`PaginationParams`]. Plain serde, so it works
/// directly with query extractors such as `axum::extract::Query`.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Requested page number (1-based).
    pub page: Option<i64>,
    /// Requested items per page.
    pub page_size: Option<i64>,
}

impl PageQuery {
    /// Clamp into validated parameters.
    pub fn normalize(self) -> PaginationParams {
        PaginationParams::normalize(self.page, self.page_size)
    }
}
