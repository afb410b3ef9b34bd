//! Pagination utilities for list endpoints.
//! - Normalizes raw page/page-size inputs into clamped, validated parameters.
//! - Derives skip/limit values for the data-access layer.
//! - Builds page metadata and response envelopes for the formatting layer.

pub mod params;
pub mod query;
pub mod response;

pub use params::{
    PageInfo, PaginationParams, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE,
};
pub use query::PageQuery;
pub use response::Paginated;
