//! Response envelope for paginated list endpoints.

use serde::Serialize;

use crate::params::{PageInfo, PaginationParams};

/// A page of items plus its metadata, serialized as one flat object:
/// `{"items": [...], "page": .., "page_size": .., "total": .., "pages": ..,
/// "has_next": .., "has_prev": ..}`.
#[derive(Clone, Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Paginated<T> {
    /// Wrap one page of items with metadata derived from the total count.
    pub fn new(items: Vec<T>, params: PaginationParams, total: u64) -> Self {
        Self {
            items,
            info: params.info(total),
        }
    }
}
