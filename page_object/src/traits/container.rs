//! Result containers that remember their own page metadata

use crate::container::PageMetadata;

/// A result container that carries the page, size and total it was fetched with,
/// so a later transform step can rebuild page metadata without re-querying.
pub trait PaginationContainer {
    fn page(&self) -> Option<i64>;

    fn size(&self) -> Option<i64>;

    fn total(&self) -> Option<i64>;

    fn metadata(&self) -> PageMetadata {
        PageMetadata::new(self.page(), self.size(), self.total())
    }
}
