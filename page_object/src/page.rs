//! Page envelope returned to callers
//!
//! `Page<T>` combines a row list with whatever subset of page, size and total
//! the caller knows. Total pages, next and previous are always derived from
//! those three and are only present when all three are.

use crate::container::Paginated;
use crate::traits::PaginationContainer;
use serde::Serialize;

/// One page of rows plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Data list
    list: Vec<T>,
    /// One-based page index
    page: Option<i64>,
    /// The size of the page
    size: Option<i64>,
    /// Total number of rows across all pages
    total: Option<i64>,
    total_pages: Option<i64>,
    next: Option<bool>,
    previous: Option<bool>,
}

impl<T> Page<T> {
    fn bare(list: Vec<T>, page: Option<i64>, size: Option<i64>, total: Option<i64>) -> Self {
        Self {
            list,
            page,
            size,
            total,
            total_pages: None,
            next: None,
            previous: None,
        }
    }

    /// Assemble a page from whatever metadata is known.
    ///
    /// Missing page or size degrades to list and total only; a missing total
    /// degrades to list, page and size. A page or size of zero or less yields
    /// zero total pages with neither next nor previous.
    pub fn of(list: Vec<T>, page: Option<i64>, size: Option<i64>, total: Option<i64>) -> Self {
        let (Some(page), Some(size)) = (page, size) else {
            return Self::bare(list, None, None, total);
        };
        let Some(total) = total else {
            return Self::unpaged(list, page, size);
        };

        let (total_pages, next, previous) = if page > 0 && size > 0 {
            let total_pages = if total % size > 0 {
                total / size + 1
            } else {
                total / size
            };
            let next = i128::from(page) * i128::from(size) < i128::from(total);
            (total_pages, next, page != 1)
        } else {
            (0, false, false)
        };

        Self {
            list,
            page: Some(page),
            size: Some(size),
            total: Some(total),
            total_pages: Some(total_pages),
            next: Some(next),
            previous: Some(previous),
        }
    }

    /// List and total only
    pub fn with_total(list: Vec<T>, total: i64) -> Self {
        Self::bare(list, None, None, Some(total))
    }

    /// List, page and size without a total
    pub fn unpaged(list: Vec<T>, page: i64, size: i64) -> Self {
        Self::bare(list, Some(page), Some(size), None)
    }

    /// List only, no metadata
    pub fn wrap<I>(collection: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::bare(collection.into_iter().collect(), None, None, None)
    }

    pub fn empty() -> Self {
        Self::wrap(Vec::new())
    }

    /// Re-attach the metadata carried by `source` onto a different list
    pub fn transfer<S, I>(source: &S, target: I) -> Self
    where
        S: PaginationContainer + ?Sized,
        I: IntoIterator<Item = T>,
    {
        Self::of(
            target.into_iter().collect(),
            source.page(),
            source.size(),
            source.total(),
        )
    }

    /// Map the rows of a container into a page, keeping its metadata
    pub fn map_from<S, F>(source: &Paginated<S>, f: F) -> Self
    where
        F: FnMut(&S) -> T,
    {
        Self::transfer(source, source.items.iter().map(f))
    }

    /// Map every row, keeping all metadata as is
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            list: self.list.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
            total_pages: self.total_pages,
            next: self.next,
            previous: self.previous,
        }
    }

    pub fn list(&self) -> &[T] {
        &self.list
    }

    pub fn into_list(self) -> Vec<T> {
        self.list
    }

    pub fn page(&self) -> Option<i64> {
        self.page
    }

    pub fn size(&self) -> Option<i64> {
        self.size
    }

    pub fn total(&self) -> Option<i64> {
        self.total
    }

    pub fn total_pages(&self) -> Option<i64> {
        self.total_pages
    }

    pub fn next(&self) -> Option<bool> {
        self.next
    }

    pub fn previous(&self) -> Option<bool> {
        self.previous
    }

    /// Number of rows in this page
    pub fn current(&self) -> usize {
        self.list.len()
    }

    pub fn has_next(&self) -> bool {
        self.next.unwrap_or(false)
    }

    pub fn has_previous(&self) -> bool {
        self.previous.unwrap_or(false)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Paginated<T>> for Page<T> {
    fn from(source: Paginated<T>) -> Self {
        let metadata = source.metadata.unwrap_or_default();
        Self::of(source.items, metadata.page, metadata.size, metadata.total)
    }
}

impl<T> PaginationContainer for Page<T> {
    fn page(&self) -> Option<i64> {
        self.page
    }

    fn size(&self) -> Option<i64> {
        self.size
    }

    fn total(&self) -> Option<i64> {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::PageMetadata;
    use serde_json::json;

    fn ceil_div(total: i64, size: i64) -> i64 {
        (total + size - 1) / size
    }

    #[test]
    fn test_metadata_matches_closed_form() {
        for total in 0..=40 {
            for size in 1..=7 {
                for page in 1..=8 {
                    let p = Page::of(Vec::<()>::new(), Some(page), Some(size), Some(total));
                    assert_eq!(p.total_pages(), Some(ceil_div(total, size)), "{total}/{size}");
                    assert_eq!(p.next(), Some(page * size < total));
                    assert_eq!(p.previous(), Some(page != 1));
                }
            }
        }
    }

    #[test]
    fn test_of_without_page_size_keeps_total_only() {
        let p = Page::of(vec![1, 2], None, None, Some(40));
        assert_eq!(p.list(), &[1, 2]);
        assert_eq!(p.total(), Some(40));
        assert_eq!(p.page(), None);
        assert_eq!(p.size(), None);
        assert_eq!(p.total_pages(), None);
        assert_eq!(p.next(), None);
        assert_eq!(p.previous(), None);

        let p = Page::of(vec![1], Some(2), None, Some(40));
        assert_eq!(p.page(), None);
        assert_eq!(p.total(), Some(40));
    }

    #[test]
    fn test_of_without_total_keeps_page_size_only() {
        let p = Page::of(vec!["a"], Some(2), Some(10), None);
        assert_eq!(p.page(), Some(2));
        assert_eq!(p.size(), Some(10));
        assert_eq!(p.total(), None);
        assert_eq!(p.total_pages(), None);
        assert_eq!(p.next(), None);
        assert_eq!(p.previous(), None);
    }

    #[test]
    fn test_degenerate_page_or_size() {
        let p = Page::of(vec![0; 3], Some(0), Some(10), Some(30));
        assert_eq!(p.total_pages(), Some(0));
        assert_eq!(p.next(), Some(false));
        assert_eq!(p.previous(), Some(false));

        let p = Page::of(vec![0; 3], Some(2), Some(0), Some(30));
        assert_eq!(p.total_pages(), Some(0));
        assert_eq!(p.next(), Some(false));
        assert_eq!(p.previous(), Some(false));
        assert_eq!(p.size(), Some(0));
    }

    #[test]
    fn test_last_page_and_empty_total() {
        let p = Page::of(vec![0; 5], Some(3), Some(10), Some(25));
        assert_eq!(p.total_pages(), Some(3));
        assert!(!p.has_next());
        assert!(p.has_previous());
        assert_eq!(p.current(), 5);

        let p = Page::of(Vec::<i32>::new(), Some(1), Some(10), Some(0));
        assert_eq!(p.total_pages(), Some(0));
        assert!(!p.has_next());
        assert!(!p.has_previous());
    }

    #[test]
    fn test_wrap_and_empty() {
        let p = Page::wrap(vec![1, 2, 3]);
        assert_eq!(p.list(), &[1, 2, 3]);
        assert_eq!(p.page(), None);
        assert_eq!(p.size(), None);
        assert_eq!(p.total(), None);
        assert_eq!(p.total_pages(), None);
        assert_eq!(p.next(), None);
        assert_eq!(p.previous(), None);

        let p = Page::wrap(std::collections::BTreeSet::from([3, 1, 2]));
        assert_eq!(p.list(), &[1, 2, 3]);

        let p: Page<String> = Page::empty();
        assert_eq!(p.current(), 0);
        assert_eq!(p, Page::default());
    }

    #[test]
    fn test_transfer_recomputes_metadata() {
        let source = Paginated::with_metadata(vec![0u8; 10], Some(2), Some(10), Some(25));
        let target: Vec<String> = (0..10).map(|i| format!("row-{i}")).collect();

        let p = Page::transfer(&source, target.clone());
        assert_eq!(p.list(), target.as_slice());
        assert_eq!(p.total(), Some(25));
        assert_eq!(p.page(), Some(2));
        assert_eq!(p.size(), Some(10));
        assert_eq!(p.total_pages(), Some(3));
        assert_eq!(p.next(), Some(true));
        assert_eq!(p.previous(), Some(true));
    }

    #[test]
    fn test_transfer_without_metadata_wraps() {
        let source = Paginated::unpaged(vec![1, 2]);
        let p = Page::transfer(&source, vec!["x", "y"]);
        assert_eq!(p, Page::wrap(vec!["x", "y"]));
    }

    #[test]
    fn test_map_from_and_from_container() {
        let source = Paginated::new(
            vec![1, 2, 3],
            Some(PageMetadata::new(Some(1), Some(3), Some(7))),
        );

        let p = Page::map_from(&source, |n| n * 10);
        assert_eq!(p.list(), &[10, 20, 30]);
        assert_eq!(p.total_pages(), Some(3));
        assert_eq!(p.next(), Some(true));
        assert_eq!(p.previous(), Some(false));

        let p: Page<i32> = source.into();
        assert_eq!(p.list(), &[1, 2, 3]);
        assert_eq!(p.total_pages(), Some(3));
    }

    #[test]
    fn test_map_keeps_metadata() {
        let p = Page::of(vec![1, 2], Some(1), Some(2), Some(3)).map(|n| n + 1);
        assert_eq!(p.list(), &[2, 3]);
        assert_eq!(p.total_pages(), Some(2));
        assert_eq!(p.next(), Some(true));
    }

    #[test]
    fn test_serializes_camel_case() {
        let p = Page::of(vec!["a"], Some(1), Some(1), Some(2));
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(
            value,
            json!({
                "list": ["a"],
                "page": 1,
                "size": 1,
                "total": 2,
                "totalPages": 2,
                "next": true,
                "previous": false
            })
        );

        let value = serde_json::to_value(Page::wrap(vec![1])).unwrap();
        assert_eq!(value["totalPages"], json!(null));
    }

    #[test]
    fn test_page_is_a_container() {
        let first = Page::of(vec![1, 2], Some(1), Some(2), Some(5));
        let relabeled = Page::transfer(&first, vec!["a", "b"]);
        assert_eq!(relabeled.total_pages(), Some(3));
        assert_eq!(PaginationContainer::total(&relabeled), Some(5));
    }
}
