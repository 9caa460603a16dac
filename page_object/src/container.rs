//! Generic metadata-carrying result container
//!
//! `Paginated<T>` holds one page of rows together with the page, size and total
//! they were fetched with. The metadata survives element mapping, so a `Page`
//! can be rebuilt later without running the count query again.

use crate::traits::PaginationContainer;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Page, size and total a result set was fetched with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageMetadata {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub total: Option<i64>,
}

impl PageMetadata {
    pub fn new(page: Option<i64>, size: Option<i64>, total: Option<i64>) -> Self {
        Self { page, size, total }
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.size.is_none() && self.total.is_none()
    }
}

/// Rows plus optional page metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub metadata: Option<PageMetadata>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, metadata: Option<PageMetadata>) -> Self {
        Self { items, metadata }
    }

    /// Rows without any page metadata
    pub fn unpaged(items: Vec<T>) -> Self {
        Self::new(items, None)
    }

    pub fn with_metadata(items: Vec<T>, page: Option<i64>, size: Option<i64>, total: Option<i64>) -> Self {
        Self::new(items, Some(PageMetadata::new(page, size, total)))
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Map every row, keeping the metadata
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            metadata: self.metadata,
        }
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::unpaged(Vec::new())
    }
}

impl<T> Deref for Paginated<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for Paginated<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Paginated<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Paginated<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::unpaged(iter.into_iter().collect())
    }
}

impl<T> PaginationContainer for Paginated<T> {
    fn page(&self) -> Option<i64> {
        self.metadata.and_then(|m| m.page)
    }

    fn size(&self) -> Option<i64> {
        self.metadata.and_then(|m| m.size)
    }

    fn total(&self) -> Option<i64> {
        self.metadata.and_then(|m| m.total)
    }
}
