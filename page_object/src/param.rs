//! Resolved pagination values for a single invocation

use serde::{Deserialize, Serialize};

/// Column counted when neither the parameter object nor the configuration names one
pub const COUNT_ALL: &str = "*";

/// Page, size, offset and rows resolved for one statement invocation.
///
/// When `pageable` is set, all four numbers are present: the native pair
/// came from the parameter object and the other pair was derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationParam {
    /// One-based page index
    pub page: Option<i64>,
    /// The size of the page to be returned
    pub size: Option<i64>,
    /// Zero-based row index
    pub offset: Option<i64>,
    /// The rows of the page to be returned
    pub rows: Option<i64>,
    /// Column used by the count query
    pub count_column: Option<String>,
    pub pageable: bool,
}

impl PaginationParam {
    pub fn new(
        page: Option<i64>,
        size: Option<i64>,
        offset: Option<i64>,
        rows: Option<i64>,
        count_column: Option<String>,
        pageable: bool,
    ) -> Self {
        Self {
            page,
            size,
            offset,
            rows,
            count_column,
            pageable,
        }
    }

    /// Parameters for a statement that runs without pagination
    pub fn unpaged() -> Self {
        Self::default()
    }

    /// Pageable parameters with all four values already known
    pub fn resolved(page: i64, size: i64, offset: i64, rows: i64) -> Self {
        Self::new(Some(page), Some(size), Some(offset), Some(rows), None, true)
    }

    pub fn with_count_column(mut self, column: Option<String>) -> Self {
        self.count_column = column;
        self
    }

    pub fn is_pageable(&self) -> bool {
        self.pageable
    }

    pub fn offset_or_zero(&self) -> i64 {
        self.offset.unwrap_or(0)
    }

    pub fn rows_or_zero(&self) -> i64 {
        self.rows.unwrap_or(0)
    }

    /// The expression placed inside `COUNT(...)`
    pub fn count_target(&self) -> &str {
        self.count_column.as_deref().unwrap_or(COUNT_ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaged_has_nothing_set() {
        let param = PaginationParam::unpaged();
        assert!(!param.is_pageable());
        assert_eq!(param.page, None);
        assert_eq!(param.offset_or_zero(), 0);
        assert_eq!(param.rows_or_zero(), 0);
        assert_eq!(param.count_target(), "*");
    }

    #[test]
    fn test_resolved_with_count_column() {
        let param = PaginationParam::resolved(3, 10, 20, 10).with_count_column(Some("id".into()));
        assert!(param.is_pageable());
        assert_eq!(param.offset_or_zero(), 20);
        assert_eq!(param.rows_or_zero(), 10);
        assert_eq!(param.count_target(), "id");
    }
}
