//! Declared pagination layout of a parameter type
//!
//! A `PaginationShape` records which attribute paths of a parameter object carry
//! page, size, offset, rows and count column values, plus bounds the type
//! overrides. Shapes come from `#[derive(Pageable)]` or are built by hand and
//! registered per statement at startup.

/// Attribute paths and per-type bound overrides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationShape {
    pub page: Option<String>,
    pub size: Option<String>,
    pub offset: Option<String>,
    pub rows: Option<String>,
    pub count_column: Option<String>,
    pub default_page: Option<i64>,
    pub default_size: Option<i64>,
    pub max_page: Option<i64>,
    pub max_size: Option<i64>,
    pub default_count_column: Option<String>,
}

impl PaginationShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shape with a page/size pair at the given paths
    pub fn page_size(page: &str, size: &str) -> Self {
        Self::new().page(page).size(size)
    }

    /// Shape with an offset/rows pair at the given paths
    pub fn offset_rows(offset: &str, rows: &str) -> Self {
        Self::new().offset(offset).rows(rows)
    }

    pub fn page(mut self, path: &str) -> Self {
        self.page = Some(path.to_string());
        self
    }

    pub fn size(mut self, path: &str) -> Self {
        self.size = Some(path.to_string());
        self
    }

    pub fn offset(mut self, path: &str) -> Self {
        self.offset = Some(path.to_string());
        self
    }

    pub fn rows(mut self, path: &str) -> Self {
        self.rows = Some(path.to_string());
        self
    }

    pub fn count_column(mut self, path: &str) -> Self {
        self.count_column = Some(path.to_string());
        self
    }

    pub fn with_default_page(mut self, page: i64) -> Self {
        self.default_page = Some(page);
        self
    }

    pub fn with_default_size(mut self, size: i64) -> Self {
        self.default_size = Some(size);
        self
    }

    pub fn with_max_page(mut self, page: i64) -> Self {
        self.max_page = Some(page);
        self
    }

    pub fn with_max_size(mut self, size: i64) -> Self {
        self.max_size = Some(size);
        self
    }

    pub fn with_default_count_column(mut self, column: &str) -> Self {
        self.default_count_column = Some(column.to_string());
        self
    }

    pub fn has_page_size(&self) -> bool {
        self.page.is_some() && self.size.is_some()
    }

    pub fn has_offset_rows(&self) -> bool {
        self.offset.is_some() && self.rows.is_some()
    }
}
