//! Running prepared statements and assembling their results
//!
//! Query execution belongs to the caller: the count and data queries are
//! passed in as closures, and their errors are returned to the caller as-is.

use page_object::{Page, Paginated};
use serde_json::Value;

use crate::statement::PreparedPage;

impl PreparedPage {
    /// Run the count query, then the data query, and build the page.
    ///
    /// A statement that is not pageable runs only `data` against its
    /// original SQL, and the rows are wrapped without metadata.
    pub fn fetch_page<T, E, C, D>(&self, count: C, data: D) -> Result<Page<T>, E>
    where
        C: FnOnce(&str, &[Value]) -> Result<i64, E>,
        D: FnOnce(&str, &[Value]) -> Result<Vec<T>, E>,
    {
        let Some(count_query) = self.count.as_ref().filter(|_| self.pagination.is_pageable())
        else {
            debug_log!(statement = %self.statement_id, "Fetching unpaged rows");
            return Ok(Page::wrap(data(&self.sql, &self.params)?));
        };

        let total = count(&count_query.sql, &count_query.params)?;
        let rows = data(&self.sql, &self.params)?;
        debug_log!(
            statement = %self.statement_id,
            total,
            rows = rows.len(),
            "Fetched page"
        );

        Ok(self.assemble(rows, Some(total)).into())
    }

    /// Attach the resolved page and size, plus `total` when known, to `rows`
    pub fn assemble<T>(&self, rows: Vec<T>, total: Option<i64>) -> Paginated<T> {
        if !self.is_pageable() {
            return Paginated::unpaged(rows);
        }
        Paginated::with_metadata(rows, self.pagination.page, self.pagination.size, total)
    }
}
