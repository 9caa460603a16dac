//! The engine-specific SQL pagination strategy
//!
//! Each dialect wraps or extends a base SQL string with its engine's native
//! pagination syntax and supplies the values for the placeholders it adds.
//! Dialects are stateless and never inspect the base SQL.
//!
//! Rendering is placeholder-only: offset and rows reach the query through
//! [`Dialect::bind_params`], never as literals, so the built-in dialects ignore
//! the numbers passed to [`Dialect::render`].

use page_object::PaginationParam;
use serde_json::Value;
use std::fmt::Debug;

/// Rewritten SQL together with its complete, ordered bind parameters
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedSql {
    pub sql: String,
    pub params: Vec<Value>,
}

/// SQL dialect trait for database-specific pagination syntax.
pub trait Dialect: Debug + Send + Sync {
    /// Short name used in logs (e.g. `informix`).
    fn name(&self) -> &'static str;

    /// Wrap `sql` so that only `rows` rows starting at `offset` are returned.
    fn render(&self, sql: &str, offset: i64, rows: i64) -> String;

    /// Values for the placeholders introduced by [`Dialect::render`], in placeholder order.
    fn bind_params(&self, param: &PaginationParam) -> Vec<Value>;

    /// How many of the introduced placeholders appear before the base SQL.
    fn leading_params(&self) -> usize {
        0
    }

    /// Count query over the base SQL (e.g. `SELECT COUNT(*) FROM ( ... ) _TT`).
    fn count_sql(&self, sql: &str, count_column: &str) -> String {
        format!("SELECT COUNT({}) FROM ( {} ) _TT", count_column, sql)
    }

    /// Render `sql` and splice the introduced parameters around the base SQL's own.
    fn paginate(&self, sql: &str, base_params: &[Value], param: &PaginationParam) -> PaginatedSql {
        let introduced = self.bind_params(param);
        let (leading, trailing) = introduced.split_at(self.leading_params().min(introduced.len()));

        let mut params = Vec::with_capacity(introduced.len() + base_params.len());
        params.extend_from_slice(leading);
        params.extend_from_slice(base_params);
        params.extend_from_slice(trailing);

        PaginatedSql {
            sql: self.render(sql, param.offset_or_zero(), param.rows_or_zero()),
            params,
        }
    }
}
