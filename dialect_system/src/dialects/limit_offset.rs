use crate::dialect::Dialect;
use page_object::PaginationParam;
use serde_json::{json, Value};

/// PostgreSQL, SQLite, H2 and HSQLDB: `LIMIT rows OFFSET offset`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LimitOffset;

impl Dialect for LimitOffset {
    fn name(&self) -> &'static str {
        "limit_offset"
    }

    fn render(&self, sql: &str, _offset: i64, _rows: i64) -> String {
        format!("{} LIMIT ? OFFSET ?", sql)
    }

    fn bind_params(&self, param: &PaginationParam) -> Vec<Value> {
        vec![json!(param.rows_or_zero()), json!(param.offset_or_zero())]
    }
}
