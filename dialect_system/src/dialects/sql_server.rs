use crate::dialect::Dialect;
use page_object::PaginationParam;
use serde_json::{json, Value};

/// SQL Server before 2012: `TOP (rows)` over a `ROW_NUMBER()` numbered subquery.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServer;

impl Dialect for SqlServer {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn render(&self, sql: &str, _offset: i64, _rows: i64) -> String {
        format!(
            "SELECT TOP (?) * FROM ( SELECT ROW_NUMBER() OVER (ORDER BY CURRENT_TIMESTAMP) AS _ROW_NUM, _TT.* FROM ( {} ) _TT ) _TTT WHERE _ROW_NUM > ?",
            sql
        )
    }

    fn bind_params(&self, param: &PaginationParam) -> Vec<Value> {
        vec![json!(param.rows_or_zero()), json!(param.offset_or_zero())]
    }

    // TOP (?) precedes the base SQL, the row number bound follows it
    fn leading_params(&self) -> usize {
        1
    }
}
