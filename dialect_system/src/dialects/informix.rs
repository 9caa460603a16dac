use crate::dialect::Dialect;
use page_object::PaginationParam;
use serde_json::{json, Value};

/// Informix dialect: `SKIP`/`FIRST` projection over a subquery.
#[derive(Debug, Clone, Copy, Default)]
pub struct Informix;

impl Dialect for Informix {
    fn name(&self) -> &'static str {
        "informix"
    }

    fn render(&self, sql: &str, _offset: i64, _rows: i64) -> String {
        format!("SELECT  SKIP ?  FIRST ?  * FROM ( {} ) _TT ", sql)
    }

    fn bind_params(&self, param: &PaginationParam) -> Vec<Value> {
        vec![json!(param.offset_or_zero()), json!(param.rows_or_zero())]
    }

    fn leading_params(&self) -> usize {
        2
    }
}
