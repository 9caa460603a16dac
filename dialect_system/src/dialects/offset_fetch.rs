use crate::dialect::Dialect;
use page_object::PaginationParam;
use serde_json::{json, Value};

/// SQL:2008 row limiting: `OFFSET ? ROWS FETCH NEXT ? ROWS ONLY`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetFetch;

impl Dialect for OffsetFetch {
    fn name(&self) -> &'static str {
        "offset_fetch"
    }

    fn render(&self, sql: &str, _offset: i64, _rows: i64) -> String {
        format!("{} OFFSET ? ROWS FETCH NEXT ? ROWS ONLY", sql)
    }

    fn bind_params(&self, param: &PaginationParam) -> Vec<Value> {
        vec![json!(param.offset_or_zero()), json!(param.rows_or_zero())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_fetch() {
        let param = PaginationParam::resolved(4, 25, 75, 25);
        let result = OffsetFetch.paginate("SELECT * FROM t ORDER BY id", &[], &param);

        assert_eq!(
            result.sql,
            "SELECT * FROM t ORDER BY id OFFSET ? ROWS FETCH NEXT ? ROWS ONLY"
        );
        assert_eq!(result.params, vec![json!(75), json!(25)]);
    }
}
