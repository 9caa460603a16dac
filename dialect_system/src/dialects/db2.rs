use crate::dialect::Dialect;
use page_object::PaginationParam;
use serde_json::{json, Value};

/// DB2: inclusive `ROWNUMBER() OVER()` range.
#[derive(Debug, Clone, Copy, Default)]
pub struct Db2;

impl Dialect for Db2 {
    fn name(&self) -> &'static str {
        "db2"
    }

    fn render(&self, sql: &str, _offset: i64, _rows: i64) -> String {
        format!(
            "SELECT * FROM ( SELECT _TT.*, ROWNUMBER() OVER() AS _ROW_NUM FROM ( {} ) AS _TT ) AS _TTT WHERE _ROW_NUM BETWEEN ? AND ?",
            sql
        )
    }

    fn bind_params(&self, param: &PaginationParam) -> Vec<Value> {
        let offset = param.offset_or_zero();
        vec![
            json!(offset.saturating_add(1)),
            json!(offset.saturating_add(param.rows_or_zero())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_range() {
        let param = PaginationParam::resolved(2, 10, 10, 10);
        let result = Db2.paginate("SELECT * FROM t", &[], &param);

        assert!(result.sql.starts_with("SELECT * FROM ( SELECT _TT.*, ROWNUMBER() OVER()"));
        assert!(result.sql.ends_with("WHERE _ROW_NUM BETWEEN ? AND ?"));
        assert_eq!(result.params, vec![json!(11), json!(20)]);
    }
}
