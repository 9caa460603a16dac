use crate::dialect::Dialect;
use page_object::PaginationParam;
use serde_json::{json, Value};

/// Oracle before 12c: `ROWNUM` upper bound inside, row number lower bound outside.
#[derive(Debug, Clone, Copy, Default)]
pub struct Oracle;

impl Dialect for Oracle {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn render(&self, sql: &str, _offset: i64, _rows: i64) -> String {
        format!(
            "SELECT * FROM ( SELECT _TT.*, ROWNUM _ROW_NUM FROM ( {} ) _TT WHERE ROWNUM <= ? ) WHERE _ROW_NUM > ?",
            sql
        )
    }

    fn bind_params(&self, param: &PaginationParam) -> Vec<Value> {
        let offset = param.offset_or_zero();
        vec![
            json!(offset.saturating_add(param.rows_or_zero())),
            json!(offset),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rownum_range() {
        let param = PaginationParam::resolved(3, 10, 20, 10);
        let result = Oracle.paginate("SELECT * FROM emp WHERE dept = ?", &[json!(7)], &param);

        assert_eq!(
            result.sql,
            "SELECT * FROM ( SELECT _TT.*, ROWNUM _ROW_NUM FROM ( SELECT * FROM emp WHERE dept = ? ) _TT WHERE ROWNUM <= ? ) WHERE _ROW_NUM > ?"
        );
        assert_eq!(result.params, vec![json!(7), json!(30), json!(20)]);
    }
}
