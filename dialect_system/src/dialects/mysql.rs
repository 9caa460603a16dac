use crate::dialect::Dialect;
use page_object::PaginationParam;
use serde_json::{json, Value};

/// MySQL and MariaDB: `LIMIT offset, rows`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn render(&self, sql: &str, _offset: i64, _rows: i64) -> String {
        format!("{} LIMIT ?, ?", sql)
    }

    fn bind_params(&self, param: &PaginationParam) -> Vec<Value> {
        vec![json!(param.offset_or_zero()), json!(param.rows_or_zero())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_and_params() {
        let param = PaginationParam::resolved(3, 20, 40, 20);
        let result = MySql.paginate("SELECT id FROM users WHERE age > ?", &[json!(18)], &param);

        assert_eq!(result.sql, "SELECT id FROM users WHERE age > ? LIMIT ?, ?");
        assert_eq!(result.params, vec![json!(18), json!(40), json!(20)]);
    }

    #[test]
    fn test_count_sql() {
        assert_eq!(
            MySql.count_sql("SELECT id FROM users", "*"),
            "SELECT COUNT(*) FROM ( SELECT id FROM users ) _TT"
        );
    }
}
