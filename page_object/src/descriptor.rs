//! Per-statement pagination descriptors
//!
//! A descriptor is the immutable result of combining a statement's registered
//! `PaginationShape` with the bound `PaginationConfig`. Once built it is cached
//! for the lifetime of the resolver.

use crate::errors::PaginationError;
use crate::shape::PaginationShape;
use config::PaginationConfig;
use serde_json::Value;
use std::fmt;

/// Dotted attribute path into a parameter object, e.g. `paging.page`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    pub fn parse(path: &str) -> Result<Self, String> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err("path cannot be empty".to_string());
        }

        let segments: Vec<String> = trimmed.split('.').map(|s| s.trim().to_string()).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(format!("path '{}' contains an empty segment", trimmed));
        }

        Ok(Self {
            raw: trimmed.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Walk the path through objects (by key) and arrays (by index)
    pub fn lookup<'a>(&self, source: &'a Value) -> Option<&'a Value> {
        self.segments.iter().try_fold(source, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Where a statement's pagination values live, plus the bounds applied to them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationDescriptor {
    statement_id: String,
    page: Option<FieldPath>,
    size: Option<FieldPath>,
    offset: Option<FieldPath>,
    rows: Option<FieldPath>,
    count_column: Option<FieldPath>,
    default_page: i64,
    default_size: i64,
    max_page: i64,
    max_size: i64,
    default_count_column: Option<String>,
}

impl PaginationDescriptor {
    /// Build a descriptor; per-type overrides in the shape win over the configuration
    pub fn build(
        statement_id: &str,
        shape: &PaginationShape,
        config: &PaginationConfig,
    ) -> Result<Self, PaginationError> {
        if !shape.has_page_size() && !shape.has_offset_rows() {
            return Err(PaginationError::configuration(
                statement_id,
                "parameter type exposes neither a page/size pair nor an offset/rows pair",
            ));
        }

        let path = |raw: &Option<String>| -> Result<Option<FieldPath>, PaginationError> {
            raw.as_deref()
                .map(FieldPath::parse)
                .transpose()
                .map_err(|reason| PaginationError::configuration(statement_id, &reason))
        };

        Ok(Self {
            statement_id: statement_id.to_string(),
            page: path(&shape.page)?,
            size: path(&shape.size)?,
            offset: path(&shape.offset)?,
            rows: path(&shape.rows)?,
            count_column: path(&shape.count_column)?,
            default_page: shape.default_page.unwrap_or(config.default_page),
            default_size: shape.default_size.unwrap_or(config.default_size),
            max_page: shape.max_page.unwrap_or(config.max_page),
            max_size: shape.max_size.unwrap_or(config.max_size),
            default_count_column: shape
                .default_count_column
                .clone()
                .or_else(|| config.count_column.clone()),
        })
    }

    pub fn statement_id(&self) -> &str {
        &self.statement_id
    }

    pub fn page_path(&self) -> Option<&FieldPath> {
        self.page.as_ref()
    }

    pub fn size_path(&self) -> Option<&FieldPath> {
        self.size.as_ref()
    }

    pub fn offset_path(&self) -> Option<&FieldPath> {
        self.offset.as_ref()
    }

    pub fn rows_path(&self) -> Option<&FieldPath> {
        self.rows.as_ref()
    }

    pub fn count_column_path(&self) -> Option<&FieldPath> {
        self.count_column.as_ref()
    }

    pub fn default_page(&self) -> i64 {
        self.default_page
    }

    pub fn default_size(&self) -> i64 {
        self.default_size
    }

    pub fn max_page(&self) -> i64 {
        self.max_page
    }

    pub fn max_size(&self) -> i64 {
        self.max_size
    }

    pub fn default_count_column(&self) -> Option<&str> {
        self.default_count_column.as_deref()
    }

    pub fn has_page_size(&self) -> bool {
        self.page.is_some() && self.size.is_some()
    }

    pub fn has_offset_rows(&self) -> bool {
        self.offset.is_some() && self.rows.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_path_nested_lookup() {
        let path = FieldPath::parse("paging.page").unwrap();
        let source = json!({"paging": {"page": 3}});
        assert_eq!(path.lookup(&source), Some(&json!(3)));
        assert_eq!(path.as_str(), "paging.page");
    }

    #[test]
    fn test_field_path_array_index() {
        let path = FieldPath::parse("args.1").unwrap();
        let source = json!({"args": ["x", 25]});
        assert_eq!(path.lookup(&source), Some(&json!(25)));
    }

    #[test]
    fn test_field_path_missing() {
        let path = FieldPath::parse("paging.size").unwrap();
        assert_eq!(path.lookup(&json!({"paging": 5})), None);
        assert_eq!(path.lookup(&json!({})), None);
    }

    #[test]
    fn test_field_path_rejects_empty_segments() {
        assert!(FieldPath::parse("").is_err());
        assert!(FieldPath::parse("  ").is_err());
        assert!(FieldPath::parse("a..b").is_err());
        assert!(FieldPath::parse(".a").is_err());
    }

    #[test]
    fn test_build_uses_config_bounds() {
        let config = PaginationConfig::new(1, 20, 50, 100, Some("id".into()));
        let descriptor =
            PaginationDescriptor::build("users.query", &PaginationShape::page_size("page", "size"), &config)
                .unwrap();

        assert_eq!(descriptor.statement_id(), "users.query");
        assert_eq!(descriptor.default_page(), 1);
        assert_eq!(descriptor.default_size(), 20);
        assert_eq!(descriptor.max_page(), 50);
        assert_eq!(descriptor.max_size(), 100);
        assert_eq!(descriptor.default_count_column(), Some("id"));
        assert!(descriptor.has_page_size());
        assert!(!descriptor.has_offset_rows());
    }

    #[test]
    fn test_build_shape_overrides_win() {
        let shape = PaginationShape::offset_rows("offset", "rows")
            .with_default_size(5)
            .with_max_size(25)
            .with_default_count_column("uid");
        let descriptor =
            PaginationDescriptor::build("s", &shape, &PaginationConfig::default()).unwrap();

        assert_eq!(descriptor.default_size(), 5);
        assert_eq!(descriptor.max_size(), 25);
        assert_eq!(descriptor.default_page(), 1);
        assert_eq!(descriptor.default_count_column(), Some("uid"));
    }

    #[test]
    fn test_build_without_pair_is_configuration_error() {
        let shape = PaginationShape::new().page("page").rows("rows");
        let result = PaginationDescriptor::build("broken", &shape, &PaginationConfig::default());
        assert!(matches!(result, Err(PaginationError::ConfigurationError(_))));
    }

    #[test]
    fn test_build_with_blank_path_is_configuration_error() {
        let shape = PaginationShape::page_size("page", " ");
        let result = PaginationDescriptor::build("blank", &shape, &PaginationConfig::default());
        assert!(matches!(result, Err(PaginationError::ConfigurationError(_))));
    }
}
