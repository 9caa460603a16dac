//! Parsing utilities for pagination attributes
//!
//! This module handles the parsing of the struct-level `#[pagination(...)]`
//! attribute, the `#[page]`, `#[size]`, `#[offset]`, `#[rows]` and
//! `#[count_column]` field markers, and the serde renames that decide the
//! serialized path of each marked field.

use syn::{
    meta::ParseNestedMeta, Attribute, Data, Error, Fields, LitInt, LitStr, Meta, Result, Token,
};

/// Field markers recognized on struct fields
pub const FIELD_MARKERS: &[&str] = &["page", "size", "offset", "rows", "count_column"];

/// Bounds declared with `#[pagination(...)]`
#[derive(Debug, Default)]
pub struct PaginationInfo {
    pub default_page: Option<i64>,
    pub default_size: Option<i64>,
    pub max_page: Option<i64>,
    pub max_size: Option<i64>,
    pub count_column: Option<String>,
    pub rename_all: Option<String>,
}

/// Serialized paths of the marked fields
#[derive(Debug, Default)]
pub struct FieldInfo {
    pub page: Option<String>,
    pub size: Option<String>,
    pub offset: Option<String>,
    pub rows: Option<String>,
    pub count_column: Option<String>,
}

impl FieldInfo {
    fn slot(&mut self, marker: &str) -> Option<&mut Option<String>> {
        match marker {
            "page" => Some(&mut self.page),
            "size" => Some(&mut self.size),
            "offset" => Some(&mut self.offset),
            "rows" => Some(&mut self.rows),
            "count_column" => Some(&mut self.count_column),
            _ => None,
        }
    }

    pub fn has_page_size(&self) -> bool {
        self.page.is_some() && self.size.is_some()
    }

    pub fn has_offset_rows(&self) -> bool {
        self.offset.is_some() && self.rows.is_some()
    }
}

pub fn parse_struct_attributes(attrs: &[Attribute]) -> Result<PaginationInfo> {
    let mut info = PaginationInfo::default();

    for attr in attrs {
        if attr.path().is_ident("pagination") {
            attr.parse_nested_meta(|meta| {
                let key = meta
                    .path
                    .get_ident()
                    .map(|i| i.to_string())
                    .unwrap_or_default();

                match key.as_str() {
                    "default_page" => info.default_page = Some(parse_int(&meta)?),
                    "default_size" => info.default_size = Some(parse_int(&meta)?),
                    "max_page" => info.max_page = Some(parse_int(&meta)?),
                    "max_size" => info.max_size = Some(parse_int(&meta)?),
                    "count_column" => {
                        let column: LitStr = meta.value()?.parse()?;
                        if column.value().trim().is_empty() {
                            return Err(meta.error("count_column cannot be empty"));
                        }
                        info.count_column = Some(column.value());
                    }
                    _ => {
                        return Err(meta.error(
                            "unknown pagination option: expected default_page, default_size, max_page, max_size or count_column",
                        ))
                    }
                }
                Ok(())
            })?;
        } else if attr.path().is_ident("serde") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    if let Some(style) = serialize_name(&meta)? {
                        info.rename_all = Some(style);
                    }
                    Ok(())
                } else {
                    skip_meta(&meta)
                }
            })?;
        }
    }

    Ok(info)
}

pub fn parse_field_attributes(data: &Data, info: &PaginationInfo) -> Result<FieldInfo> {
    let fields = match data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(Error::new(
                    proc_macro2::Span::call_site(),
                    "Pageable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                proc_macro2::Span::call_site(),
                "Pageable can only be derived for structs",
            ))
        }
    };

    let mut field_info = FieldInfo::default();

    for field in fields {
        let Some(ident) = &field.ident else {
            continue;
        };
        let rust_name = ident.to_string();
        let rust_name = rust_name.strip_prefix("r#").unwrap_or(&rust_name);
        let serde = parse_serde_field(&field.attrs)?;
        let serialized = match serde.rename {
            Some(name) => name,
            None => renamed_by_style(rust_name, info.rename_all.as_deref())?,
        };

        for attr in &field.attrs {
            let Some(marker) = FIELD_MARKERS.iter().find(|m| attr.path().is_ident(m)) else {
                continue;
            };

            if serde.skipped {
                return Err(Error::new_spanned(
                    attr,
                    format!("#[{}] field is skipped during serialization", marker),
                ));
            }

            if !matches!(attr.meta, Meta::Path(_)) {
                return Err(Error::new_spanned(
                    attr,
                    format!("#[{}] does not take arguments", marker),
                ));
            }

            if let Some(slot) = field_info.slot(marker) {
                if slot.is_some() {
                    return Err(Error::new_spanned(
                        attr,
                        format!("duplicate #[{}] field", marker),
                    ));
                }
                *slot = Some(serialized.clone());
            }
        }
    }

    if !field_info.has_page_size() && !field_info.has_offset_rows() {
        return Err(Error::new(
            proc_macro2::Span::call_site(),
            "Pageable requires #[page] and #[size] fields, or #[offset] and #[rows] fields",
        ));
    }

    Ok(field_info)
}

/// Serde options that decide whether and under which name a field serializes
#[derive(Debug, Default)]
struct SerdeField {
    rename: Option<String>,
    skipped: bool,
}

fn parse_serde_field(attrs: &[Attribute]) -> Result<SerdeField> {
    let mut field = SerdeField::default();

    for attr in attrs {
        if attr.path().is_ident("serde") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if let Some(name) = serialize_name(&meta)? {
                        field.rename = Some(name);
                    }
                    Ok(())
                } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
                    field.skipped = true;
                    skip_meta(&meta)
                } else {
                    skip_meta(&meta)
                }
            })?;
        }
    }

    Ok(field)
}

/// Value of `key = "..."` or the `serialize` half of `key(serialize = "...", deserialize = "...")`
fn serialize_name(meta: &ParseNestedMeta) -> Result<Option<String>> {
    if meta.input.peek(Token![=]) {
        let name: LitStr = meta.value()?.parse()?;
        return Ok(Some(name.value()));
    }

    let mut name = None;
    if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|nested| {
            let value: LitStr = nested.value()?.parse()?;
            if nested.path.is_ident("serialize") {
                name = Some(value.value());
            }
            Ok(())
        })?;
    }
    Ok(name)
}

/// Name the field serializes under when it carries no explicit rename
fn renamed_by_style(rust_name: &str, rename_all: Option<&str>) -> Result<String> {
    match rename_all {
        Some(style) => apply_rename_all(rust_name, style).ok_or_else(|| {
            Error::new(
                proc_macro2::Span::call_site(),
                format!("unsupported serde rename_all style '{}'", style),
            )
        }),
        None => Ok(rust_name.to_string()),
    }
}

/// Consume a serde option we do not interpret, e.g. `default`, `skip = "..."` or `with(...)`
fn skip_meta(meta: &ParseNestedMeta) -> Result<()> {
    if meta.input.peek(Token![=]) {
        let _: syn::Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|nested| skip_meta(&nested))?;
    }
    Ok(())
}

fn parse_int(meta: &ParseNestedMeta) -> Result<i64> {
    let lit: LitInt = meta.value()?.parse()?;
    lit.base10_parse::<i64>()
}

/// Convert a snake_case field name using a serde `rename_all` style
fn apply_rename_all(name: &str, style: &str) -> Option<String> {
    let words: Vec<&str> = name.split('_').filter(|w| !w.is_empty()).collect();
    let capitalize = |word: &str| {
        let mut chars = word.chars();
        chars
            .next()
            .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
            .unwrap_or_default()
    };

    let converted = match style {
        "lowercase" => name.to_ascii_lowercase(),
        "UPPERCASE" => name.to_ascii_uppercase(),
        "snake_case" => name.to_string(),
        "SCREAMING_SNAKE_CASE" => name.to_ascii_uppercase(),
        "kebab-case" => words.join("-"),
        "SCREAMING-KEBAB-CASE" => words.join("-").to_ascii_uppercase(),
        "PascalCase" => words.iter().map(|w| capitalize(w)).collect(),
        "camelCase" => words
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w.to_string() } else { capitalize(w) })
            .collect(),
        _ => return None,
    };

    Some(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{parse_quote, DeriveInput};

    fn parse(input: DeriveInput) -> Result<(PaginationInfo, FieldInfo)> {
        let info = parse_struct_attributes(&input.attrs)?;
        let fields = parse_field_attributes(&input.data, &info)?;
        Ok((info, fields))
    }

    #[test]
    fn test_parses_markers_and_bounds() {
        let input: DeriveInput = parse_quote! {
            #[pagination(default_size = 20, max_size = 100, count_column = "id")]
            struct Query {
                #[page]
                page: Option<i64>,
                #[size]
                size: Option<i64>,
                name: String,
            }
        };

        let (info, fields) = parse(input).unwrap();
        assert_eq!(info.default_size, Some(20));
        assert_eq!(info.max_size, Some(100));
        assert_eq!(info.default_page, None);
        assert_eq!(info.count_column.as_deref(), Some("id"));
        assert_eq!(fields.page.as_deref(), Some("page"));
        assert_eq!(fields.size.as_deref(), Some("size"));
        assert!(fields.offset.is_none());
    }

    #[test]
    fn test_serde_renames_decide_paths() {
        let input: DeriveInput = parse_quote! {
            #[serde(rename_all = "camelCase", deny_unknown_fields)]
            struct Query {
                #[offset]
                #[serde(default)]
                skip_rows: Option<i64>,
                #[rows]
                #[serde(rename = "take")]
                take_rows: Option<i64>,
                #[count_column]
                count_by: Option<String>,
            }
        };

        let (_, fields) = parse(input).unwrap();
        assert_eq!(fields.offset.as_deref(), Some("skipRows"));
        assert_eq!(fields.rows.as_deref(), Some("take"));
        assert_eq!(fields.count_column.as_deref(), Some("countBy"));
    }

    #[test]
    fn test_missing_pair_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Query {
                #[page]
                page: Option<i64>,
                #[rows]
                rows: Option<i64>,
            }
        };
        assert!(parse(input).is_err());
    }

    #[test]
    fn test_duplicate_marker_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Query {
                #[page]
                a: Option<i64>,
                #[page]
                b: Option<i64>,
                #[size]
                c: Option<i64>,
            }
        };
        assert!(parse(input).is_err());
    }

    #[test]
    fn test_unknown_option_and_tuple_struct_rejected() {
        let input: DeriveInput = parse_quote! {
            #[pagination(max_rows = 5)]
            struct Query {
                #[page]
                page: i64,
                #[size]
                size: i64,
            }
        };
        assert!(parse(input).is_err());

        let input: DeriveInput = parse_quote! {
            struct Query(i64, i64);
        };
        assert!(parse(input).is_err());
    }

    #[test]
    fn test_split_serde_renames() {
        let input: DeriveInput = parse_quote! {
            #[serde(rename_all(serialize = "camelCase", deserialize = "snake_case"))]
            struct Query {
                #[page]
                #[serde(rename(serialize = "pageNo", deserialize = "page_no"))]
                page: Option<i64>,
                #[size]
                #[serde(rename(deserialize = "limit"))]
                page_size: Option<i64>,
            }
        };

        let (info, fields) = parse(input).unwrap();
        assert_eq!(info.rename_all.as_deref(), Some("camelCase"));
        assert_eq!(fields.page.as_deref(), Some("pageNo"));
        assert_eq!(fields.size.as_deref(), Some("pageSize"));
    }

    #[test]
    fn test_marker_on_skipped_field_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Query {
                #[page]
                page: Option<i64>,
                #[size]
                #[serde(skip_serializing)]
                size: Option<i64>,
            }
        };
        assert!(parse(input).is_err());

        let input: DeriveInput = parse_quote! {
            struct Query {
                #[offset]
                #[serde(skip)]
                offset: Option<i64>,
                #[rows]
                rows: Option<i64>,
            }
        };
        assert!(parse(input).is_err());

        let input: DeriveInput = parse_quote! {
            struct Query {
                #[page]
                #[serde(skip_serializing_if = "Option::is_none")]
                page: Option<i64>,
                #[size]
                size: Option<i64>,
                #[serde(skip)]
                cursor: Option<String>,
            }
        };
        assert!(parse(input).is_ok());
    }

    #[test]
    fn test_rename_all_styles() {
        assert_eq!(apply_rename_all("page_size", "camelCase").as_deref(), Some("pageSize"));
        assert_eq!(apply_rename_all("page_size", "PascalCase").as_deref(), Some("PageSize"));
        assert_eq!(apply_rename_all("page_size", "kebab-case").as_deref(), Some("page-size"));
        assert_eq!(
            apply_rename_all("page_size", "SCREAMING_SNAKE_CASE").as_deref(),
            Some("PAGE_SIZE")
        );
        assert_eq!(apply_rename_all("page_size", "Train-Case"), None);
    }
}
