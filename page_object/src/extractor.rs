//! Extraction and clamping of pagination values
//!
//! Reads raw page/size or offset/rows values from a parameter object through a
//! `PaginationDescriptor`, substitutes defaults for absent values, clamps to the
//! configured maxima and derives the missing pair.

use crate::descriptor::{FieldPath, PaginationDescriptor};
use crate::errors::PaginationError;
use crate::param::PaginationParam;
use serde::Serialize;
use serde_json::Value;

/// Extract pagination values from any serializable parameter object
pub fn extract_from<P>(
    descriptor: &PaginationDescriptor,
    param: &P,
) -> Result<PaginationParam, PaginationError>
where
    P: Serialize + ?Sized,
{
    let value = serde_json::to_value(param)?;
    extract(descriptor, &value)
}

/// Extract pagination values from a JSON parameter object
pub fn extract(
    descriptor: &PaginationDescriptor,
    source: &Value,
) -> Result<PaginationParam, PaginationError> {
    let raw_page = read_number(descriptor.page_path(), source)?;
    let raw_size = read_number(descriptor.size_path(), source)?;
    let raw_offset = read_number(descriptor.offset_path(), source)?;
    let raw_rows = read_number(descriptor.rows_path(), source)?;

    let count_column = read_string(descriptor.count_column_path(), source)?
        .or_else(|| descriptor.default_count_column().map(str::to_string));

    let page_given = raw_page.is_some() || raw_size.is_some();
    let offset_given = raw_offset.is_some() || raw_rows.is_some();

    let param = if descriptor.has_page_size() && (page_given || !offset_given || !descriptor.has_offset_rows()) {
        from_page_size(descriptor, raw_page, raw_size)?
    } else if descriptor.has_offset_rows() {
        from_offset_rows(descriptor, raw_offset, raw_rows)?
    } else {
        return Err(PaginationError::configuration(
            descriptor.statement_id(),
            "descriptor carries no usable pagination pair",
        ));
    };

    tracing::debug!(
        statement = descriptor.statement_id(),
        pageable = param.pageable,
        page = ?param.page,
        size = ?param.size,
        offset = ?param.offset,
        rows = ?param.rows,
        "Resolved pagination parameters"
    );

    Ok(param.with_count_column(count_column))
}

fn from_page_size(
    descriptor: &PaginationDescriptor,
    raw_page: Option<i64>,
    raw_size: Option<i64>,
) -> Result<PaginationParam, PaginationError> {
    let page = raw_page.or_else(|| positive(descriptor.default_page()));
    let size = raw_size.or_else(|| positive(descriptor.default_size()));

    let (Some(page), Some(size)) = (page, size) else {
        return Ok(PaginationParam::new(page, size, None, None, None, false));
    };

    if size < 0 {
        return Err(PaginationError::invalid_parameter(
            "size",
            &format!("must not be negative, got {}", size),
        ));
    }

    let page = clamp(page.max(1), descriptor.max_page());
    let size = clamp(size, descriptor.max_size());
    let offset = (page - 1).checked_mul(size).ok_or_else(|| {
        PaginationError::invalid_parameter("offset", "page * size overflows")
    })?;

    Ok(PaginationParam::resolved(page, size, offset, size))
}

fn from_offset_rows(
    descriptor: &PaginationDescriptor,
    raw_offset: Option<i64>,
    raw_rows: Option<i64>,
) -> Result<PaginationParam, PaginationError> {
    let Some(rows) = raw_rows.or_else(|| positive(descriptor.default_size())) else {
        return Ok(PaginationParam::new(None, None, raw_offset, None, None, false));
    };

    let rows = clamp(rows, descriptor.max_size());
    if rows <= 0 {
        return Err(PaginationError::invalid_parameter(
            "rows",
            &format!("must be greater than 0 to derive the page, got {}", rows),
        ));
    }

    let offset = match raw_offset {
        Some(offset) => offset.max(0),
        None => positive(descriptor.default_page())
            .map(|page| (page - 1).saturating_mul(rows))
            .unwrap_or(0),
    };

    let mut page = (offset / rows).checked_add(1).ok_or_else(|| {
        PaginationError::invalid_parameter("page", "offset / rows overflows")
    })?;
    let mut offset = offset;
    let max_page = descriptor.max_page();
    if max_page > 0 && page > max_page {
        page = max_page;
        offset = (page - 1).saturating_mul(rows);
    }

    Ok(PaginationParam::resolved(page, rows, offset, rows))
}

/// Clamp to `max` when a positive maximum is configured
fn clamp(value: i64, max: i64) -> i64 {
    if max > 0 && value > max {
        max
    } else {
        value
    }
}

fn positive(value: i64) -> Option<i64> {
    (value > 0).then_some(value)
}

fn read_number(path: Option<&FieldPath>, source: &Value) -> Result<Option<i64>, PaginationError> {
    let Some(path) = path else {
        return Ok(None);
    };

    match path.lookup(source) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number.as_i64().map(Some).ok_or_else(|| {
            PaginationError::invalid_parameter(path.as_str(), &format!("{} is not an integer", number))
        }),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(Value::String(text)) => text.trim().parse::<i64>().map(Some).map_err(|_| {
            PaginationError::invalid_parameter(path.as_str(), &format!("'{}' is not an integer", text))
        }),
        Some(other) => Err(PaginationError::invalid_parameter(
            path.as_str(),
            &format!("expected an integer, got {}", other),
        )),
    }
}

fn read_string(path: Option<&FieldPath>, source: &Value) -> Result<Option<String>, PaginationError> {
    let Some(path) = path else {
        return Ok(None);
    };

    match path.lookup(source) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.trim().to_string())),
        Some(other) => Err(PaginationError::invalid_parameter(
            path.as_str(),
            &format!("expected a column name, got {}", other),
        )),
    }
}
