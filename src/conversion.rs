//! Value conversion utilities for FIT decoding
//!
//! Maps decoder values onto [`FieldValue`] and builds column names, so the
//! table layer never depends on the decoder's own value type.

use crate::types::FieldValue;
use fitparser::Value;

/// Timestamp layout used for CSV cells (UTC, second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert a decoded FIT value to a table value
pub fn convert_value(value: &Value) -> FieldValue {
    match value {
        Value::Invalid => FieldValue::Null,
        Value::Timestamp(ts) => {
            FieldValue::Text(ts.naive_utc().format(TIMESTAMP_FORMAT).to_string())
        }
        Value::Byte(v) | Value::Enum(v) | Value::UInt8(v) | Value::UInt8z(v) => {
            FieldValue::Integer(*v as i64)
        }
        Value::SInt8(v) => FieldValue::Integer(*v as i64),
        Value::SInt16(v) => FieldValue::Integer(*v as i64),
        Value::UInt16(v) | Value::UInt16z(v) => FieldValue::Integer(*v as i64),
        Value::SInt32(v) => FieldValue::Integer(*v as i64),
        Value::UInt32(v) | Value::UInt32z(v) => FieldValue::Integer(*v as i64),
        Value::SInt64(v) => FieldValue::Integer(*v),
        Value::UInt64(v) | Value::UInt64z(v) => convert_u64(*v),
        Value::Float32(v) => FieldValue::Float(*v as f64),
        Value::Float64(v) => FieldValue::Float(*v),
        Value::String(s) => FieldValue::Text(s.clone()),
        Value::Array(values) => FieldValue::List(values.iter().map(convert_value).collect()),
        #[allow(unreachable_patterns)]
        other => FieldValue::Text(other.to_string()),
    }
}

/// u64 values beyond i64 range keep their exact digits as text
fn convert_u64(value: u64) -> FieldValue {
    match i64::try_from(value) {
        Ok(v) => FieldValue::Integer(v),
        Err(_) => FieldValue::Text(value.to_string()),
    }
}

/// Column name for a field, optionally suffixed with its units
///
/// Produces headers such as `speed (m/s)` when `include_units` is set and the
/// decoder reported units for the field.
pub fn column_name(name: &str, units: &str, include_units: bool) -> String {
    if include_units && !units.is_empty() {
        format!("{name} ({units})")
    } else {
        name.to_string()
    }
}
