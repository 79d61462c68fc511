//! Forgiving field decoders for provider payloads.
//!
//! Payload objects are read as `serde_json::Value` maps. Each field has an
//! ordered list of spellings (canonical snake_case first); the first spelling
//! whose value decodes wins, so conflicting spellings never fail a payload. A
//! field of the wrong shape is `None`, and absent and `null` are identical.

use serde_json::{Map, Value};
use tracing::warn;

use crate::payload::{MediaKind, RawMetric};

/// First value under `keys` that `decode` accepts.
pub(crate) fn pick<T>(
    fields: &Map<String, Value>,
    keys: &[&str],
    decode: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    keys.iter().filter_map(|key| fields.get(*key)).find_map(decode)
}

/// Number, or a string holding a number. Non-finite values are dropped.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

/// Bool, `"true"`/`"false"` in any case, or `0`/`1`.
pub(crate) fn as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        _ => None,
    }
}

/// String; numbers and bools are kept in their JSON spelling.
pub(crate) fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `"image"` / `"video"`; anything else is treated as not provided.
pub(crate) fn as_media_kind(value: &Value) -> Option<MediaKind> {
    match value {
        Value::String(s) => {
            let kind = MediaKind::parse(s);
            if kind.is_none() {
                warn!(media_kind = %s, "unrecognized media kind, falling back to path inference");
            }
            kind
        }
        _ => None,
    }
}

/// Array of metric objects. Entries that are not objects are skipped; any
/// other non-null value is not an array and is ignored.
pub(crate) fn as_metrics(value: &Value) -> Option<Vec<RawMetric>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return None,
        other => {
            warn!(found = kind_of(other), "metric_explanations is not an array, ignoring");
            return None;
        }
    };

    let mut metrics = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::Object(fields) => metrics.push(RawMetric::from_fields(fields)),
            other => warn!(index, found = kind_of(other), "skipping metric entry that is not an object"),
        }
    }
    Some(metrics)
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
