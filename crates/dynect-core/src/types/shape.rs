//! Response shaping shared by the read operations.

use crate::{DynectError, Result};
use serde_json::{Map, Value};

/// Key of the type-specific sub-object in record responses
pub const RDATA_KEY: &str = "rdata";

/// Flatten a response object so `rdata` fields sit beside the top-level ones.
///
/// Top-level fields other than `rdata` are copied first, then every field of
/// `rdata`. On a name collision the `rdata` value wins.
#[must_use]
pub fn flatten(data: &Map<String, Value>) -> Map<String, Value> {
    let mut flat: Map<String, Value> = data
        .iter()
        .filter(|(key, _)| key.as_str() != RDATA_KEY)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    if let Some(Value::Object(rdata)) = data.get(RDATA_KEY) {
        for (key, value) in rdata {
            flat.insert(key.clone(), value.clone());
        }
    }

    flat
}

/// Flatten an envelope payload, which must be an object.
pub fn flatten_value(data: &Value) -> Result<Map<String, Value>> {
    match data {
        Value::Object(map) => Ok(flatten(map)),
        other => Err(DynectError::Decode(format!(
            "expected an object payload, got {}",
            kind_of(other)
        ))),
    }
}

/// Reduce a resource reference to the identifier after `prefix`.
///
/// `/REST/ARecord/example.com/www.example.com/123/` with prefix
/// `/REST/ARecord/example.com/www.example.com/` becomes `123`.
#[must_use]
pub fn strip_reference(reference: &str, prefix: &str) -> String {
    let bare = reference.strip_prefix(prefix).unwrap_or(reference);
    bare.trim_end_matches('/').to_string()
}

/// Strip every reference in a list payload, keeping service order.
///
/// A null or empty payload yields an empty list.
pub fn strip_references(data: &Value, prefix: &str) -> Result<Vec<String>> {
    match data {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(|reference| strip_reference(reference, prefix))
                    .ok_or_else(|| {
                        DynectError::Decode(format!(
                            "expected a resource reference, got {}",
                            kind_of(item)
                        ))
                    })
            })
            .collect(),
        other => Err(DynectError::Decode(format!(
            "expected a list payload, got {}",
            kind_of(other)
        ))),
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
