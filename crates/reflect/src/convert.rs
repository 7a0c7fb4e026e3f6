//! Conversion between [`Value`] and `serde_json::Value`.

use indexmap::IndexMap;

use crate::value::Value;

/// Extension trait for converting a [`Value`] reference into
/// `serde_json::Value` without an intermediate clone of the whole tree.
pub trait ValueJsonExt {
    /// Convert into a `serde_json::Value`.
    ///
    /// Decimals are rendered as strings to preserve precision; bytes are
    /// base64-encoded; non-finite floats become JSON null.
    fn to_json(&self) -> serde_json::Value;
}

impl ValueJsonExt for Value {
    fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Integer(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Decimal(d) => serde_json::Value::String(d.to_string()),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Bytes(b) => {
                use base64::Engine;
                let encoded = base64::engine::general_purpose::STANDARD.encode(b);
                serde_json::Value::String(encoded)
            }
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(ValueJsonExt::to_json).collect())
            }
            Value::Object(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                out.extend(map.iter().map(|(k, v)| (k.clone(), v.to_json())));
                serde_json::Value::Object(out)
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => {
                let mut out = IndexMap::with_capacity(map.len());
                out.extend(map.into_iter().map(|(k, v)| (k, Value::from(v))));
                Self::Object(out)
            }
        }
    }
}
