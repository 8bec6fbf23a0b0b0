//! Caller-supplied error payloads

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Data describing an error condition, as supplied by the caller
///
/// Serialized untagged: a `Text` payload is a JSON string, a `Structured`
/// payload a JSON object, and `Other` whatever value it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    /// Human-readable message
    Text(String),
    /// JSON object, surfacing its `message` field when that is a string
    Structured(Map<String, Value>),
    /// Any other JSON value (null, bool, number, array)
    ///
    /// A string or object held here is read the same way as `Text` or
    /// `Structured`.
    Other(Value),
}

impl ResponsePayload {
    /// String carried by the payload
    ///
    /// Covers `Text` and an `Other` holding a JSON string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Other(Value::String(text)) => Some(text),
            _ => None,
        }
    }

    /// JSON object carried by the payload
    ///
    /// Covers `Structured` and an `Other` holding a JSON object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Structured(map) | Self::Other(Value::Object(map)) => Some(map),
            _ => None,
        }
    }

    /// Text carried by the payload, if any
    ///
    /// Returns the string itself for a string payload, and the `message`
    /// field for an object payload when that field is a string.
    #[must_use]
    pub fn message_text(&self) -> Option<&str> {
        self.as_text().or_else(|| {
            self.as_object()
                .and_then(|map| map.get("message"))
                .and_then(Value::as_str)
        })
    }

    /// JSON truthiness of the payload
    ///
    /// Empty strings, `null`, `false` and zero are falsy. Objects and
    /// arrays are truthy even when empty.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Structured(_) => false,
            Self::Other(value) => match value {
                Value::Null => true,
                Value::Bool(b) => !b,
                Value::Number(n) => n.as_f64().is_none_or(|f| f == 0.0),
                Value::String(s) => s.is_empty(),
                Value::Array(_) | Value::Object(_) => false,
            },
        }
    }

    /// Whether the payload is returned unchanged as a response body
    ///
    /// Only JSON objects qualify; arrays do not.
    #[must_use]
    pub fn is_passthrough(&self) -> bool {
        self.as_object().is_some()
    }
}

impl From<Value> for ResponsePayload {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Object(map) => Self::Structured(map),
            other => Self::Other(other),
        }
    }
}

impl From<ResponsePayload> for Value {
    fn from(payload: ResponsePayload) -> Self {
        match payload {
            ResponsePayload::Text(text) => Value::String(text),
            ResponsePayload::Structured(map) => Value::Object(map),
            ResponsePayload::Other(value) => value,
        }
    }
}

impl From<Map<String, Value>> for ResponsePayload {
    fn from(map: Map<String, Value>) -> Self {
        Self::Structured(map)
    }
}

impl From<String> for ResponsePayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for ResponsePayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
