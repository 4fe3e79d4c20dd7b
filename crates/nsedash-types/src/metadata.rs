//! Per-symbol metadata and keyword lookup.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Insertion-ordered key/value metadata for one symbol.
///
/// Values are scalars only: strings, numbers and booleans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataMap {
    entries: Map<String, Value>,
}

impl MetadataMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from a provider JSON object.
    ///
    /// Nested objects are flattened into dotted keys (`tradingPeriod.start`).
    /// Arrays and nulls are dropped. Anything other than an object yields an
    /// empty map.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let mut map = Self::new();
        if let Value::Object(object) = value {
            map.flatten_into("", object);
        }
        map
    }

    fn flatten_into(&mut self, prefix: &str, object: &Map<String, Value>) {
        for (key, value) in object {
            let key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match value {
                Value::Object(nested) => self.flatten_into(&key, nested),
                Value::Null | Value::Array(_) => {}
                scalar => {
                    self.entries.insert(key, scalar.clone());
                }
            }
        }
    }

    /// Inserts a scalar value, keeping the original position of an existing key.
    ///
    /// Non-scalar values are ignored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let value = value.into();
        if matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_)) {
            self.entries.insert(key.into(), value);
        }
    }

    /// Returns the value for an exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns a string value for an exact key.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Returns a numeric value for an exact key.
    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.entries.get(key).and_then(Value::as_f64)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Finds the first key containing `question` (case-insensitive).
    ///
    /// Keys are scanned in insertion order and the first match wins. The
    /// question is matched as typed, surrounding whitespace included. An
    /// empty question matches nothing.
    #[must_use]
    pub fn lookup(&self, question: &str) -> Option<(&str, &Value)> {
        let needle = question.to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.iter()
            .find(|(key, _)| key.to_lowercase().contains(&needle))
    }

    /// Answers a question as `"key: value"`, if any key matches.
    #[must_use]
    pub fn answer(&self, question: &str) -> Option<String> {
        self.lookup(question)
            .map(|(key, value)| format!("{key}: {}", display_value(value)))
    }
}

/// Renders a scalar for display, without quotes around strings.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
