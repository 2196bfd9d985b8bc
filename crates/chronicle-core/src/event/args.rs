// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The restricted argument domain attached to trace events.
//!
//! Event arguments are a closed set of scalar values rather than arbitrary
//! object graphs: anything a viewer cannot render as a plain value is
//! rejected at the API boundary instead of being serialized blindly.

use crate::event::error::TraceError;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A single argument value: one of the four scalar kinds a trace viewer can
/// render.
///
/// Construction from Rust scalars is infallible via the `From` impls; the
/// `TryFrom<serde_json::Value>` conversion is the runtime face of the same
/// boundary and rejects arrays, objects, and null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// A UTF-8 string.
    String(String),
    /// A signed 64-bit integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
    /// A boolean.
    Bool(bool),
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::String(value.to_owned())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::String(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Integer(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Integer(value as i64)
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        ArgValue::Integer(value as i64)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Float(value)
    }
}

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        ArgValue::Float(value as f64)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl TryFrom<serde_json::Value> for ArgValue {
    type Error = TraceError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(s) => Ok(ArgValue::String(s)),
            serde_json::Value::Bool(b) => Ok(ArgValue::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(ArgValue::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(ArgValue::Float(f))
                } else {
                    Err(TraceError::UnsupportedArgument(format!(
                        "number out of range: {n}"
                    )))
                }
            }
            other => Err(TraceError::UnsupportedArgument(format!(
                "expected a scalar, got {other}"
            ))),
        }
    }
}

/// An insertion-ordered map of argument names to scalar values.
///
/// Inserting an existing key replaces its value in place, preserving the
/// original position. Serializes as a JSON object in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arguments {
    entries: Vec<(String, ArgValue)>,
}

impl Arguments {
    /// Creates an empty argument map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value under `key`, replacing any existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ArgValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<ArgValue>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut arguments = Arguments::new();
        for (key, value) in iter {
            arguments.insert(key, value);
        }
        arguments
    }
}

impl Serialize for Arguments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut args = Arguments::new();
        args.insert("b", 1i64);
        args.insert("a", 2i64);
        args.insert("c", 3i64);

        let keys: Vec<&str> = args.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut args = Arguments::new();
        args.insert("x", 1i64);
        args.insert("y", 2i64);
        args.insert("x", 10i64);

        assert_eq!(args.len(), 2);
        assert_eq!(args.get("x"), Some(&ArgValue::Integer(10)));

        // Replacement keeps the original position.
        let keys: Vec<&str> = args.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["x", "y"]);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let args: Arguments = [("value", 7i64)].into_iter().collect();
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(json, r#"{"value":7}"#);

        let mut mixed = Arguments::new();
        mixed.insert("s", "text");
        mixed.insert("i", -3i64);
        mixed.insert("f", 0.5f64);
        mixed.insert("b", true);
        let json = serde_json::to_string(&mixed).unwrap();
        assert_eq!(json, r#"{"s":"text","i":-3,"f":0.5,"b":true}"#);
    }

    #[test]
    fn test_json_scalars_convert() {
        assert_eq!(
            ArgValue::try_from(serde_json::json!("hi")).unwrap(),
            ArgValue::String("hi".to_owned())
        );
        assert_eq!(
            ArgValue::try_from(serde_json::json!(12)).unwrap(),
            ArgValue::Integer(12)
        );
        assert_eq!(
            ArgValue::try_from(serde_json::json!(1.25)).unwrap(),
            ArgValue::Float(1.25)
        );
        assert_eq!(
            ArgValue::try_from(serde_json::json!(false)).unwrap(),
            ArgValue::Bool(false)
        );
    }

    #[test]
    fn test_json_composites_rejected() {
        for value in [
            serde_json::json!(null),
            serde_json::json!([1, 2]),
            serde_json::json!({"k": "v"}),
        ] {
            let result = ArgValue::try_from(value);
            assert!(matches!(
                result,
                Err(TraceError::UnsupportedArgument(_))
            ));
        }
    }
}
