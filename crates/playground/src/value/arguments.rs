//! Call arguments: positional or named, never both

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Value;

/// Arguments of an inferred call.
///
/// Positional when parsed from a bare comma list, named when parsed from a
/// single object-literal argument. Serializes as a JSON array or object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arguments {
    /// `client.add(1, 2)`
    Positional(Vec<Value>),

    /// `client.add({ a: 1, b: 2 })`
    Named(IndexMap<String, Value>),
}

impl Default for Arguments {
    fn default() -> Self {
        Arguments::Positional(Vec::new())
    }
}

impl Arguments {
    /// Build named arguments from `(name, value)` pairs.
    pub fn named<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Arguments::Named(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        match self {
            Arguments::Positional(items) => items.len(),
            Arguments::Named(map) => map.len(),
        }
    }

    /// Check if there are no arguments
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if arguments are named
    pub fn is_named(&self) -> bool {
        matches!(self, Arguments::Named(_))
    }

    /// Render as the inside of a call: `1, 2` or `a=1, b='x'`.
    pub fn to_call_literal(&self) -> String {
        let parts: Vec<String> = match self {
            Arguments::Positional(items) => items.iter().map(Value::to_call_literal).collect(),
            Arguments::Named(map) => map
                .iter()
                .map(|(k, v)| format!("{}={}", k, v.to_call_literal()))
                .collect(),
        };
        parts.join(", ")
    }
}

impl From<Vec<Value>> for Arguments {
    fn from(items: Vec<Value>) -> Self {
        Arguments::Positional(items)
    }
}

impl From<IndexMap<String, Value>> for Arguments {
    fn from(map: IndexMap<String, Value>) -> Self {
        Arguments::Named(map)
    }
}
