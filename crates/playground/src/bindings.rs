//! Bound variables: parameter names zipped with call arguments

use indexmap::IndexMap;
use serde::Serialize;

use crate::parse::SignatureDescriptor;
use crate::{Arguments, Value};

/// Variables visible to a return expression.
///
/// Maps parameter names to the values the client passed, in parameter
/// order. Names without a binding are simply absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Bindings {
    vars: IndexMap<String, Value>,
}

impl Bindings {
    /// Create new empty bindings.
    pub fn new() -> Self {
        Self {
            vars: IndexMap::new(),
        }
    }

    /// Bind call arguments to a procedure's parameters.
    ///
    /// Named arguments pass straight through. Positional arguments are
    /// zipped with the signature's parameter names by index; without a
    /// signature they bind as `arg0`, `arg1`, ...
    pub fn from_call(signature: Option<&SignatureDescriptor>, arguments: &Arguments) -> Self {
        match (arguments, signature) {
            (Arguments::Named(map), _) => Self { vars: map.clone() },
            (Arguments::Positional(items), Some(sig)) => sig
                .parameter_names
                .iter()
                .cloned()
                .zip(items.iter().cloned())
                .collect(),
            (Arguments::Positional(items), None) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("arg{}", i), v.clone()))
                .collect(),
        }
    }

    /// Add a binding.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    /// Get a binding by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Check if a binding exists.
    pub fn has(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Iterate bound values in order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.vars.values()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if bindings are empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Convert into a map value.
    pub fn to_value(&self) -> Value {
        Value::Map(self.vars.clone())
    }
}

impl FromIterator<(String, Value)> for Bindings {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl<K: Into<String>> From<Vec<(K, Value)>> for Bindings {
    fn from(entries: Vec<(K, Value)>) -> Self {
        entries.into_iter().map(|(k, v)| (k.into(), v)).collect()
    }
}
