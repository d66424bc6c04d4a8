//! Object-literal form: `{"key": value, ...}`

use indexmap::IndexMap;

use super::{resolve_entry, split_entries, Resolve};
use crate::parse::scan::{find_closing, unquote};
use crate::{Bindings, Value};

/// A dict/object literal. Keys may be quoted or bare.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLiteralForm<'a> {
    /// `(raw key, raw value)` pairs in source order
    pub entries: Vec<(&'a str, &'a str)>,
}

impl<'a> ObjectLiteralForm<'a> {
    /// Recognise `{k: v, ...}` spanning the whole expression.
    pub fn recognize(expr: &'a str) -> Option<Self> {
        if !expr.starts_with('{') || find_closing(expr, 0)? != expr.len() - 1 {
            return None;
        }
        let entries = split_entries(&expr[1..expr.len() - 1], ':')?;
        Some(Self { entries })
    }
}

impl Resolve for ObjectLiteralForm<'_> {
    fn resolve(&self, bindings: &Bindings) -> Value {
        let fields: IndexMap<String, Value> = self
            .entries
            .iter()
            .map(|(key, raw)| {
                let key = unquote(key).unwrap_or(key);
                (key.to_string(), resolve_entry(raw, bindings))
            })
            .collect();
        Value::Map(fields)
    }
}
