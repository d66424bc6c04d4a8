//! Constructor-call form: `Identifier(key=value, ...)`

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

use super::{resolve_entry, split_entries, Resolve};
use crate::parse::scan::find_closing;
use crate::{Bindings, Value};

/// A model constructed from keyword arguments, e.g. `User(id=id, name="x")`.
///
/// Only keyword arguments are recognised; a positional argument means
/// the expression is some other call and falls through.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorForm<'a> {
    /// The constructed type's name
    pub type_name: &'a str,

    /// `(key, raw value)` pairs in source order
    pub entries: Vec<(&'a str, &'a str)>,
}

impl<'a> ConstructorForm<'a> {
    /// Recognise `Name(k=v, ...)` spanning the whole expression.
    pub fn recognize(expr: &'a str) -> Option<Self> {
        let head = head_pattern().find(expr)?;
        let open = head.end() - 1;
        if find_closing(expr, open)? != expr.len() - 1 {
            return None;
        }

        let type_name = expr[..open].trim();
        let entries = split_entries(&expr[open + 1..expr.len() - 1], '=')?;
        Some(Self { type_name, entries })
    }
}

impl Resolve for ConstructorForm<'_> {
    fn resolve(&self, bindings: &Bindings) -> Value {
        let fields: IndexMap<String, Value> = self
            .entries
            .iter()
            .map(|(key, raw)| (key.to_string(), resolve_entry(raw, bindings)))
            .collect();
        Value::Map(fields)
    }
}

fn head_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][\w.]*\s*\(").expect("constructor pattern is valid")
    })
}
