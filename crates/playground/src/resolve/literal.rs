//! Bare-literal form: the catch-all

use super::Resolve;
use crate::parse::parse_literal;
use crate::{Bindings, Value};

/// A literal, a bound identifier, or opaque text.
#[derive(Debug, Clone, PartialEq)]
pub struct BareLiteralForm<'a> {
    /// The expression text
    pub text: &'a str,
}

impl<'a> BareLiteralForm<'a> {
    /// Every expression is a bare literal; this never declines.
    pub fn recognize(expr: &'a str) -> Self {
        Self { text: expr.trim() }
    }
}

impl Resolve for BareLiteralForm<'_> {
    fn resolve(&self, bindings: &Bindings) -> Value {
        if self.text.is_empty() {
            return Value::Null;
        }
        if let Some(value) = parse_literal(self.text) {
            return value;
        }
        match bindings.get(self.text) {
            Some(value) => value.clone(),
            None => Value::symbol(self.text),
        }
    }
}
