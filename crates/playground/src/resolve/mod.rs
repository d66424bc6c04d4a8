//! Return-expression resolution
//!
//! A return expression is classified into one of four structural forms,
//! tried in priority order. Each recognizer either claims the expression
//! or passes; the bare-literal form claims everything that is left, so
//! resolution never fails.

pub mod constructor;
pub mod fstring;
pub mod literal;
pub mod object;

pub use constructor::ConstructorForm;
pub use fstring::FormattedStringForm;
pub use literal::BareLiteralForm;
pub use object::ObjectLiteralForm;

use crate::parse::parse_literal;
use crate::parse::scan::{split_pair, split_top_level};
use crate::{Bindings, Value};

/// Trait for resolving a recognised expression form to a value.
///
/// Implementations are total: every form resolves to some value.
pub trait Resolve {
    /// Resolve against the procedure's bound variables.
    fn resolve(&self, bindings: &Bindings) -> Value;
}

/// The structural shape of a return expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnForm<'a> {
    /// `User(id=id, name="x")`
    Constructor(ConstructorForm<'a>),
    /// `{"id": id, "name": "x"}`
    ObjectLiteral(ObjectLiteralForm<'a>),
    /// `f"Hello {name}"`
    FormattedString(FormattedStringForm<'a>),
    /// `42`, `"x"`, `name`, or anything unrecognised
    BareLiteral(BareLiteralForm<'a>),
}

impl<'a> ReturnForm<'a> {
    /// Classify an expression, trying each form in priority order.
    pub fn recognize(expr: &'a str) -> Self {
        let expr = expr.trim();
        if let Some(form) = ConstructorForm::recognize(expr) {
            return ReturnForm::Constructor(form);
        }
        if let Some(form) = ObjectLiteralForm::recognize(expr) {
            return ReturnForm::ObjectLiteral(form);
        }
        if let Some(form) = FormattedStringForm::recognize(expr) {
            return ReturnForm::FormattedString(form);
        }
        ReturnForm::BareLiteral(BareLiteralForm::recognize(expr))
    }

    /// Human-readable name of the form.
    pub fn kind(&self) -> &'static str {
        match self {
            ReturnForm::Constructor(_) => "constructor call",
            ReturnForm::ObjectLiteral(_) => "object literal",
            ReturnForm::FormattedString(_) => "formatted string",
            ReturnForm::BareLiteral(_) => "bare literal",
        }
    }
}

impl Resolve for ReturnForm<'_> {
    fn resolve(&self, bindings: &Bindings) -> Value {
        match self {
            ReturnForm::Constructor(form) => form.resolve(bindings),
            ReturnForm::ObjectLiteral(form) => form.resolve(bindings),
            ReturnForm::FormattedString(form) => form.resolve(bindings),
            ReturnForm::BareLiteral(form) => form.resolve(bindings),
        }
    }
}

/// Resolve a return expression against bound variables.
///
/// Returns `None` only when there is no expression at all.
///
/// # Example
///
/// ```
/// use prpc_playground::{resolve, Bindings, Value};
///
/// let bindings = Bindings::from(vec![("name", Value::string("Ada"))]);
/// let value = resolve(Some(r#"f"Hello {name}""#), &bindings);
/// assert_eq!(value, Some(Value::string("Hello Ada")));
/// ```
pub fn resolve(return_expression: Option<&str>, bindings: &Bindings) -> Option<Value> {
    let expr = return_expression?;
    let form = ReturnForm::recognize(expr);
    tracing::trace!(expr, form = form.kind(), "resolving return expression");
    Some(form.resolve(bindings))
}

// ═══════════════════════════════════════════════════════════════════════
// Shared helpers for the map-producing forms
// ═══════════════════════════════════════════════════════════════════════

/// Split `a=1, b=2` (or `a: 1, b: 2`) into trimmed key/value pairs.
///
/// Returns `None` if any non-empty entry lacks the separator.
pub(crate) fn split_entries(inner: &str, sep: char) -> Option<Vec<(&str, &str)>> {
    split_top_level(inner, ',')
        .into_iter()
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| split_pair(entry, sep).map(|(k, v)| (k.trim(), v.trim())))
        .collect()
}

/// Resolve one value token inside a constructor call or object literal.
///
/// Literals become values, bound names take their bound value, and
/// anything else is kept as its literal text.
pub(crate) fn resolve_entry(token: &str, bindings: &Bindings) -> Value {
    if let Some(value) = parse_literal(token) {
        return value;
    }
    match bindings.get(token) {
        Some(value) => value.clone(),
        None => Value::string(token),
    }
}
