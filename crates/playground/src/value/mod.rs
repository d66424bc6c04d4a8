//! Value representation for inferred arguments and results
//!
//! Every value the playground produces is JSON-compatible. The one
//! addition over plain JSON is [`Value::Symbol`], which carries raw
//! snippet text that could not be resolved to anything more concrete.

mod arguments;
mod display;
mod impls;
mod json;

pub use arguments::Arguments;

use indexmap::IndexMap;

/// A JSON-compatible value inferred from snippet text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Scalars
    // ═══════════════════════════════════════════════════════════════════
    /// `null` / Python `None`
    Null,

    /// `true` or `false`
    Bool(bool),

    /// Integral number
    Int(i64),

    /// Non-integral number
    Float(f64),

    /// Resolved string
    String(String),

    /// Unresolved token text, kept verbatim (e.g. `a + b`, `user_id`)
    Symbol(String),

    // ═══════════════════════════════════════════════════════════════════
    // Compound
    // ═══════════════════════════════════════════════════════════════════
    /// Ordered list
    List(Vec<Value>),

    /// String-keyed map in insertion order
    Map(IndexMap<String, Value>),
}
