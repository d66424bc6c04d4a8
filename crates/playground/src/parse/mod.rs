//! Snippet parsing
//!
//! Pattern-based extraction over free text. Nothing here builds an AST:
//! the client snippet yields the first `receiver.procedure(args)` call,
//! the server snippet yields a `def procedure(params)` header and the
//! expression after its first `return`.
//!
//! Every entry point is total. A miss is reported as `None` and the
//! caller decides what to fall back to.

mod args;
mod call;
pub(crate) mod scan;
mod signature;

pub use args::{parse_arguments, parse_scalar};
pub use call::{parse_call, CallDescriptor};
pub use signature::{extract_return_expression, parse_signature, SignatureDescriptor};

use crate::Value;

/// Recognise a literal token: a number, a quoted string, or one of the
/// JavaScript/Python keyword literals.
///
/// Returns `None` for anything else (identifiers, expressions).
pub fn parse_literal(token: &str) -> Option<Value> {
    let token = token.trim();
    if let Some(number) = Value::parse_number(token) {
        return Some(number);
    }
    if let Some(inner) = scan::unquote(token) {
        return Some(Value::string(inner));
    }
    match token {
        "true" | "True" => Some(Value::Bool(true)),
        "false" | "False" => Some(Value::Bool(false)),
        "null" | "None" | "undefined" => Some(Value::Null),
        _ => None,
    }
}
