//! Client call extraction

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::args::parse_arguments;
use super::scan::find_closing;
use crate::Arguments;

/// The procedure a client snippet calls, with its arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallDescriptor {
    /// Procedure name (never empty)
    pub procedure_name: String,

    /// Positional or named arguments
    #[serde(default)]
    pub arguments: Arguments,
}

impl CallDescriptor {
    /// Create a new call descriptor
    pub fn new(procedure_name: impl Into<String>, arguments: impl Into<Arguments>) -> Self {
        Self {
            procedure_name: procedure_name.into(),
            arguments: arguments.into(),
        }
    }
}

/// Extract the first `receiver.procedure(args)` call from client code.
///
/// The left identifier is taken to be the RPC client handle. Returns
/// `None` when the text contains no such call.
///
/// # Example
///
/// ```
/// use prpc_playground::{parse_call, Arguments, Value};
///
/// let call = parse_call("const r = await client.add(10, 5);").unwrap();
/// assert_eq!(call.procedure_name, "add");
/// assert_eq!(call.arguments, Arguments::Positional(vec![Value::Int(10), Value::Int(5)]));
/// ```
pub fn parse_call(client_code: &str) -> Option<CallDescriptor> {
    let Some(caps) = call_pattern().captures(client_code) else {
        tracing::debug!("no call pattern in client code");
        return None;
    };
    let whole = caps.get(0)?;
    let procedure_name = caps.get(2)?.as_str().to_string();

    let open = whole.end() - 1;
    let args_text = match find_closing(client_code, open) {
        Some(close) => &client_code[open + 1..close],
        None => {
            let rest = &client_code[open + 1..];
            rest.lines().next().unwrap_or("")
        }
    };

    tracing::trace!(
        receiver = caps.get(1).map(|m| m.as_str()),
        procedure = %procedure_name,
        args = args_text,
        "matched client call"
    );

    Some(CallDescriptor {
        procedure_name,
        arguments: parse_arguments(args_text),
    })
}

fn call_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([A-Za-z_$][\w$]*)\s*\.\s*([A-Za-z_$][\w$]*)\s*\(")
            .expect("call pattern is valid")
    })
}
