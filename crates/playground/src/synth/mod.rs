//! Mock response synthesis
//!
//! The boundary that turns parser and resolver output into a displayable
//! result. Whatever the snippets contain, synthesis produces a
//! [`MockResult`]; it never reports an error.

pub mod fallback;

pub use fallback::{acknowledge, FallbackFn, FallbackFnPtr, FallbackTable};

use serde::Serialize;

use crate::parse::{extract_return_expression, parse_signature, CallDescriptor, SignatureDescriptor};
use crate::{resolve, Bindings, Value};

/// Where a synthesized value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    /// The return expression resolved to a concrete value
    Resolved,
    /// A named fallback produced the value
    Fallback,
    /// The return expression was opaque and no fallback exists
    Symbolic,
    /// Nothing matched; the generic acknowledgement was used
    Acknowledged,
}

/// The synthesized outcome of one simulated call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockResult {
    /// The call as it would be logged, e.g. `add(a=1, b=2)`
    pub log_line: String,

    /// The simulated return value
    pub value: Value,

    /// How the value was obtained
    pub source: ResultSource,
}

/// Everything inferred for one call: the signature (if found), the
/// bound parameters, and the synthesized result.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    /// The matched server signature
    pub signature: Option<SignatureDescriptor>,

    /// Parameters bound from the call's arguments
    pub bindings: Bindings,

    /// The synthesized result
    pub result: MockResult,
}

/// Produces mock results, consulting a fallback table when the server
/// snippet does not say enough.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    fallbacks: FallbackTable,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesizer {
    /// Create a synthesizer with the built-in fallbacks.
    pub fn new() -> Self {
        Self {
            fallbacks: FallbackTable::with_builtins(),
        }
    }

    /// Create a synthesizer with a custom fallback table.
    pub fn with_fallbacks(fallbacks: FallbackTable) -> Self {
        Self { fallbacks }
    }

    /// The fallback table in use.
    pub fn fallbacks(&self) -> &FallbackTable {
        &self.fallbacks
    }

    /// Bind a call against the server snippet and synthesize its result.
    pub fn simulate(&self, call: &CallDescriptor, server_code: &str) -> Simulation {
        let signature = parse_signature(server_code, &call.procedure_name);
        let bindings = Bindings::from_call(signature.as_ref(), &call.arguments);
        let result = self.synthesize(&call.procedure_name, &bindings, server_code);
        Simulation {
            signature,
            bindings,
            result,
        }
    }

    /// Synthesize a result for `procedure_name` called with `bindings`.
    ///
    /// In order: a concrete value resolved from the procedure's return
    /// expression; the procedure's named fallback; the opaque expression
    /// text; the generic acknowledgement.
    pub fn synthesize(&self, procedure_name: &str, bindings: &Bindings, server_code: &str) -> MockResult {
        let expr = extract_return_expression(server_code, procedure_name);
        let resolved = resolve(expr.as_deref(), bindings);
        let fallback = self.fallbacks.get(procedure_name);

        let (value, source) = match (resolved, fallback) {
            (Some(value), _) if !value.is_symbol() => (value, ResultSource::Resolved),
            (_, Some(fallback)) => {
                tracing::debug!(procedure = procedure_name, "using named fallback");
                (fallback.call(bindings), ResultSource::Fallback)
            }
            (Some(symbol), None) => (symbol, ResultSource::Symbolic),
            (None, None) => {
                tracing::debug!(procedure = procedure_name, "no return expression or fallback, acknowledging");
                (acknowledge(procedure_name, bindings), ResultSource::Acknowledged)
            }
        };

        MockResult {
            log_line: log_line(procedure_name, bindings),
            value,
            source,
        }
    }
}

/// Synthesize with the built-in fallbacks.
///
/// # Example
///
/// ```
/// use prpc_playground::{synthesize, Bindings, Value};
///
/// let server = "def add(a: int, b: int) -> int:\n    return a + b";
/// let bound = Bindings::from(vec![("a", Value::Int(1)), ("b", Value::Int(2))]);
/// let result = synthesize("add", &bound, server);
/// assert_eq!(result.value, Value::Int(3));
/// assert_eq!(result.log_line, "add(a=1, b=2)");
/// ```
pub fn synthesize(procedure_name: &str, bindings: &Bindings, server_code: &str) -> MockResult {
    Synthesizer::new().synthesize(procedure_name, bindings, server_code)
}

/// Render `name(k=v, ...)`; unnamed positional bindings render bare.
fn log_line(procedure_name: &str, bindings: &Bindings) -> String {
    let args: Vec<String> = bindings
        .to_value()
        .as_map()
        .map(|map| {
            map.iter()
                .enumerate()
                .map(|(i, (name, value))| {
                    if *name == format!("arg{}", i) {
                        value.to_call_literal()
                    } else {
                        format!("{}={}", name, value.to_call_literal())
                    }
                })
                .collect()
        })
        .unwrap_or_default();
    format!("{}({})", procedure_name, args.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arguments;

    #[test]
    fn test_resolved_wins_over_fallback() {
        let server = "def get_user(id: int) -> User:\n    return User(id=id, name=\"Custom\")";
        let bound = Bindings::from(vec![("id", Value::Int(5))]);
        let result = synthesize("get_user", &bound, server);
        assert_eq!(result.source, ResultSource::Resolved);
        assert_eq!(
            result.value,
            Value::map([("id", Value::Int(5)), ("name", Value::string("Custom"))])
        );
    }

    #[test]
    fn test_symbolic_without_fallback() {
        let server = "def mul(a, b):\n    return a * b";
        let bound = Bindings::from(vec![("a", Value::Int(2))]);
        let result = synthesize("mul", &bound, server);
        assert_eq!(result.source, ResultSource::Symbolic);
        assert_eq!(result.value, Value::symbol("a * b"));
    }

    #[test]
    fn test_acknowledge_when_nothing_matches() {
        let result = synthesize("ping", &Bindings::new(), "");
        assert_eq!(result.source, ResultSource::Acknowledged);
        assert_eq!(result.log_line, "ping()");
    }

    #[test]
    fn test_fallback_when_server_missing() {
        let bound = Bindings::from(vec![("name", Value::string("Ada"))]);
        let result = synthesize("greet", &bound, "garbage ((");
        assert_eq!(result.source, ResultSource::Fallback);
        assert_eq!(result.value, Value::string("Hello Ada"));
    }

    #[test]
    fn test_simulate_binds_positional_through_signature() {
        let server = "def add(a: int, b: int) -> int:\n    return a + b";
        let call = CallDescriptor::new("add", vec![Value::Int(10), Value::Int(5)]);
        let sim = Synthesizer::new().simulate(&call, server);
        assert_eq!(sim.signature.unwrap().parameter_names, vec!["a", "b"]);
        assert_eq!(sim.result.value, Value::Int(15));
        assert_eq!(sim.result.log_line, "add(a=10, b=5)");
    }

    #[test]
    fn test_log_line_positional_without_signature() {
        let call = CallDescriptor::new("get_user", Arguments::Positional(vec![Value::Int(1)]));
        let sim = Synthesizer::new().simulate(&call, "");
        assert_eq!(sim.result.log_line, "get_user(1)");
    }

    #[test]
    fn test_custom_fallback_table() {
        let mut table = FallbackTable::new();
        table.register(FallbackFn::new("ping", |_| Value::string("pong")));
        let synth = Synthesizer::with_fallbacks(table);
        assert_eq!(synth.fallbacks().names(), vec!["ping"]);
        assert_eq!(Synthesizer::new().fallbacks().names(), vec!["add", "greet", "get_user"]);
        let result = synth.synthesize("ping", &Bindings::new(), "");
        assert_eq!(result.value, Value::string("pong"));
        assert_eq!(synth.synthesize("add", &Bindings::new(), "").source, ResultSource::Acknowledged);
    }
}
