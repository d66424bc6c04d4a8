//! Static fallback results for well-known procedures

use std::sync::Arc;

use indexmap::IndexMap;

use crate::{Bindings, Value};

/// Type alias for fallback function pointers
pub type FallbackFnPtr = Arc<dyn Fn(&Bindings) -> Value + Send + Sync>;

/// A hand-written stand-in for a procedure's server logic.
#[derive(Clone)]
pub struct FallbackFn {
    /// Procedure name this fallback answers for
    pub name: String,

    /// Produces a plausible result from the bound parameters
    pub func: FallbackFnPtr,
}

impl std::fmt::Debug for FallbackFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FallbackFn({})", self.name)
    }
}

impl FallbackFn {
    /// Create a fallback from a closure.
    pub fn new(
        name: impl Into<String>,
        func: impl Fn(&Bindings) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Run the fallback.
    pub fn call(&self, bindings: &Bindings) -> Value {
        (self.func)(bindings)
    }
}

/// Fallbacks keyed by procedure name.
#[derive(Debug, Clone, Default)]
pub struct FallbackTable {
    entries: IndexMap<String, FallbackFn>,
}

impl FallbackTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with the built-in fallbacks.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        table.load_builtins();
        table
    }

    /// Register `add`, `greet` and `get_user`.
    pub fn load_builtins(&mut self) {
        self.register(FallbackFn::new("add", fallback_add));
        self.register(FallbackFn::new("greet", fallback_greet));
        self.register(FallbackFn::new("get_user", fallback_get_user));
    }

    /// Register a fallback, replacing any with the same name.
    pub fn register(&mut self, fallback: FallbackFn) {
        self.entries.insert(fallback.name.clone(), fallback);
    }

    /// Look up a fallback by procedure name.
    pub fn get(&self, name: &str) -> Option<&FallbackFn> {
        self.entries.get(name)
    }

    /// Registered procedure names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

/// Generic result for procedures nobody wrote a fallback for.
pub fn acknowledge(procedure_name: &str, bindings: &Bindings) -> Value {
    Value::map([
        ("status", Value::string("ok")),
        ("procedure", Value::string(procedure_name)),
        ("params", bindings.to_value()),
    ])
}

// ═══════════════════════════════════════════════════════════════════════
// Built-in Fallback Implementations
// ═══════════════════════════════════════════════════════════════════════

/// Take the named parameters if either is bound, else the first values.
fn operands<'a>(bindings: &'a Bindings, names: &[&str]) -> Vec<Option<&'a Value>> {
    if names.iter().any(|name| bindings.has(name)) {
        names.iter().map(|name| bindings.get(name)).collect()
    } else {
        let mut values = bindings.values();
        names.iter().map(|_| values.next()).collect()
    }
}

fn fallback_add(bindings: &Bindings) -> Value {
    let mut ops = operands(bindings, &["a", "b"]).into_iter();
    let (a, b) = (ops.next().flatten(), ops.next().flatten());
    let number = |v: Option<&Value>| v.and_then(Value::to_number).unwrap_or(Value::Int(0));

    match (number(a), number(b)) {
        (Value::Int(x), Value::Int(y)) => x
            .checked_add(y)
            .map(Value::Int)
            .unwrap_or(Value::Float(x as f64 + y as f64)),
        (x, y) => Value::Float(x.as_f64().unwrap_or(0.0) + y.as_f64().unwrap_or(0.0)),
    }
}

fn fallback_greet(bindings: &Bindings) -> Value {
    let name = operands(bindings, &["name"])
        .into_iter()
        .flatten()
        .find(|v| !v.is_null())
        .map(Value::to_string)
        .unwrap_or_else(|| "World".to_string());
    Value::string(format!("Hello {}", name))
}

fn fallback_get_user(bindings: &Bindings) -> Value {
    let id = operands(bindings, &["id"])
        .into_iter()
        .flatten()
        .next()
        .cloned()
        .unwrap_or(Value::Int(1));
    Value::map([("id", id), ("name", Value::string("pRPC User"))])
}
