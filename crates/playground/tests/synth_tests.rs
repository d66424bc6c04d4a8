//! Mock response synthesizer tests

use pretty_assertions::assert_eq;
use prpc_playground::*;

const ADD_SERVER: &str = "def add(a: int, b: int) -> int: return a + b";
const GET_USER_SERVER: &str = "def get_user(id: int) -> User: return User(id=id, name=\"pRPC User\")";
const GREET_SERVER: &str = "def greet(name: str) -> str: return f\"Hello {name}\"";

fn simulate(client: &str, server: &str) -> Simulation {
    let call = parse_call(client).expect("client call");
    Synthesizer::new().simulate(&call, server)
}

// ═══════════════════════════════════════════════════════════════════════
// End-to-end Inference
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_add_is_answered_by_fallback_not_resolver() {
    let sim = simulate("client.add({a: 1, b: 2})", ADD_SERVER);
    assert_eq!(sim.result.value, Value::Int(3));
    assert_eq!(sim.result.source, ResultSource::Fallback);
    assert_eq!(sim.result.log_line, "add(a=1, b=2)");
}

#[test]
fn test_get_user_resolves_constructor() {
    let sim = simulate("client.get_user({id: 5})", GET_USER_SERVER);
    assert_eq!(sim.result.source, ResultSource::Resolved);
    assert_eq!(
        sim.result.value.to_json(),
        serde_json::json!({"id": 5, "name": "pRPC User"})
    );
}

#[test]
fn test_greet_resolves_formatted_string() {
    let sim = simulate(r#"client.greet({name: "Ada"})"#, GREET_SERVER);
    assert_eq!(sim.result.source, ResultSource::Resolved);
    assert_eq!(sim.result.value, Value::string("Hello Ada"));
}

#[test]
fn test_greet_with_apostrophe_in_name() {
    let sim = simulate(r#"client.greet({ name: "O'Brien" })"#, GREET_SERVER);
    assert_eq!(sim.result.value, Value::string("Hello O'Brien"));
    assert_eq!(sim.result.log_line, r"greet(name='O\'Brien')");
}

#[test]
fn test_positional_call_binds_through_signature() {
    let sim = simulate(r#"client.greet("pRPC")"#, GREET_SERVER);
    assert_eq!(sim.bindings.get("name"), Some(&Value::string("pRPC")));
    assert_eq!(sim.result.value, Value::string("Hello pRPC"));
    assert_eq!(sim.result.log_line, "greet(name='pRPC')");
}

#[test]
fn test_unknown_procedure_without_return_is_acknowledged() {
    let sim = simulate("client.ping(1)", "def ping(n):\n    pass");
    assert_eq!(sim.result.source, ResultSource::Acknowledged);
    assert_eq!(
        sim.result.value.to_json(),
        serde_json::json!({"status": "ok", "procedure": "ping", "params": {"n": 1}})
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Absorbing Failures
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_call_still_synthesizes() {
    assert_eq!(parse_call("nothing to see"), None);
    let result = synthesize("add", &Bindings::new(), "not python at all");
    assert_eq!(result.value, Value::Int(0));
    assert_eq!(result.source, ResultSource::Fallback);
}

#[test]
fn test_garbage_inputs_always_produce_a_result() {
    let inputs = ["", "(((", "def", "return", "def x(:\n return {", "\u{0}\u{1}"];
    for server in inputs {
        for name in ["add", "greet", "get_user", "anything", ""] {
            let result = synthesize(name, &Bindings::new(), server);
            assert!(result.log_line.starts_with(name));
        }
    }
}

#[test]
fn test_empty_server_falls_back_per_procedure() {
    let bound = Bindings::from(vec![("arg0", Value::Int(4))]);
    assert_eq!(
        synthesize("get_user", &bound, "").value,
        Value::map([("id", Value::Int(4)), ("name", Value::string("pRPC User"))])
    );
    assert_eq!(synthesize("greet", &Bindings::new(), "").value, Value::string("Hello World"));
}
