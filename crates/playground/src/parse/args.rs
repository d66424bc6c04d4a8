//! Argument list parsing for client call snippets

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

use super::parse_literal;
use super::scan::{split_top_level, Unquoted};
use crate::{Arguments, Value};

/// Parse the text between a call's parentheses.
///
/// Rules, in order:
/// 1. `{ ... }` is an object literal and becomes named arguments.
/// 2. Anything else is split on top-level commas into positional values.
/// 3. An object literal that does not parse is kept whole as a single
///    symbolic positional argument.
pub fn parse_arguments(text: &str) -> Arguments {
    let text = text.trim();

    if text.starts_with('{') && text.ends_with('}') {
        return match parse_object_literal(text) {
            Some(map) => Arguments::Named(map),
            None => {
                tracing::debug!(args = text, "object literal did not parse, keeping raw text");
                Arguments::Positional(vec![Value::symbol(text)])
            }
        };
    }

    if text.is_empty() {
        return Arguments::Positional(Vec::new());
    }

    Arguments::Positional(
        split_top_level(text, ',')
            .into_iter()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(parse_scalar)
            .collect(),
    )
}

/// Parse one positional argument token.
///
/// Literals become values; `[...]`/`{...}` are read as JavaScript-style
/// literals; anything else is kept as a symbol.
pub fn parse_scalar(token: &str) -> Value {
    let token = token.trim();
    if let Some(value) = parse_literal(token) {
        return value;
    }
    if token.starts_with(['[', '{']) {
        if let Some(value) = parse_js_literal(token) {
            return value;
        }
    }
    Value::symbol(token)
}

fn parse_object_literal(text: &str) -> Option<IndexMap<String, Value>> {
    match parse_js_literal(text)? {
        Value::Map(map) => Some(map),
        _ => None,
    }
}

/// Read a JavaScript object/array literal by rewriting it into JSON:
/// bare keys get quoted, single-quoted strings are re-delimited with
/// double quotes and trailing commas are dropped. String contents are
/// never rewritten.
fn parse_js_literal(text: &str) -> Option<Value> {
    let json = js_to_json(text);
    serde_json::from_str::<serde_json::Value>(&json)
        .ok()
        .map(|json| Value::from_json(&json))
}

fn js_to_json(text: &str) -> String {
    let mut json = String::with_capacity(text.len() + 8);
    let mut code = String::new();
    let mut last = 0;

    // Gaps between unquoted characters are string literals.
    for (i, c, _) in Unquoted::new(text) {
        if i > last {
            push_code(&mut json, &mut code);
            push_string_literal(&mut json, &text[last..i]);
        }
        code.push(c);
        last = i + c.len_utf8();
    }
    push_code(&mut json, &mut code);
    if last < text.len() {
        push_string_literal(&mut json, &text[last..]);
    }
    json
}

fn push_code(json: &mut String, code: &mut String) {
    let keyed = bare_key_pattern().replace_all(code.as_str(), r#"${1}"${2}":"#);
    json.push_str(&trailing_comma_pattern().replace_all(&keyed, "$1"));
    code.clear();
}

fn push_string_literal(json: &mut String, literal: &str) {
    let mut chars = literal.chars();
    let (Some(quote), Some(last)) = (chars.next(), chars.next_back()) else {
        json.push_str(literal);
        return;
    };
    if quote != last {
        // Unterminated; left for the JSON parser to reject.
        json.push_str(literal);
        return;
    }

    json.push('"');
    let mut escaped = false;
    for c in chars {
        match (escaped, c) {
            (true, '\'') => json.push('\''),
            (true, c) => {
                json.push('\\');
                json.push(c);
            }
            (false, '\\') => {
                escaped = true;
                continue;
            }
            (false, '"') => json.push_str("\\\""),
            (false, c) => json.push(c),
        }
        escaped = false;
    }
    json.push('"');
}

fn bare_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([{,]\s*)([A-Za-z_$][\w$]*)\s*:").expect("bare key pattern is valid")
    })
}

fn trailing_comma_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r",\s*([}\]])").expect("trailing comma pattern is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_literal_becomes_named() {
        let args = parse_arguments("{ a: 1, b: 2 }");
        assert_eq!(
            args,
            Arguments::named([("a", Value::Int(1)), ("b", Value::Int(2))])
        );
    }

    #[test]
    fn test_object_literal_single_quotes_and_trailing_comma() {
        let args = parse_arguments("{ name: 'Ada', }");
        assert_eq!(args, Arguments::named([("name", Value::string("Ada"))]));
    }

    #[test]
    fn test_broken_object_literal_is_kept_raw() {
        let args = parse_arguments("{ a: someVar }");
        assert_eq!(
            args,
            Arguments::Positional(vec![Value::symbol("{ a: someVar }")])
        );
    }

    #[test]
    fn test_positional_mixed_tokens() {
        let args = parse_arguments(r#"10, "x", 'y', userId, 2.5"#);
        assert_eq!(
            args,
            Arguments::Positional(vec![
                Value::Int(10),
                Value::string("x"),
                Value::string("y"),
                Value::symbol("userId"),
                Value::Float(2.5),
            ])
        );
    }

    #[test]
    fn test_string_contents_are_not_rewritten() {
        assert_eq!(
            parse_arguments(r#"{ name: "O'Brien" }"#),
            Arguments::named([("name", Value::string("O'Brien"))])
        );
        assert_eq!(
            parse_arguments(r#"{ msg: "a, note: b" }"#),
            Arguments::named([("msg", Value::string("a, note: b"))])
        );
        assert_eq!(
            parse_arguments(r#"{ quote: 'say "hi"', tail: 'it\'s', }"#),
            Arguments::named([
                ("quote", Value::string(r#"say "hi""#)),
                ("tail", Value::string("it's")),
            ])
        );
    }

    #[test]
    fn test_empty_argument_text() {
        assert_eq!(parse_arguments("  "), Arguments::Positional(vec![]));
    }

    #[test]
    fn test_positional_array_token() {
        let args = parse_arguments("[1, 2], 3");
        assert_eq!(
            args,
            Arguments::Positional(vec![
                Value::List(vec![Value::Int(1), Value::Int(2)]),
                Value::Int(3),
            ])
        );
    }
}
