//! Server function header and return-expression extraction

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::scan::{find_closing, split_top_level, strip_comment};

/// A server procedure's name and parameter names, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureDescriptor {
    /// Procedure name
    pub procedure_name: String,

    /// Parameter names (`self`/`cls` excluded)
    pub parameter_names: Vec<String>,
}

/// A located `def name(...)` header.
struct Header<'a> {
    params: &'a str,
    end: usize,
}

fn find_header<'a>(server_code: &'a str, procedure_name: &str) -> Option<Header<'a>> {
    if procedure_name.is_empty() {
        return None;
    }
    let pattern = format!(
        r"(?m)(?:\basync\s+)?\bdef\s+{}\s*\(",
        regex::escape(procedure_name)
    );
    let header = Regex::new(&pattern).ok()?.find(server_code)?;

    let open = header.end() - 1;
    let header = match find_closing(server_code, open) {
        Some(close) => Header {
            params: &server_code[open + 1..close],
            end: close + 1,
        },
        None => {
            let rest = &server_code[open + 1..];
            let line = rest.lines().next().unwrap_or("");
            Header {
                params: line,
                end: open + 1 + line.len(),
            }
        }
    };
    Some(header)
}

/// Locate `(async )?def <procedure_name>(...)` and read its parameter names.
///
/// Each parameter keeps the text before its annotation or default, with
/// `*`/`**` stripped. Returns `None` when no header matches.
pub fn parse_signature(server_code: &str, procedure_name: &str) -> Option<SignatureDescriptor> {
    let Some(header) = find_header(server_code, procedure_name) else {
        tracing::debug!(procedure = procedure_name, "no matching def in server code");
        return None;
    };

    let parameter_names = split_top_level(header.params, ',')
        .into_iter()
        .filter_map(parameter_name)
        .collect();

    Some(SignatureDescriptor {
        procedure_name: procedure_name.to_string(),
        parameter_names,
    })
}

fn parameter_name(token: &str) -> Option<String> {
    let name = token
        .split([':', '='])
        .next()
        .unwrap_or("")
        .trim()
        .trim_start_matches('*')
        .trim();
    match name {
        "" | "self" | "cls" | "/" => None,
        name => Some(name.to_string()),
    }
}

/// Extract the expression after the first `return` following the
/// procedure's header, up to end of line, without any `#` comment.
///
/// A bare `return` yields an empty string. Returns `None` when the header
/// is missing or no `return` follows it.
pub fn extract_return_expression(server_code: &str, procedure_name: &str) -> Option<String> {
    let header = find_header(server_code, procedure_name)?;
    let body = &server_code[header.end..];

    let Some(keyword) = return_pattern().find(body) else {
        tracing::debug!(procedure = procedure_name, "no return after def");
        return None;
    };

    let line = body[keyword.end()..].lines().next().unwrap_or("");
    Some(strip_comment(line).trim().to_string())
}

fn return_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\breturn\b").expect("return pattern is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GET_USER: &str = "from prpc import rpc\n\n@rpc\nasync def get_user(id: int) -> User:\n    return User(id=id, name=\"pRPC User\")";

    #[test]
    fn test_parse_signature_async() {
        let sig = parse_signature(GET_USER, "get_user").unwrap();
        assert_eq!(sig.procedure_name, "get_user");
        assert_eq!(sig.parameter_names, vec!["id"]);
    }

    #[test]
    fn test_parse_signature_drops_self_defaults_and_stars() {
        let code = "class Api:\n    def search(self, query: str, limit: int = 10, *args, **kwargs):\n        return []";
        let sig = parse_signature(code, "search").unwrap();
        assert_eq!(sig.parameter_names, vec!["query", "limit", "args", "kwargs"]);
    }

    #[test]
    fn test_parse_signature_nested_annotations() {
        let code = "def merge(a: Dict[str, int], b: Tuple[int, int]) -> dict:\n    return a";
        let sig = parse_signature(code, "merge").unwrap();
        assert_eq!(sig.parameter_names, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_signature_requires_exact_name() {
        let code = "def add_numbers(a, b):\n    return a + b";
        assert_eq!(parse_signature(code, "add"), None);
        assert_eq!(parse_signature(code, ""), None);
    }

    #[test]
    fn test_extract_return_expression() {
        assert_eq!(
            extract_return_expression(GET_USER, "get_user").as_deref(),
            Some("User(id=id, name=\"pRPC User\")")
        );
    }

    #[test]
    fn test_extract_return_strips_comment() {
        let code = "def add(a: int, b: int) -> int:\n    return a + b  # sum";
        assert_eq!(extract_return_expression(code, "add").as_deref(), Some("a + b"));
    }

    #[test]
    fn test_extract_return_one_liner() {
        let code = "def add(a: int, b: int) -> int: return a + b";
        assert_eq!(extract_return_expression(code, "add").as_deref(), Some("a + b"));
    }

    #[test]
    fn test_extract_return_bare_and_missing() {
        assert_eq!(
            extract_return_expression("def ping():\n    return\n", "ping").as_deref(),
            Some("")
        );
        assert_eq!(extract_return_expression("def ping():\n    pass\n", "ping"), None);
        assert_eq!(extract_return_expression("def ping():\n    return 1", "pong"), None);
    }

    #[test]
    fn test_extract_return_ignores_words_containing_return() {
        let code = "def f():\n    returned = 1\n    return returned";
        assert_eq!(extract_return_expression(code, "f").as_deref(), Some("returned"));
    }
}
