//! Display implementation for Value
//!
//! Display is the text a snippet would print: strings and symbols appear
//! without quotes, scalars use Python spelling (`None`, `True`), and
//! compound values render as compact JSON.

use std::fmt;

use super::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) | Value::Symbol(s) => write!(f, "{}", s),
            Value::List(_) | Value::Map(_) => write!(f, "{}", self.to_json()),
        }
    }
}

impl Value {
    /// Render the value the way a Python call site would spell it.
    ///
    /// Used for the `Executing procedure: ...` log line, where string
    /// arguments appear in single quotes.
    pub fn to_call_literal(&self) -> String {
        match self {
            Value::String(s) => format!("'{}'", s.replace('\'', "\\'")),
            Value::List(items) => {
                let inner: Vec<String> = items.iter().map(Value::to_call_literal).collect();
                format!("[{}]", inner.join(", "))
            }
            Value::Map(map) => {
                let inner: Vec<String> = map
                    .iter()
                    .map(|(k, v)| format!("'{}': {}", k, v.to_call_literal()))
                    .collect();
                format!("{{{}}}", inner.join(", "))
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Null.to_string(), "None");
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Int(3).to_string(), "3");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::string("Ada").to_string(), "Ada");
        assert_eq!(Value::symbol("a + b").to_string(), "a + b");
    }

    #[test]
    fn test_display_map_is_compact_json() {
        let v = Value::map([("id", Value::Int(1)), ("name", Value::string("x"))]);
        assert_eq!(v.to_string(), r#"{"id":1,"name":"x"}"#);
    }

    #[test]
    fn test_call_literal_quotes_strings() {
        assert_eq!(Value::string("pRPC").to_call_literal(), "'pRPC'");
        assert_eq!(Value::Int(1).to_call_literal(), "1");
        assert_eq!(
            Value::List(vec![Value::Int(1), Value::string("a")]).to_call_literal(),
            "[1, 'a']"
        );
    }
}
