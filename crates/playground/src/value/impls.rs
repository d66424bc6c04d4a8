//! Value trait implementations: constructors, predicates, extractors, From traits

use indexmap::IndexMap;

use super::Value;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a symbolic (unresolved) value
    pub fn symbol(s: impl Into<String>) -> Self {
        Value::Symbol(s.into())
    }

    /// Create a map value from `(key, value)` pairs, preserving order
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Parse a numeric literal the way a snippet would spell it.
    ///
    /// Accepts integers, decimals and exponent forms with an optional sign.
    /// Words like `inf` or `NaN` are not numbers here.
    pub fn parse_number(text: &str) -> Option<Value> {
        let text = text.trim();
        let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
        if !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.')
            || !digits
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '-' | '+'))
        {
            return None;
        }

        if let Ok(n) = text.parse::<i64>() {
            return Some(Value::Int(n));
        }
        text.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Value::Float)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Check if value is unresolved snippet text
    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Get the text of a string or symbol
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Get an integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get any number as f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the entries of a map
    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Coerce a "numeric-looking" value to a number.
    ///
    /// Numbers pass through; strings and symbols are parsed.
    pub fn to_number(&self) -> Option<Value> {
        match self {
            Value::Int(_) | Value::Float(_) => Some(self.clone()),
            Value::String(s) | Value::Symbol(s) => Value::parse_number(s),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_integers_and_floats() {
        assert_eq!(Value::parse_number("42"), Some(Value::Int(42)));
        assert_eq!(Value::parse_number(" -7 "), Some(Value::Int(-7)));
        assert_eq!(Value::parse_number("2.5"), Some(Value::Float(2.5)));
        assert_eq!(Value::parse_number("1e3"), Some(Value::Float(1000.0)));
        assert_eq!(Value::parse_number(".5"), Some(Value::Float(0.5)));
    }

    #[test]
    fn test_parse_number_rejects_words() {
        assert_eq!(Value::parse_number("inf"), None);
        assert_eq!(Value::parse_number("NaN"), None);
        assert_eq!(Value::parse_number("id"), None);
        assert_eq!(Value::parse_number(""), None);
        assert_eq!(Value::parse_number("1.2.3"), None);
    }

    #[test]
    fn test_to_number_coerces_text() {
        assert_eq!(Value::string("10").to_number(), Some(Value::Int(10)));
        assert_eq!(Value::symbol("x").to_number(), None);
        assert_eq!(Value::Null.to_number(), None);
    }

    #[test]
    fn test_numeric_extractors() {
        assert!(Value::Int(2).is_numeric());
        assert!(Value::Float(0.5).is_numeric());
        assert!(!Value::string("2").is_numeric());
        assert_eq!(Value::Int(2).as_i64(), Some(2));
        assert_eq!(Value::Float(2.0).as_i64(), None);
    }
}
