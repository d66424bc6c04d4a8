//! Formatted-string form: `f"...{name}..."`

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::Resolve;
use crate::parse::scan::unquote;
use crate::{Bindings, Value};

/// An f-string whose `{name}` placeholders are filled from bound variables.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedStringForm<'a> {
    /// The text between the quotes
    pub template: &'a str,
}

impl<'a> FormattedStringForm<'a> {
    /// Recognise `f"..."` or `f'...'`.
    pub fn recognize(expr: &'a str) -> Option<Self> {
        let rest = expr.strip_prefix(['f', 'F'])?;
        let template = unquote(rest)?;
        Some(Self { template })
    }
}

impl Resolve for FormattedStringForm<'_> {
    /// Unbound placeholders are replaced by their bare name. Conversions
    /// (`!r`) and format specs (`:>5`) are dropped.
    fn resolve(&self, bindings: &Bindings) -> Value {
        let text = placeholder_pattern().replace_all(self.template, |caps: &Captures<'_>| {
            let name = &caps[1];
            match bindings.get(name) {
                Some(value) => value.to_string(),
                None => name.to_string(),
            }
        });
        Value::string(text)
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\s*([A-Za-z_]\w*)\s*(?:![rsa])?(?::[^{}]*)?\}")
            .expect("placeholder pattern is valid")
    })
}
