//! Quote- and bracket-aware scanning over snippet text

use std::str::CharIndices;

/// Iterator over the characters of a snippet that sit outside string
/// literals, paired with their bracket nesting depth.
///
/// Opening and closing brackets report the depth *outside* the pair, so a
/// matching `(`/`)` share the same depth. Quote delimiters and quoted
/// content are skipped entirely.
pub(crate) struct Unquoted<'a> {
    chars: CharIndices<'a>,
    depth: usize,
    quote: Option<char>,
    escaped: bool,
}

impl<'a> Unquoted<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices(),
            depth: 0,
            quote: None,
            escaped: false,
        }
    }
}

impl Iterator for Unquoted<'_> {
    type Item = (usize, char, usize);

    fn next(&mut self) -> Option<Self::Item> {
        for (i, c) in self.chars.by_ref() {
            if let Some(q) = self.quote {
                if self.escaped {
                    self.escaped = false;
                } else if c == '\\' {
                    self.escaped = true;
                } else if c == q {
                    self.quote = None;
                }
                continue;
            }

            match c {
                '"' | '\'' | '`' => self.quote = Some(c),
                '(' | '[' | '{' => {
                    let depth = self.depth;
                    self.depth += 1;
                    return Some((i, c, depth));
                }
                ')' | ']' | '}' => {
                    self.depth = self.depth.saturating_sub(1);
                    return Some((i, c, self.depth));
                }
                _ => return Some((i, c, self.depth)),
            }
        }
        None
    }
}

/// Split on `sep` wherever it appears outside brackets and quotes.
///
/// Always returns at least one (possibly empty) piece; pieces are not trimmed.
pub(crate) fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, c, depth) in Unquoted::new(text) {
        if c == sep && depth == 0 {
            parts.push(&text[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Split at the first top-level `sep`.
///
/// For `=` the comparison operators (`==`, `!=`, `<=`, `>=`) are skipped.
pub(crate) fn split_pair(text: &str, sep: char) -> Option<(&str, &str)> {
    let bytes = text.as_bytes();
    Unquoted::new(text)
        .find(|&(i, c, depth)| {
            if c != sep || depth != 0 {
                return false;
            }
            if sep != '=' {
                return true;
            }
            let prev = i.checked_sub(1).map(|p| bytes[p]);
            let next = bytes.get(i + 1).copied();
            !matches!(prev, Some(b'=' | b'!' | b'<' | b'>')) && next != Some(b'=')
        })
        .map(|(i, c, _)| (&text[..i], &text[i + c.len_utf8()..]))
}

/// Find the bracket closing the one at byte offset `open`.
pub(crate) fn find_closing(text: &str, open: usize) -> Option<usize> {
    let mut chars = Unquoted::new(&text[open..]);
    let (_, first, depth) = chars.next()?;
    if !matches!(first, '(' | '[' | '{') {
        return None;
    }
    chars
        .find(|&(_, c, d)| d == depth && matches!(c, ')' | ']' | '}'))
        .map(|(i, _, _)| open + i)
}

/// Remove a trailing `#` comment that is not inside a string literal.
pub(crate) fn strip_comment(line: &str) -> &str {
    match Unquoted::new(line).find(|&(_, c, _)| c == '#') {
        Some((i, _, _)) => &line[..i],
        None => line,
    }
}

/// Strip matching single or double quotes from a token.
pub(crate) fn unquote(token: &str) -> Option<&str> {
    let token = token.trim();
    let mut chars = token.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    if first == last && matches!(first, '"' | '\'' | '`') {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_respects_brackets_and_quotes() {
        let parts = split_top_level(r#"1, "a, b", f(x, y), [1, 2]"#, ',');
        assert_eq!(parts, vec!["1", r#" "a, b""#, " f(x, y)", " [1, 2]"]);
    }

    #[test]
    fn test_split_empty_text_gives_one_empty_piece() {
        assert_eq!(split_top_level("", ','), vec![""]);
    }

    #[test]
    fn test_split_pair_skips_comparisons() {
        assert_eq!(split_pair("ok=a==b", '='), Some(("ok", "a==b")));
        assert_eq!(split_pair("a == b", '='), None);
        assert_eq!(split_pair(r#""k": v"#, ':'), Some((r#""k""#, " v")));
    }

    #[test]
    fn test_find_closing_skips_nested_and_strings() {
        let text = r#"f(a, g(b), ")")"#;
        assert_eq!(find_closing(text, 1), Some(text.len() - 1));
        assert_eq!(find_closing("f(a", 1), None);
    }

    #[test]
    fn test_strip_comment_is_quote_aware() {
        assert_eq!(strip_comment("x  # note"), "x  ");
        assert_eq!(strip_comment(r##"f"#{n}" # c"##), r##"f"#{n}" "##);
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("'Ada'"), Some("Ada"));
        assert_eq!(unquote(r#""""#), Some(""));
        assert_eq!(unquote("'x\""), None);
        assert_eq!(unquote("'"), None);
    }
}
