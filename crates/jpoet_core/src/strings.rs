//! Java string literal quoting.

use std::fmt::Write;

/// Wrap `value` in double quotes, escaping it as a Java string literal.
///
/// ## Notes
/// - Single quotes are left alone: they need no escape inside a string literal.
/// - Control characters without a short escape are written as `\uXXXX`.
///
/// ## Examples
/// ```rust
/// use jpoet_core::strings::quote_string;
///
/// assert_eq!(quote_string("say \"hi\""), r#""say \"hi\"""#);
/// assert_eq!(quote_string("a\\b"), r#""a\\b""#);
/// ```
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
