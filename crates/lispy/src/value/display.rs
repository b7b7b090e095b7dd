//! Display implementation for Value
//!
//! Renders values in the same surface syntax the reader accepts, so a
//! printed list or string can be read back.

use std::fmt;

use super::*;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(message) => write!(f, "Error: {}", message),
            Value::Symbol(name) => write!(f, "{}", name),
            Value::String(s) => write!(f, "\"{}\"", escape(s)),
            Value::Builtin(b) => write!(f, "<builtin {}>", b.name),
            Value::Closure(c) => {
                write!(f, "(\\ ")?;
                write_list(f, &c.params.to_formals(), '{', '}')?;
                write!(f, " ")?;
                write_list(f, &c.body, '{', '}')?;
                write!(f, ")")
            }
            Value::SExpr(items) => write_list(f, items, '(', ')'),
            Value::QExpr(items) => write_list(f, items, '{', '}'),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

/// Restore backslash escapes in a string literal's contents.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0b' => out.push_str("\\v"),
            '\x0c' => out.push_str("\\f"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }
    out
}
