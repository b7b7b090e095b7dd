//! Reader: parse tree → Value
//!
//! Classification goes by tag substring, so a front-end may decorate its
//! tags (for example `expr|number|regex`) without confusing the reader.

use crate::error::EvalError;
use crate::frontend::{self, ParseError, ParseNode};
use crate::Value;

/// Convert a parse tree node into a value.
pub fn read(node: &ParseNode) -> Value {
    if node.tag.contains("number") {
        return read_number(&node.contents);
    }
    if node.tag.contains("string") {
        return read_string(&node.contents);
    }
    if node.tag.contains("symbol") {
        return Value::Symbol(node.contents.clone());
    }
    if node.tag.contains("qexpr") {
        return Value::QExpr(read_children(node));
    }
    // root and sexpr
    Value::SExpr(read_children(node))
}

/// Read the meaningful children of a list or root node.
///
/// Punctuation, marker and comment nodes are skipped.
pub fn read_children(node: &ParseNode) -> Vec<Value> {
    node.children
        .iter()
        .filter(|child| !is_skipped(child))
        .map(read)
        .collect()
}

fn is_skipped(node: &ParseNode) -> bool {
    matches!(node.contents.as_str(), "(" | ")" | "{" | "}")
        || node.tag == "regex"
        || node.tag.contains("comment")
}

fn read_number(text: &str) -> Value {
    text.parse::<i64>().map(Value::Number).unwrap_or_else(|_| {
        EvalError::InvalidNumber {
            text: text.to_string(),
        }
        .into()
    })
}

fn read_string(literal: &str) -> Value {
    let inner = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal);
    Value::String(unescape(inner))
}

/// Decode backslash escapes. An unknown escape keeps the escaped character.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('a') => out.push('\x07'),
            Some('b') => out.push('\x08'),
            Some('v') => out.push('\x0b'),
            Some('f') => out.push('\x0c'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Parse `source` and read its root.
///
/// The root is an S-expression holding every top-level form, which is
/// how a line typed at the prompt becomes a call without parentheses.
pub fn read_str(source: &str, origin: &str) -> Result<Value, ParseError> {
    let root = frontend::parse(source, origin)?;
    Ok(read(&root))
}

/// Parse `source` and read each top-level form separately.
pub fn read_forms(source: &str, origin: &str) -> Result<Vec<Value>, ParseError> {
    let root = frontend::parse(source, origin)?;
    Ok(read_children(&root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::ROOT_TAG;

    #[test]
    fn test_read_hand_built_tree() {
        let tree = ParseNode::branch(
            ROOT_TAG,
            vec![
                ParseNode::leaf("regex", ""),
                ParseNode::leaf("expr|symbol|regex", "head"),
                ParseNode::branch(
                    "expr|qexpr",
                    vec![
                        ParseNode::leaf("char", "{"),
                        ParseNode::leaf("expr|number|regex", "1"),
                        ParseNode::leaf("comment", "; note"),
                        ParseNode::leaf("char", "}"),
                    ],
                ),
                ParseNode::leaf("regex", ""),
            ],
        );
        assert_eq!(
            read(&tree),
            Value::sexpr(vec![
                Value::symbol("head"),
                Value::qexpr(vec![Value::Number(1)]),
            ])
        );
    }

    #[test]
    fn test_read_number_out_of_range() {
        assert_eq!(
            read_number("99999999999999999999"),
            Value::error("invalid number '99999999999999999999'")
        );
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r#"a\nb\t\"c\"\\"#), "a\nb\t\"c\"\\");
        assert_eq!(unescape(r"\q"), "q");
    }

    #[test]
    fn test_read_str_wraps_line() {
        assert_eq!(
            read_str("+ 1 2", "<test>").unwrap(),
            Value::sexpr(vec![Value::symbol("+"), Value::Number(1), Value::Number(2)])
        );
    }

    #[test]
    fn test_read_forms_splits_top_level() {
        let forms = read_forms("(def {x} 1) ; set\nx", "<test>").unwrap();
        assert_eq!(forms.len(), 2);
        assert_eq!(forms[1], Value::symbol("x"));
    }
}
