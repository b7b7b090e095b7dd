use lispy::*;
use pretty_assertions::assert_eq;

fn read_line(src: &str) -> Value {
    read_str(src, "<test>").expect("parse failed")
}

// ═══════════════════════════════════════════════════════════════════════
// Atoms
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_read_numbers() {
    assert_eq!(
        read_line("0 -12 345"),
        Value::sexpr(vec![
            Value::Number(0),
            Value::Number(-12),
            Value::Number(345)
        ])
    );
}

#[test]
fn test_number_out_of_range_reads_as_error() {
    let forms = read_forms("123456789012345678901234567890", "<test>").unwrap();
    assert_eq!(
        forms,
        vec![Value::error("invalid number '123456789012345678901234567890'")]
    );
}

#[test]
fn test_read_symbols() {
    let forms = read_forms("head \\ == <= & foo_bar a.b", "<test>").unwrap();
    let names: Vec<&str> = forms.iter().filter_map(Value::as_symbol).collect();
    assert_eq!(names, vec!["head", "\\", "==", "<=", "&", "foo_bar", "a.b"]);
}

#[test]
fn test_read_string_escapes() {
    let forms = read_forms(r#""line\nnext\t\"q\" \\""#, "<test>").unwrap();
    assert_eq!(forms, vec![Value::string("line\nnext\t\"q\" \\")]);
}

#[test]
fn test_string_prints_back_in_reader_syntax() {
    let original = Value::string("tab\there \"quoted\"\n");
    let printed = original.to_string();
    assert_eq!(printed, r#""tab\there \"quoted\"\n""#);
    assert_eq!(read_forms(&printed, "<test>").unwrap(), vec![original]);
}

#[test]
fn test_string_may_contain_brackets_and_semicolons() {
    let forms = read_forms("\"(not {a} ; list)\"", "<test>").unwrap();
    assert_eq!(forms, vec![Value::string("(not {a} ; list)")]);
}

// ═══════════════════════════════════════════════════════════════════════
// Lists and Comments
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_read_nested_lists() {
    let forms = read_forms("(def {x} (list 1 {2}))", "<test>").unwrap();
    assert_eq!(
        forms,
        vec![Value::sexpr(vec![
            Value::symbol("def"),
            Value::qexpr(vec![Value::symbol("x")]),
            Value::sexpr(vec![
                Value::symbol("list"),
                Value::Number(1),
                Value::qexpr(vec![Value::Number(2)]),
            ]),
        ])]
    );
}

#[test]
fn test_comments_are_dropped() {
    let src = "; leading comment\n(+ 1 ; inline\n 2)\n; trailing";
    let forms = read_forms(src, "<test>").unwrap();
    assert_eq!(
        forms,
        vec![Value::sexpr(vec![
            Value::symbol("+"),
            Value::Number(1),
            Value::Number(2)
        ])]
    );
}

#[test]
fn test_empty_source_reads_as_unit() {
    assert_eq!(read_line(""), Value::unit());
    assert_eq!(read_line("  ; only a comment"), Value::unit());
}

#[test]
fn test_printed_list_reads_back() {
    let value = read_line("{1 (a \"b\") {}}");
    let printed = value.to_string();
    assert_eq!(printed, "({1 (a \"b\") {}})");
    assert_eq!(read_line(&printed), Value::sexpr(vec![value]));
}

// ═══════════════════════════════════════════════════════════════════════
// Parse Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_unclosed_list() {
    let err = read_str("(+ 1 2", "<stdin>").unwrap_err();
    assert!(err.to_string().starts_with("Parse error: "));
    assert_eq!(err.location.map(|l| l.file), Some("<stdin>".to_string()));
}

#[test]
fn test_mismatched_brackets() {
    assert!(read_str("(+ 1 2}", "<test>").is_err());
    assert!(read_str("{1 2)", "<test>").is_err());
}

#[test]
fn test_unterminated_string() {
    assert!(read_str("\"abc", "<test>").is_err());
}

#[test]
fn test_parse_error_reported_as_error_value() {
    let mut env = Environment::with_prelude();
    let result = eval_str(&mut env, "{1 2");
    assert!(result.is_error());
    assert!(result.to_string().starts_with("Error: Parse error: "));
}
