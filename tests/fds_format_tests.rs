//! Conformance tests for the FDS line grammar, escaping and type inference.

use fds_syntax::escape::{escape_key, escape_value, infer_type, unescape_key, unescape_value};
use fds_syntax::{parse, to_string, Section, Value};

// === Normalization ===

#[test]
fn test_windows_line_endings() {
    let root = parse("a: 1\r\nb: 2\r\n").unwrap();
    assert_eq!(root.len(), 2);
    assert_eq!(root.get_value("b"), Some(&Value::Integer(2)));
}

#[test]
fn test_old_mac_line_endings() {
    let root = parse("a: 1\rb: 2\r").unwrap();
    assert_eq!(root.get_value("b"), Some(&Value::Integer(2)));
}

#[test]
fn test_tab_indentation_equals_four_spaces() {
    let tabs = parse("a:\n\tb:\n\t\tc: 1\n\td: 2\n").unwrap();
    let spaces = parse("a:\n    b:\n        c: 1\n    d: 2\n").unwrap();
    assert_eq!(tabs, spaces);
}

// === Line kinds ===

#[test]
fn test_blank_and_space_only_lines_are_ignored() {
    let root = parse("\n   \na: 1\n\n      \nb: 2\n").unwrap();
    assert_eq!(root.len(), 2);
}

#[test]
fn test_comment_text_is_verbatim() {
    let root = parse("#no space\n#   three spaces\nk: v\n").unwrap();
    assert_eq!(
        root.get("k").unwrap().preceding_comments,
        vec!["no space", "   three spaces"]
    );
}

#[test]
fn test_indented_comment_attaches_to_next_entry() {
    let root = parse("a:\n    x: 1\n        # odd indent\nb: 2\n").unwrap();
    assert_eq!(root.get("b").unwrap().preceding_comments, vec![" odd indent"]);
}

#[test]
fn test_value_may_contain_markers() {
    let root = parse("url: http://host:80/?q=1\n").unwrap();
    assert_eq!(root.get_string("url", ""), "http://host:80/?q=1");
}

#[test]
fn test_escaped_marker_in_key() {
    let root = parse("a\\cb: 1\nc\\ed= aGk=\n").unwrap();
    assert_eq!(root.get_value("a:b"), Some(&Value::Integer(1)));
    assert_eq!(root.get_value("c=d"), Some(&Value::Bytes(b"hi".to_vec())));
}

#[test]
fn test_escaped_separator_in_key_is_not_a_path() {
    let root = parse("a\\db: 1\n").unwrap();
    assert!(root.get("a.b").is_none());
    assert_eq!(root.get_root("a.b").map(|e| e.value.clone()), Some(Value::Integer(1)));
}

#[test]
fn test_trailing_spaces_are_trimmed() {
    let root = parse("a: value   \n").unwrap();
    assert_eq!(root.get_string("a", ""), "value");
}

#[test]
fn test_no_op_escape_protects_spaces() {
    let root = parse("a: \\x  value  \\x\n").unwrap();
    assert_eq!(root.get_string("a", ""), "  value  ");
}

#[test]
fn test_value_without_space_after_marker() {
    let root = parse("a:1\nb=aGk=\n").unwrap();
    assert_eq!(root.get_value("a"), Some(&Value::Integer(1)));
    assert_eq!(root.get_value("b"), Some(&Value::Bytes(b"hi".to_vec())));
}

// === Sections ===

#[test]
fn test_deep_dedent_to_root() {
    let root = parse("a:\n    b:\n        c:\n            d: 1\ne: 2\n").unwrap();
    assert_eq!(root.get_i64("a.b.c.d", 0), 1);
    assert_eq!(root.get_i64("e", 0), 2);
}

#[test]
fn test_partial_dedent() {
    let root = parse("a:\n    b:\n        c: 1\n    d: 2\n").unwrap();
    assert_eq!(root.get_i64("a.d", 0), 2);
    assert!(root.get("a.b.d").is_none());
}

#[test]
fn test_irregular_but_consistent_widths() {
    let root = parse("a:\n  b:\n       c: 1\n  d: 2\n").unwrap();
    assert_eq!(root.get_i64("a.b.c", 0), 1);
    assert_eq!(root.get_i64("a.d", 0), 2);
}

#[test]
fn test_dedent_to_unknown_width_fails() {
    let err = parse("a:\n    b:\n        c: 1\n      d: 2\n").unwrap_err();
    assert_eq!(err.line(), Some(4));
    assert!(err
        .to_string()
        .contains("(valid: 0 / 4 / 8, found: 6, was: 8)"));
}

#[test]
fn test_section_start_line() {
    let root = parse("first: 1\nsec:\n\n    x: 1\n").unwrap();
    assert_eq!(root.get_section("sec").unwrap().start_line(), 4);
}

#[test]
fn test_duplicate_key_keeps_first_position() {
    let root = parse("a: 1\nb: 2\na: 3\n").unwrap();
    assert_eq!(root.keys().cloned().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(root.get_i64("a", 0), 3);
}

// === Lists ===

#[test]
fn test_mixed_list_members() {
    let root = parse("mixed:\n- text\n- 12\n- 1.5\n- true\n= aGk=\n").unwrap();
    let list = root.get_entry_list("mixed", &[]);
    let values: Vec<_> = list.iter().map(|e| e.value.clone()).collect();
    assert_eq!(
        values,
        vec![
            Value::from("text"),
            Value::Integer(12),
            Value::Float(1.5),
            Value::Bool(true),
            Value::Bytes(b"hi".to_vec()),
        ]
    );
}

#[test]
fn test_list_inside_section_then_sibling() {
    let root = parse("s:\n    l:\n    - 1\n    - 2\n    k: v\n").unwrap();
    assert_eq!(root.get_string_list("s.l", Vec::new()), vec!["1", "2"]);
    assert_eq!(root.get_string("s.k", ""), "v");
}

#[test]
fn test_list_entry_after_scalar_fails() {
    let err = parse("a: 1\n- 2\n").unwrap_err();
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_list_entry_at_start_fails() {
    let err = parse("- orphan\n").unwrap_err();
    assert_eq!(err.line(), Some(1));
    assert!(err.to_string().contains("list entry when not building a list"));
}

#[test]
fn test_list_display_form() {
    let root = parse("l:\n- a\n- 2\n").unwrap();
    assert_eq!(root.get_value("l").unwrap().to_string(), "a|2|");
}

// === Errors ===

#[test]
fn test_error_carries_raw_line() {
    let err = parse("good: 1\n    bad line\n").unwrap_err();
    match err {
        fds_syntax::Error::Parse { line, text, .. } => {
            assert_eq!(line, 2);
            assert_eq!(text, "    bad line");
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_empty_key_is_rejected() {
    assert!(parse("  : 1\n").is_err());
    assert!(parse("= aGk=\n").is_err());
}

#[test]
fn test_invalid_base64_line() {
    let err = parse("ok: 1\nblob= not*base64\n").unwrap_err();
    assert_eq!(err.line(), Some(2));
    assert!(err.to_string().contains("invalid base64 data"));
}

// === Escaping ===

#[test]
fn test_escape_table() {
    assert_eq!(escape_value("\\\t\n\r"), "\\\\\\t\\n\\r");
    assert_eq!(escape_key(".:="), "\\d\\c\\e");
    assert_eq!(unescape_key("\\d\\c\\e\\x"), ".:=");
    assert_eq!(unescape_value("\\\\\\t\\n\\r"), "\\\t\n\r");
}

#[test]
fn test_leading_trailing_space_markers() {
    assert_eq!(escape_value(" a"), "\\x a");
    assert_eq!(escape_value("a "), "a \\x");
    assert_eq!(escape_value(" "), "\\x \\x");
}

#[test]
fn test_keys_that_look_like_other_lines() {
    let mut root = Section::new();
    root.set_root("#not a comment", 1).unwrap();
    root.set_root("-not a list", 2).unwrap();
    let text = to_string(&root);
    assert_eq!(text, "\\x#not a comment: 1\n\\x-not a list: 2\n");
    assert_eq!(parse(&text).unwrap(), root);
}

#[test]
fn test_empty_key_is_written_readably() {
    let mut root = Section::new();
    root.set_root("", 1).unwrap();
    root.set_root("", Value::Section(Section::new())).unwrap();
    root.set_root("x", "y").unwrap();
    let text = to_string(&root);
    assert_eq!(text, "\\x:\nx: y\n");
    assert_eq!(parse(&text).unwrap(), root);

    let mut root = Section::new();
    root.set_root("", 1).unwrap();
    assert_eq!(to_string(&root), "\\x: 1\n");
    let reparsed = parse(&to_string(&root)).unwrap();
    assert_eq!(reparsed.get_root("").map(|e| e.value.clone()), Some(Value::Integer(1)));
}

// === Type inference ===

#[test]
fn test_inference_exactness() {
    assert_eq!(infer_type("42"), Value::Integer(42));
    assert_eq!(infer_type("2.75"), Value::Float(2.75));
    assert_eq!(infer_type("true"), Value::Bool(true));
    assert_eq!(infer_type("007"), Value::String("007".to_string()));
    assert_eq!(infer_type("hi"), Value::String("hi".to_string()));
}

#[test]
fn test_inference_limits() {
    assert_eq!(infer_type("9223372036854775807"), Value::Integer(i64::MAX));
    assert_eq!(infer_type("-9223372036854775808"), Value::Integer(i64::MIN));
    assert_eq!(
        infer_type("9223372036854775808"),
        Value::String("9223372036854775808".to_string())
    );
    assert_eq!(infer_type("2.50"), Value::String("2.50".to_string()));
    assert_eq!(infer_type(" 1"), Value::String(" 1".to_string()));
    assert_eq!(infer_type("FALSE"), Value::String("FALSE".to_string()));
}

#[test]
fn test_whole_float_reads_back_as_integer() {
    let mut root = Section::new();
    root.set("f", 2.0).unwrap();
    assert_eq!(to_string(&root), "f: 2\n");
    assert_eq!(parse(&to_string(&root)).unwrap().get_value("f"), Some(&Value::Integer(2)));
}
