use fds_syntax::{fds, to_string, Entry, Section, Value};

#[test]
fn test_fds_macro_booleans() {
    assert_eq!(fds!(true), Value::Bool(true));
    assert_eq!(fds!(false), Value::Bool(false));
}

#[test]
fn test_fds_macro_numbers() {
    assert_eq!(fds!(42), Value::Integer(42));
    assert_eq!(fds!(3.5), Value::Float(3.5));
    assert_eq!(fds!(-123), Value::Integer(-123));
    assert_eq!(fds!(u32::MAX), Value::Integer(u32::MAX as i64));
}

#[test]
fn test_fds_macro_strings_and_bytes() {
    assert_eq!(fds!("hello"), Value::String("hello".to_string()));
    let owned = String::from("owned");
    assert_eq!(fds!(owned), Value::String("owned".to_string()));
    assert_eq!(fds!(vec![1u8, 2]), Value::Bytes(vec![1, 2]));
}

#[test]
fn test_fds_macro_lists() {
    let list = fds!(["a", 2, true]);
    assert_eq!(
        list,
        Value::List(vec![
            Entry::new(Value::from("a")),
            Entry::new(Value::Integer(2)),
            Entry::new(Value::Bool(true)),
        ])
    );
    assert_eq!(fds!([1, 2,]).as_list().map(<[Entry]>::len), Some(2));
}

#[test]
fn test_fds_macro_nested_sections() {
    let value = fds!({
        "database": {
            "host": "localhost",
            "port": 5432
        },
        "replicas": ["r1", "r2"],
        "offset": (-3)
    });

    let root = value.as_section().unwrap();
    assert_eq!(root.keys().cloned().collect::<Vec<_>>(), vec!["database", "replicas", "offset"]);
    assert_eq!(root.get_string("database.host", ""), "localhost");
    assert_eq!(root.get_i64("database.port", 0), 5432);
    assert_eq!(root.get_string_list("replicas", Vec::new()), vec!["r1", "r2"]);
    assert_eq!(root.get_i64("offset", 0), -3);
}

#[test]
fn test_fds_macro_matches_parsed_text() {
    let built = fds!({
        "name": "demo",
        "inner": { "flag": true }
    });
    let parsed = fds_syntax::parse("name: demo\ninner:\n    flag: true\n").unwrap();
    assert_eq!(built, Value::Section(parsed));
}

#[test]
fn test_fds_macro_output() {
    let value = fds!({ "a": { "b": 1 }, "l": ["x"] });
    let section: Section = value.try_into().unwrap();
    assert_eq!(to_string(&section), "a:\n\tb: 1\nl:\n- x\n");
}

#[test]
#[should_panic(expected = "found section")]
fn test_fds_macro_rejects_sections_in_lists() {
    let _ = fds!({ "bad": [{ "a": 1 }] });
}
