use typed_cell::{
    parse_cell, stringify_cell, stringify_cell_with_options, structured, CellMap, CellValue,
    StringifyOptions, ToCell, Value, YamlOptions,
};

fn assert_roundtrip(raw: &str) {
    let value = parse_cell(raw);
    let written = stringify_cell(&value).unwrap();
    assert_eq!(parse_cell(&written), value, "input: {raw:?}");
}

#[test]
fn roundtrip_across_cell_types() {
    for raw in [
        "null",
        "nan",
        "inf",
        "-infinity",
        "42",
        "-17",
        "2.5",
        "true",
        "false",
        "hello",
        "hello world",
        "\"quoted\"",
        "[1, 2, 3]",
        "[a, b, c]",
        "{x: 1, y: 2}",
        "- 1\n- 2",
        "2021-05-04T10:00:00Z",
        "2021-05-04T10:00:00",
        "2021-05-04",
        "not: valid: yaml: at all:",
    ] {
        assert_roundtrip(raw);
    }
}

#[test]
fn nested_structures_roundtrip() {
    let value = parse_cell("{users: [{name: Alice, admin: true}, {name: Bob, admin: false}]}");
    let written = stringify_cell(&value).unwrap();
    assert_eq!(parse_cell(&written), value);
}

#[test]
fn flow_and_block_emission_agree_on_reread() {
    let value = CellValue::Structured(structured!({
        "name": "Alice",
        "scores": [1, 2, 3]
    }));

    let block = stringify_cell(&value).unwrap();
    let flow = stringify_cell_with_options(
        &value,
        StringifyOptions::new().with_yaml(YamlOptions::new().with_flow(true)),
    )
    .unwrap();

    assert!(block.contains('\n'));
    assert!(!flow.contains('\n'));
    assert_eq!(parse_cell(&block), value);
    assert_eq!(parse_cell(&flow), value);
}

#[test]
fn mapping_key_order_survives_a_cycle() {
    let value = parse_cell("{zulu: 1, alpha: 2, mike: 3}");
    let written = stringify_cell(&value).unwrap();
    match parse_cell(&written) {
        CellValue::Structured(Value::Mapping(map)) => {
            let keys: Vec<_> = map.keys().cloned().collect();
            assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
        }
        other => panic!("expected mapping, got {other:?}"),
    }
}

#[test]
fn strings_that_look_like_other_types_stay_strings() {
    for raw in ["true", "false", "null", "42", "2.5", "[1]", "{a: 1}", "- x"] {
        let value = CellValue::Structured(Value::from(raw));
        let written = stringify_cell(&value).unwrap();
        let back = parse_cell(&written);
        assert_eq!(back.as_str(), Some(raw), "input: {raw:?}");
    }
}

#[test]
fn multiline_strings_survive() {
    let value = CellValue::Structured(Value::from("line one\nline two"));
    let written = stringify_cell(&value).unwrap();
    assert_eq!(parse_cell(&written).as_str(), Some("line one\nline two"));
}

#[test]
fn whitespace_padded_strings_survive() {
    for raw in [" leading", "trailing ", "  both  "] {
        let value = CellValue::Structured(Value::from(raw));
        let written = stringify_cell(&value).unwrap();
        assert_eq!(parse_cell(&written).as_str(), Some(raw), "input: {raw:?}");
    }
}

#[derive(Debug)]
struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl ToCell for Fraction {
    fn to_cell(&self, options: &StringifyOptions) -> String {
        if options.null_as_empty && self.numerator == 0 {
            String::new()
        } else {
            format!("{}/{}", self.numerator, self.denominator)
        }
    }
}

#[test]
fn custom_values_render_themselves() {
    let cell = CellValue::custom(Fraction {
        numerator: 1,
        denominator: 3,
    });
    assert_eq!(stringify_cell(&cell).unwrap(), "1/3");
}

#[test]
fn custom_values_see_the_callers_options() {
    let cell = CellValue::custom(Fraction {
        numerator: 0,
        denominator: 1,
    });
    let options = StringifyOptions::new().with_null_as_empty(true);
    assert_eq!(stringify_cell_with_options(&cell, options).unwrap(), "");
    assert_eq!(stringify_cell(&cell).unwrap(), "0/1");
}

#[test]
fn structured_macro_builds_parse_equal_values() {
    let built = CellValue::Structured(structured!([1, 2, 3]));
    assert_eq!(built, parse_cell("[1, 2, 3]"));

    let built = CellValue::Structured(structured!({
        "name": "Alice",
        "age": 30
    }));
    assert_eq!(built, parse_cell("{name: Alice, age: 30}"));
}

#[test]
fn cellmap_api() {
    let mut map = CellMap::new();
    assert!(map.is_empty());
    map.insert("a".to_string(), Value::from(1));
    map.insert("b".to_string(), Value::from(2));
    assert_eq!(map.len(), 2);
    assert!(map.contains_key("a"));
    assert_eq!(map.remove("a").and_then(|v| v.as_i64()), Some(1));
    assert!(!map.contains_key("a"));
    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, vec!["b"]);
}

#[test]
fn parse_never_panics_on_hostile_input() {
    for raw in [
        "\u{0}",
        "\\",
        "\"unterminated",
        "'unterminated",
        "[[[[",
        "}}{{",
        "/\\/",
        "---",
        "&anchor *alias",
        "!!binary not-base64",
        "\t\tweird\tindent",
    ] {
        let _ = parse_cell(raw);
    }
}

#[test]
fn stringify_options_are_pure_configuration() {
    // the same value with the same options always writes the same text
    let value = parse_cell("{a: [1, 2], b: null}");
    let options = StringifyOptions::new().with_yaml(YamlOptions::new().with_flow(true));
    let first = stringify_cell_with_options(&value, options.clone()).unwrap();
    let second = stringify_cell_with_options(&value, options).unwrap();
    assert_eq!(first, second);
}
