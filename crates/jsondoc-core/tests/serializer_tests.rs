use jsondoc_core::{list, parse, serialize, Value};

/// Assert the exact text produced for `value` at the given indent.
fn assert_serialize(value: &Value, indent: usize, expected: &str) {
    let text = serialize(value, indent);
    assert_eq!(
        text, expected,
        "Serialize mismatch (indent {indent}):\n  got:      {text:?}\n  expected: {expected:?}"
    );
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn scalars_render_as_literals() {
    assert_serialize(&Value::Null, 0, "null");
    assert_serialize(&Value::Bool(true), 0, "true");
    assert_serialize(&Value::Bool(false), 0, "false");
    assert_serialize(&Value::Int(42), 0, "42");
    assert_serialize(&Value::Int(-7), 0, "-7");
}

#[test]
fn doubles_always_carry_a_decimal_point() {
    assert_serialize(&Value::Double(2.5), 0, "2.5");
    assert_serialize(&Value::Double(3.0), 0, "3.0");
    assert_serialize(&Value::Double(0.0), 0, "0.0");
    assert_serialize(&Value::Double(1e21), 0, "1000000000000000000000.0");
    assert_serialize(&Value::Double(0.000001), 0, "0.000001");
}

#[test]
fn non_finite_doubles_render_as_null() {
    assert_serialize(&Value::Double(f64::NAN), 0, "null");
    assert_serialize(&Value::Double(f64::INFINITY), 0, "null");
    assert_serialize(&Value::Double(f64::NEG_INFINITY), 2, "null");
}

#[test]
fn strings_are_quoted() {
    assert_serialize(&Value::from("hello"), 0, r#""hello""#);
    assert_serialize(&Value::from(""), 0, r#""""#);
}

#[test]
fn quote_and_backslash_are_escaped() {
    assert_serialize(&Value::from(r#"say "hi""#), 0, r#""say \"hi\"""#);
    assert_serialize(&Value::from(r"C:\dir"), 0, r#""C:\\dir""#);
}

#[test]
fn other_characters_are_emitted_raw() {
    assert_serialize(&Value::from("a\nb\tc"), 0, "\"a\nb\tc\"");
    assert_serialize(&Value::from("caf\u{e9}"), 0, "\"caf\u{e9}\"");
}

// ============================================================================
// Compact layout
// ============================================================================

#[test]
fn compact_array_uses_comma_space() {
    assert_serialize(&list![1, 2, 3], 0, "[1, 2, 3]");
}

#[test]
fn compact_object_uses_comma_space_and_colon_space() {
    let v = parse(r#"{"a":1,"b":[true,null]}"#).unwrap();
    assert_serialize(&v, 0, r#"{"a": 1, "b": [true, null]}"#);
}

#[test]
fn empty_containers_are_bracket_pairs() {
    assert_serialize(&Value::Array(vec![]), 0, "[]");
    assert_serialize(&parse("{}").unwrap(), 0, "{}");
    assert_serialize(&Value::Array(vec![]), 4, "[]");
    assert_serialize(&parse(r#"{"e": {}, "f": []}"#).unwrap(), 0, r#"{"e": {}, "f": []}"#);
}

#[test]
fn object_keys_follow_insertion_order() {
    let mut v = Value::Null;
    v["zeta"] = Value::from(1);
    v["alpha"] = Value::from(2);
    v["mid"] = Value::from(3);
    assert_serialize(&v, 0, r#"{"zeta": 1, "alpha": 2, "mid": 3}"#);
}

#[test]
fn object_keys_are_escaped() {
    let mut v = Value::Null;
    v["a\"b"] = Value::Null;
    assert_serialize(&v, 0, r#"{"a\"b": null}"#);
}

// ============================================================================
// Pretty layout
// ============================================================================

#[test]
fn pretty_nested_document() {
    let v = parse(r#"{"x":[1,2]}"#).unwrap();
    let expected = "{\n  \"x\": [\n    1,\n    2\n  ]\n}";
    assert_serialize(&v, 2, expected);
}

#[test]
fn pretty_closing_lines_sit_one_level_out() {
    let v = parse(r#"{"x":[1,2]}"#).unwrap();
    let text = serialize(&v, 2);
    let lines: Vec<&str> = text.lines().collect();
    let indent_of = |line: &str| line.len() - line.trim_start().len();

    let close_bracket = lines.iter().position(|l| l.trim() == "]").unwrap();
    assert_eq!(indent_of(lines[close_bracket]), 2);
    assert_eq!(indent_of(lines[close_bracket - 1]), 4);

    let close_brace = lines.len() - 1;
    assert_eq!(lines[close_brace], "}");
    assert_eq!(indent_of(lines[close_brace - 1]), 2);
}

#[test]
fn pretty_width_is_configurable() {
    let v = list![list!["k", list![true]]];
    assert_serialize(&v, 4, "{\n    \"k\": [\n        true\n    ]\n}");
}

#[test]
fn pretty_array_of_objects() {
    let v = parse(r#"[{"a":1},{"b":2}]"#).unwrap();
    let expected = "[\n  {\n    \"a\": 1\n  },\n  {\n    \"b\": 2\n  }\n]";
    assert_serialize(&v, 2, expected);
}

#[test]
fn pretty_scalar_root_is_unchanged() {
    assert_serialize(&Value::Int(5), 2, "5");
}

#[test]
fn pretty_form_reparses_to_compact_form() {
    let v = parse(r#"{"x":[1,2],"y":{"z":"w"}}"#).unwrap();
    let pretty = parse(&serialize(&v, 2)).unwrap();
    let compact = parse(&serialize(&v, 0)).unwrap();
    assert_eq!(pretty, compact);
    assert_eq!(pretty, v);
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn display_is_compact() {
    let v = parse(r#"{"a":[1,2]}"#).unwrap();
    assert_eq!(v.to_string(), r#"{"a": [1, 2]}"#);
}

#[test]
fn alternate_display_is_pretty() {
    let v = list![1];
    assert_eq!(format!("{v:#}"), "[\n  1\n]");
}

#[test]
fn output_is_valid_json_for_supported_documents() {
    let v = parse(r#"{"name":"x","list":[1,2.5,true,null,{"q":"\"quoted\""}]}"#).unwrap();
    for indent in [0, 2, 4] {
        let text = serialize(&v, indent);
        let checked: serde_json::Value = serde_json::from_str(&text)
            .unwrap_or_else(|e| panic!("not valid JSON at indent {indent}: {e}\n{text}"));
        assert_eq!(checked, serde_json::Value::from(v.clone()));
    }
}
