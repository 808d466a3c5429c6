//! [`Value`] → text serializer.
//!
//! Two layouts, chosen by the indent width:
//!
//! - `0`: compact, single line: `{"a": [1, 2], "b": null}`
//! - `n > 0`: one child per line, each nesting level indented by `n` more
//!   spaces, closing brackets aligned with the line that opened them.
//!
//! Empty containers are always `[]` / `{}`. Object keys come out in insertion
//! order. Strings escape only `"` and `\`, which is exactly what the parser
//! unescapes, so any output re-parses to an equal value (barring negative
//! numbers, which the grammar does not accept).

use std::fmt;

use crate::value::{format_double, Map, Value};

/// Render `value` as text. `indent == 0` gives the compact single-line form.
///
/// ```
/// use jsondoc_core::{parse, serialize};
///
/// let doc = parse(r#"{"x":[1,2]}"#).unwrap();
/// assert_eq!(serialize(&doc, 0), r#"{"x": [1, 2]}"#);
/// assert_eq!(serialize(&doc, 2), "{\n  \"x\": [\n    1,\n    2\n  ]\n}");
/// ```
pub fn serialize(value: &Value, indent: usize) -> String {
    let mut out = String::new();
    write_value(value, indent, 0, &mut out);
    out
}

fn write_value(value: &Value, indent: usize, depth: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Double(d) => write_double(*d, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => write_array(items, indent, depth, out),
        Value::Object(map) => write_object(map, indent, depth, out),
    }
}

/// Non-finite doubles have no textual form in the grammar and become `null`.
fn write_double(d: f64, out: &mut String) {
    if d.is_finite() {
        out.push_str(&format_double(d));
    } else {
        out.push_str("null");
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

fn write_array(items: &[Value], indent: usize, depth: usize, out: &mut String) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        write_separator(i == 0, indent, depth + indent, out);
        write_value(item, indent, depth + indent, out);
    }
    write_closing_break(indent, depth, out);
    out.push(']');
}

fn write_object(map: &Map, indent: usize, depth: usize, out: &mut String) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        write_separator(i == 0, indent, depth + indent, out);
        write_string(key, out);
        out.push_str(": ");
        write_value(value, indent, depth + indent, out);
    }
    write_closing_break(indent, depth, out);
    out.push('}');
}

/// Emit what precedes a container child: `, ` between compact children, or a
/// comma (except before the first child) plus a line break and `child_depth`
/// spaces in pretty mode.
fn write_separator(first: bool, indent: usize, child_depth: usize, out: &mut String) {
    if indent == 0 {
        if !first {
            out.push_str(", ");
        }
        return;
    }
    if !first {
        out.push(',');
    }
    out.push('\n');
    push_spaces(child_depth, out);
}

fn write_closing_break(indent: usize, depth: usize, out: &mut String) {
    if indent > 0 {
        out.push('\n');
        push_spaces(depth, out);
    }
}

fn push_spaces(count: usize, out: &mut String) {
    out.extend(std::iter::repeat_n(' ', count));
}

/// Compact text; `{:#}` renders with a two-space indent.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = if f.alternate() { 2 } else { 0 };
        f.write_str(&serialize(self, indent))
    }
}
