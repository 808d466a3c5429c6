//! Text → [`Value`] parser.
//!
//! A single-pass recursive-descent parser over the input bytes. There is no
//! separate tokenizer: each rule looks at the byte under the cursor and decides
//! what to read next.
//!
//! # Grammar
//!
//! - `null`, `true`, `false`: matched in full.
//! - `"..."`: a backslash escapes the following character, which is copied
//!   verbatim (`\"` → `"`, `\\` → `\`, `\n` → `n`). No other escape decoding.
//! - `[ v, v, ... ]` and `{ "k": v, ... }`: exactly one comma between
//!   elements, no trailing comma.
//! - numbers: ASCII digits with at most one `.`. A `.` makes it a Double,
//!   otherwise an Int. No sign and no exponent.
//!
//! Whitespace (space, tab, newline, carriage return) is skipped between tokens.
//! Only whitespace may follow the root value.
//!
//! The first problem aborts the parse; there is no partial result.

use crate::error::{JsonError, Result};
use crate::value::{format_double, parse_int_text, Map, Value};

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum array/object nesting. The root container is depth 1.
    pub max_depth: usize,
}

impl ParseOptions {
    /// No nesting limit. Deeply nested input can exhaust the stack.
    pub const fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

/// Parse a document with the default [`ParseOptions`].
///
/// ```
/// use jsondoc_core::{parse, Value};
///
/// let doc = parse(r#"{"name": "jsondoc", "ratio": 0.5, "tags": [1, 2]}"#).unwrap();
/// assert_eq!(doc["name"], Value::from("jsondoc"));
/// assert_eq!(doc["ratio"], Value::Double(0.5));
/// assert_eq!(doc["tags"].len(), 2);
/// ```
pub fn parse(text: &str) -> Result<Value> {
    parse_with_options(text, &ParseOptions::default())
}

pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Value> {
    let mut parser = Parser::new(text, *options);
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    match parser.peek() {
        None => Ok(value),
        Some(_) => Err(parser.unexpected()),
    }
}

impl std::str::FromStr for Value {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

struct Parser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, options: ParseOptions) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            depth: 0,
            options,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    /// Dispatch on the first non-whitespace byte.
    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.end_of_input()),
            Some(b'n') => self.parse_keyword("null", Value::Null),
            Some(b't') => self.parse_keyword("true", Value::Bool(true)),
            Some(b'f') => self.parse_keyword("false", Value::Bool(false)),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'0'..=b'9' | b'.') => self.parse_number(),
            Some(_) => Err(self.unexpected()),
        }
    }

    fn parse_keyword(&mut self, keyword: &str, value: Value) -> Result<Value> {
        let rest = &self.bytes[self.pos..];
        let expected = keyword.as_bytes();
        if rest.starts_with(expected) {
            self.pos += expected.len();
            return Ok(value);
        }
        // Point at the first byte that diverges from the keyword.
        let matched = rest
            .iter()
            .zip(expected)
            .take_while(|(got, want)| got == want)
            .count();
        self.pos += matched;
        if self.pos >= self.bytes.len() {
            Err(self.end_of_input())
        } else {
            Err(self.unexpected())
        }
    }

    /// Read a quoted string; the cursor sits on the opening quote.
    ///
    /// Backslash and quote are ASCII, so every slice boundary below falls on a
    /// char boundary and multi-byte characters are copied whole.
    fn parse_string(&mut self) -> Result<String> {
        self.pos += 1;
        let mut out = String::new();
        let mut run_start = self.pos;
        loop {
            match self.peek() {
                None => return Err(self.end_of_input()),
                Some(b'"') => {
                    out.push_str(&self.text[run_start..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.text[run_start..self.pos]);
                    self.pos += 1;
                    let escaped = self.text[self.pos..]
                        .chars()
                        .next()
                        .ok_or_else(|| self.end_of_input())?;
                    run_start = self.pos;
                    self.pos += escaped.len_utf8();
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let mut seen_dot = false;
        while let Some(byte) = self.peek() {
            match byte {
                b'0'..=b'9' => {}
                b'.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            self.pos += 1;
        }

        let literal = &self.text[start..self.pos];
        if seen_dot {
            let d = literal
                .parse::<f64>()
                .map_err(|_| JsonError::MalformedNumber(literal.to_string()))?;
            // Enormous digit runs overflow to infinity; report them like Int overflow.
            if d.is_finite() {
                Ok(Value::Double(d))
            } else {
                Err(JsonError::NumberOutOfRange(format_double(d)))
            }
        } else {
            parse_int_text(literal).map(Value::Int)
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        self.pos += 1;
        let mut items = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                None => return Err(self.end_of_input()),
                Some(_) => return Err(self.unexpected()),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        self.pos += 1;
        let mut map = Map::new();

        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            self.skip_whitespace();
            let key = match self.peek() {
                Some(b'"') => self.parse_string()?,
                None => return Err(self.end_of_input()),
                Some(_) => return Err(self.unexpected()),
            };

            self.skip_whitespace();
            match self.peek() {
                Some(b':') => self.pos += 1,
                None => return Err(self.end_of_input()),
                Some(_) => return Err(self.unexpected()),
            }

            let value = self.parse_value()?;
            // Duplicate keys: the later value replaces the earlier one.
            map.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                None => return Err(self.end_of_input()),
                Some(_) => return Err(self.unexpected()),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    /// Step one container level deeper, enforcing [`ParseOptions::max_depth`].
    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth {
            let (line, column) = self.location();
            return Err(JsonError::NestingTooDeep {
                limit: self.options.max_depth,
                line,
                column,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// 1-based line and column (in characters) of the cursor.
    fn location(&self) -> (usize, usize) {
        let consumed = &self.text[..self.pos];
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map_or(0, |i| i + 1);
        let column = consumed[line_start..].chars().count() + 1;
        (line, column)
    }

    fn end_of_input(&self) -> JsonError {
        let (line, column) = self.location();
        JsonError::UnexpectedEndOfInput { line, column }
    }

    fn unexpected(&self) -> JsonError {
        let (line, column) = self.location();
        match self.text[self.pos..].chars().next() {
            Some(found) => JsonError::UnexpectedToken {
                found,
                line,
                column,
            },
            None => JsonError::UnexpectedEndOfInput { line, column },
        }
    }
}
