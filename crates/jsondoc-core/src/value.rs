//! The document node: a closed tagged union over seven kinds.
//!
//! Every [`Value`] exclusively owns its children, so cloning a value deep-copies
//! the whole subtree and no node is ever reachable from two parents.
//!
//! # Construction
//!
//! - Explicit named constructors: [`Value::null`], [`Value::from_int`],
//!   [`Value::from_double`], [`Value::from_string`], [`Value::from_array`],
//!   [`Value::from_object`].
//! - `From` impls for host primitives (`bool`, small integers, floats, strings).
//! - [`Value::from_list`] (and the [`list!`](crate::list) macro), the literal-list
//!   heuristic that turns a list of `[string, value]` pairs into an object.
//!
//! # Conversions
//!
//! [`Value::to_bool`], [`Value::to_i32`], [`Value::to_f64`] and [`Value::to_text`]
//! are the narrowing views. They convert across kinds where a sensible mapping
//! exists and report [`JsonError::TypeMismatch`] otherwise.

use std::fmt;
use std::num::IntErrorKind;

use indexmap::IndexMap;

use crate::error::{JsonError, Result};

/// Key-to-value mapping backing [`Value::Object`].
///
/// Keys are unique; iteration follows insertion order.
pub type Map = IndexMap<String, Value>;

/// The active variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Double,
    String,
    Array,
    Object,
}

impl Kind {
    /// Lowercase name of the kind, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One JSON-like document or sub-document.
///
/// A fresh value is [`Value::Null`]. Assigning a value of another kind replaces
/// the previous payload entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i32),
    Double(f64),
    String(String),
    /// Ordered elements.
    Array(Vec<Value>),
    /// Unique keys, last write wins.
    Object(Map),
}

impl Value {
    pub fn null() -> Self {
        Value::Null
    }

    pub fn from_bool(b: bool) -> Self {
        Value::Bool(b)
    }

    pub fn from_int(n: i32) -> Self {
        Value::Int(n)
    }

    pub fn from_double(d: f64) -> Self {
        Value::Double(d)
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Build an array from `elements` verbatim. Unlike [`Value::from_list`] this
    /// never reinterprets the elements as key/value pairs.
    pub fn from_array(elements: Vec<Value>) -> Self {
        Value::Array(elements)
    }

    pub fn from_object(map: Map) -> Self {
        Value::Object(map)
    }

    /// Literal-list construction.
    ///
    /// If *every* element is a two-element array whose first element is a string,
    /// the list is read as an object: `[["a", 1], ["b", 2]]` becomes
    /// `{"a": 1, "b": 2}` (a repeated key keeps the later value). Otherwise the
    /// elements become an array as given.
    ///
    /// The rule is ambiguous by nature: an array that genuinely consists of
    /// `[string, value]` pairs cannot be built this way and must go through
    /// [`Value::from_array`]. An empty list qualifies vacuously and yields an
    /// empty object.
    pub fn from_list(elements: Vec<Value>) -> Self {
        let is_object = elements.iter().all(|element| {
            matches!(element, Value::Array(pair) if pair.len() == 2 && pair[0].is_string())
        });
        if !is_object {
            return Value::Array(elements);
        }

        let mut map = Map::with_capacity(elements.len());
        for element in elements {
            if let Value::Array(pair) = element {
                let mut pair = pair.into_iter();
                if let (Some(Value::String(key)), Some(value)) = (pair.next(), pair.next()) {
                    map.insert(key, value);
                }
            }
        }
        Value::Object(map)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the boolean if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an Int, None otherwise. Doubles are not converted.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float if this is a Double, None otherwise. Ints are not converted.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Element count of an array or key count of an object; zero for every other kind.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move the value out, leaving Null in its place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Truthiness view. Total over all kinds.
    ///
    /// Null is false; numbers are true when nonzero; strings, arrays and objects
    /// are true when non-empty.
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Double(d) => *d != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }

    /// Integer view. Doubles truncate toward zero; strings must hold an integer literal.
    pub fn to_i32(&self) -> Result<i32> {
        match self {
            Value::Null => Ok(0),
            Value::Bool(b) => Ok(i32::from(*b)),
            Value::Int(n) => Ok(*n),
            Value::Double(d) => truncate_double(*d),
            Value::String(s) => parse_int_text(s),
            Value::Array(_) | Value::Object(_) => Err(self.mismatch("integer conversion")),
        }
    }

    /// Floating-point view. Strings must hold a decimal literal.
    pub fn to_f64(&self) -> Result<f64> {
        match self {
            Value::Null => Ok(0.0),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Int(n) => Ok(f64::from(*n)),
            Value::Double(d) => Ok(*d),
            Value::String(s) => s
                .parse::<f64>()
                .map_err(|_| JsonError::MalformedNumber(s.clone())),
            Value::Array(_) | Value::Object(_) => Err(self.mismatch("float conversion")),
        }
    }

    /// Text view of a scalar: `null`, `true`/`false`, decimal numbers, or the
    /// string itself (unquoted). Arrays and objects have no text view; use
    /// [`serialize`](crate::serialize) for those.
    pub fn to_text(&self) -> Result<String> {
        match self {
            Value::Null => Ok("null".to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Int(n) => Ok(n.to_string()),
            Value::Double(d) => Ok(format_double(*d)),
            Value::String(s) => Ok(s.clone()),
            Value::Array(_) | Value::Object(_) => Err(self.mismatch("text conversion")),
        }
    }

    /// Append to an array. A Null value becomes an empty array first.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        self.array_mut("push")?.push(value.into());
        Ok(())
    }

    /// Insert into an object, returning the value previously stored under `key`.
    /// A Null value becomes an empty object first.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Option<Value>> {
        Ok(self.object_mut("insert")?.insert(key.into(), value.into()))
    }

    /// Remove a key from an object, keeping the order of the remaining keys.
    /// Returns None if the key is absent or this is not an object.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.as_object_mut()?.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.as_object().is_some_and(|map| map.contains_key(key))
    }

    /// Array payload for writing, turning Null into an empty array.
    pub(crate) fn array_mut(&mut self, operation: &'static str) -> Result<&mut Vec<Value>> {
        if self.is_null() {
            *self = Value::Array(Vec::new());
        }
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch(operation)),
        }
    }

    /// Object payload for writing, turning Null into an empty object.
    pub(crate) fn object_mut(&mut self, operation: &'static str) -> Result<&mut Map> {
        if self.is_null() {
            *self = Value::Object(Map::new());
        }
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.mismatch(operation)),
        }
    }

    pub(crate) fn mismatch(&self, operation: &'static str) -> JsonError {
        JsonError::TypeMismatch {
            operation,
            found: self.kind(),
        }
    }
}

/// Shortest decimal text that reads back as the same double, always with a
/// decimal point so it re-parses as a Double rather than an Int.
pub(crate) fn format_double(d: f64) -> String {
    let mut text = d.to_string();
    if d.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

pub(crate) fn parse_int_text(text: &str) -> Result<i32> {
    text.parse::<i32>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            JsonError::NumberOutOfRange(text.to_string())
        }
        _ => JsonError::MalformedNumber(text.to_string()),
    })
}

fn truncate_double(d: f64) -> Result<i32> {
    let truncated = d.trunc();
    if truncated.is_finite() && truncated >= f64::from(i32::MIN) && truncated <= f64::from(i32::MAX) {
        Ok(truncated as i32)
    } else {
        Err(JsonError::NumberOutOfRange(format_double(d)))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i32::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, u8, u16);

impl From<f32> for Value {
    fn from(d: f32) -> Self {
        Value::Double(f64::from(d))
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Array(elements)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<&Value> for bool {
    fn from(value: &Value) -> Self {
        value.to_bool()
    }
}

impl TryFrom<&Value> for i32 {
    type Error = JsonError;

    fn try_from(value: &Value) -> Result<Self> {
        value.to_i32()
    }
}

impl TryFrom<&Value> for f64 {
    type Error = JsonError;

    fn try_from(value: &Value) -> Result<Self> {
        value.to_f64()
    }
}

impl TryFrom<&Value> for String {
    type Error = JsonError;

    fn try_from(value: &Value) -> Result<Self> {
        value.to_text()
    }
}

/// Literal-list shorthand routed through [`Value::from_list`].
///
/// Each element is converted with `Value::from`. A list whose elements are all
/// `[string, value]` pairs becomes an object; anything else becomes an array.
///
/// ```
/// use jsondoc_core::{list, Value};
///
/// let point = list![list!["x", 1], list!["y", 2]];
/// assert!(point.is_object());
/// assert_eq!(point.get("y").unwrap(), &Value::Int(2));
///
/// let numbers = list![1, 2, 3];
/// assert!(numbers.is_array());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::Value::from_list(::std::vec::Vec::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Value::from_list(::std::vec![$($crate::Value::from($element)),+])
    };
}
