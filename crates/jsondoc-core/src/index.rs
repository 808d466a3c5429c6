//! Indexed access into arrays and objects.
//!
//! Integer indices address arrays, string keys address objects. Null counts as
//! "not decided yet": reads through it behave like reads from an empty container,
//! writes turn it into the container the index implies.
//!
//! Negative integer indices count from the end (`-1` is the last element).
//!
//! | access | array, index in range | array, index past end | object, key missing |
//! |--------|-----------------------|-----------------------|---------------------|
//! | read   | element               | `IndexOutOfRange`     | `KeyNotFound`       |
//! | write  | element               | grows with Null fill  | inserts Null        |

use crate::error::{JsonError, Result};
use crate::value::Value;

/// A type that can index into a [`Value`]: integers for arrays, strings for objects.
///
/// Sealed; implemented for the primitive integer types, `str`, `String` and
/// references to them.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value>;

    #[doc(hidden)]
    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value>;
}

mod private {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for isize {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// Resolve a possibly negative index against `len`, without a bounds check on the upper end.
fn wrap_index(index: i64, len: usize) -> Result<usize> {
    let resolved = if index < 0 {
        i64::try_from(len).map_or(-1, |len| len + index)
    } else {
        index
    };
    usize::try_from(resolved).map_err(|_| JsonError::IndexOutOfRange { index, len })
}

fn read_position(value: &Value, index: i64) -> Result<&Value> {
    let items: &[Value] = match value {
        Value::Array(items) => items,
        Value::Null => &[],
        other => return Err(other.mismatch("integer indexing")),
    };
    let position = wrap_index(index, items.len())?;
    items.get(position).ok_or(JsonError::IndexOutOfRange {
        index,
        len: items.len(),
    })
}

fn write_position(value: &mut Value, index: i64) -> Result<&mut Value> {
    let len = match value {
        Value::Array(items) => items.len(),
        Value::Null => 0,
        other => return Err(other.mismatch("integer indexing")),
    };
    // Resolve before touching `value` so a failed write leaves Null as Null.
    let position = wrap_index(index, len)?;
    let items = value.array_mut("integer indexing")?;
    if position >= items.len() {
        items.resize(position + 1, Value::Null);
    }
    Ok(&mut items[position])
}

fn read_key<'v>(value: &'v Value, key: &str) -> Result<&'v Value> {
    match value {
        Value::Object(map) => map
            .get(key)
            .ok_or_else(|| JsonError::KeyNotFound(key.to_string())),
        Value::Null => Err(JsonError::KeyNotFound(key.to_string())),
        other => Err(other.mismatch("string-key indexing")),
    }
}

fn write_key<'v>(value: &'v mut Value, key: &str) -> Result<&'v mut Value> {
    Ok(value
        .object_mut("string-key indexing")?
        .entry(key.to_string())
        .or_insert(Value::Null))
}

macro_rules! index_by_integer {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
                    let index = i64::try_from(*self).unwrap_or(i64::MAX);
                    read_position(value, index)
                }

                fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
                    let index = i64::try_from(*self).unwrap_or(i64::MAX);
                    write_position(value, index)
                }
            }
        )*
    };
}

index_by_integer!(i32, i64, isize, usize);

impl Index for str {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        read_key(value, self)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        write_key(value, self)
    }
}

impl Index for String {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        read_key(value, self)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        write_key(value, self)
    }
}

impl<T: ?Sized + Index> Index for &T {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        (**self).index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        (**self).index_into_mut(value)
    }
}

impl Value {
    /// Read access. Missing keys and out-of-range positions are errors.
    ///
    /// ```
    /// use jsondoc_core::{parse, Value};
    ///
    /// let doc = parse(r#"{"tags": ["a", "b", "c"]}"#).unwrap();
    /// assert_eq!(doc.get("tags").unwrap().get(-1).unwrap(), &Value::from("c"));
    /// assert!(doc.get("missing").is_err());
    /// ```
    pub fn get<I: Index>(&self, index: I) -> Result<&Value> {
        index.index_into(self)
    }

    /// Write access. Creates the addressed slot when it does not exist: arrays
    /// grow with Null up to and including the index, objects gain a Null entry,
    /// and a Null value first becomes the matching container.
    pub fn get_mut<I: Index>(&mut self, index: I) -> Result<&mut Value> {
        index.index_into_mut(self)
    }

    /// Assign through an index, with the same slot creation as [`Value::get_mut`].
    pub fn set<I: Index>(&mut self, index: I, value: impl Into<Value>) -> Result<()> {
        *self.get_mut(index)? = value.into();
        Ok(())
    }

    /// Walk a dot-separated path such as `servers.0.host` or `items.-1`.
    ///
    /// A segment addresses an array position when the current node is an array
    /// and the segment parses as an integer, and an object key otherwise. The
    /// empty path selects `self`.
    pub fn select(&self, path: &str) -> Result<&Value> {
        if path.is_empty() {
            return Ok(self);
        }
        path.split('.').try_fold(self, |node, segment| match node {
            Value::Array(_) => match segment.parse::<i64>() {
                Ok(position) => node.get(position),
                Err(_) => node.get(segment),
            },
            _ => node.get(segment),
        })
    }
}

/// Panicking read access, for call sites that have already checked the shape.
///
/// # Panics
///
/// On any error [`Value::get`] would return.
impl<I: Index> std::ops::Index<I> for Value {
    type Output = Value;

    fn index(&self, index: I) -> &Value {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Auto-creating write access; `doc["a"][3] = 1.into()` builds the path.
///
/// # Panics
///
/// On a kind mismatch or a negative index past the start of the array.
impl<I: Index> std::ops::IndexMut<I> for Value {
    fn index_mut(&mut self, index: I) -> &mut Value {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
