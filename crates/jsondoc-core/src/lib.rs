//! # jsondoc-core
//!
//! A small JSON document library: an in-memory, dynamically-typed [`Value`] tree,
//! a recursive-descent [`parse`]r, and a [`serialize`]r with compact and indented
//! layouts.
//!
//! ## Quick start
//!
//! ```rust
//! use jsondoc_core::{parse, serialize, Value};
//!
//! // Text → Value
//! let mut doc = parse(r#"{"name": "probe", "ports": [80, 443]}"#).unwrap();
//! assert_eq!(doc["ports"][-1], Value::Int(443));
//!
//! // Writes create missing slots: arrays grow with nulls, objects gain keys.
//! doc["ports"][3] = Value::from(8080);
//! doc["enabled"] = Value::from(true);
//!
//! // Value → text (compact)
//! assert_eq!(
//!     serialize(&doc, 0),
//!     r#"{"name": "probe", "ports": [80, 443, null, 8080], "enabled": true}"#
//! );
//! ```
//!
//! ## Grammar limits
//!
//! The accepted text is a subset of JSON: no negative numbers, no exponents,
//! and the only escapes are `\"` and `\\` (any other escaped character is
//! copied literally). Integers are 32-bit, floats 64-bit.
//!
//! ## Modules
//!
//! - [`value`]: the [`Value`] node, [`Kind`], constructors and conversions
//! - [`index`]: read/write access by position or key, dotted-path selection
//! - [`parser`]: text → `Value`
//! - [`serializer`]: `Value` → text
//! - [`fs`]: `load` / `dump` file helpers
//! - [`interop`]: serde and `serde_json::Value` bridges
//! - [`error`]: [`JsonError`]

pub mod error;
pub mod fs;
pub mod index;
pub mod interop;
pub mod parser;
pub mod serializer;
pub mod value;

pub use error::{JsonError, Result};
pub use fs::{dump, load};
pub use index::Index;
pub use parser::{parse, parse_with_options, ParseOptions};
pub use serializer::serialize;
pub use value::{Kind, Map, Value};
