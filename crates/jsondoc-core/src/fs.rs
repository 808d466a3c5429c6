//! Path-based convenience wrappers around [`parse`] and [`serialize`].

use std::path::Path;

use crate::error::{JsonError, Result};
use crate::parser::parse;
use crate::serializer::serialize;
use crate::value::Value;

/// Read the whole file at `path` and parse it.
pub fn load(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| JsonError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded document file");
    let value = parse(&text)?;
    tracing::debug!(path = %path.display(), kind = %value.kind(), "parsed document");
    Ok(value)
}

/// Serialize `value` and write it to `path`, truncating any existing file.
pub fn dump(value: &Value, path: impl AsRef<Path>, indent: usize) -> Result<()> {
    let path = path.as_ref();
    let text = serialize(value, indent);
    std::fs::write(path, &text).map_err(|source| JsonError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), indent, "wrote document file");
    Ok(())
}
