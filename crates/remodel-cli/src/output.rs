//! Output rendering and writing
//!
//! Serializes the transformed document with configurable indentation and
//! writes it to a destination path or stdout. Unicode characters are emitted
//! literally, never escaped.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};

/// Render a JSON value with the given indentation width
///
/// Zero indentation emits compact single-line JSON.
pub fn render_json(value: &Value, indent: usize) -> Result<String> {
    if indent == 0 {
        return Ok(serde_json::to_string(value)?);
    }

    let indent_bytes = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent_bytes.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|e| Error::other(format!("Rendered JSON was not UTF-8: {}", e)))
}

/// Write rendered output to a destination path, or stdout when none is given
pub fn write_output(rendered: &str, destination: Option<&Path>) -> Result<()> {
    match destination {
        Some(path) => {
            fs::write(path, rendered)?;
            tracing::info!(path = %path.display(), "transformed JSON written");
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
