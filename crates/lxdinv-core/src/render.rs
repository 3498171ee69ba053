//! JSON rendering for the inventory consumer.
//!
//! The consumer contract fixes the output shape: keys sorted, four-space
//! indent. Sorting falls out of `serde_json::Value`'s BTree-backed map;
//! the indent is supplied explicitly.

use lxdinv_common::error::{InventoryError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Serializes a document as key-sorted JSON with a four-space indent.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render<T: Serialize>(document: &T) -> Result<String> {
    // Round-trip through Value so flattened keys end up sorted together.
    let value = serde_json::to_value(document)?;

    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(out).map_err(|e| InventoryError::Config {
        message: format!("rendered JSON is not UTF-8: {e}"),
    })
}
