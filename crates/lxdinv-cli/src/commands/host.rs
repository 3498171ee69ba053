//! `lxdinv --host <name>` — emit per-host variables.
//!
//! The `--list` reply already carries all hostvars under `_meta`, so this
//! mode exists only to satisfy consumers that still call `--host` per
//! host. It prints a fixed empty document and never contacts LXD.

use lxdinv_core::{empty_hostvars_document, render};

/// Prints the fixed empty-hostvars document.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn execute(name: &str) -> anyhow::Result<()> {
    tracing::debug!(host = name, "per-host query answered without backend call");
    println!("{}", render(&empty_hostvars_document())?);
    Ok(())
}
