//! Unified error types for the lxdinv workspace.
//!
//! Every failure in credential loading, transport, API handling, or address
//! resolution maps onto one of these variants and aborts the run; there is
//! no retry or partial-result path.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// The HTTP transport failed before a usable API response was obtained.
    #[error("HTTP transport error: {message}")]
    Http {
        /// Description of the transport failure.
        message: String,
    },

    /// The LXD daemon returned an error envelope.
    #[error("LXD API error ({code}): {message}")]
    Api {
        /// Error code reported by the daemon.
        code: i64,
        /// Error message reported by the daemon.
        message: String,
    },

    /// A container's network state has no entry for the expected interface.
    #[error("container {container} has no {interface} interface")]
    InterfaceNotFound {
        /// Container whose state was queried.
        container: String,
        /// Interface name that was looked up.
        interface: String,
    },

    /// A container's interface exists but carries no addresses.
    #[error("container {container} has no address on {interface}")]
    NoAddress {
        /// Container whose state was queried.
        container: String,
        /// Interface name that was looked up.
        interface: String,
    },

    /// A container's group tag collides with a reserved inventory key.
    #[error("group tag {name:?} collides with a reserved inventory key")]
    ReservedGroup {
        /// The offending group name.
        name: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, InventoryError>;
