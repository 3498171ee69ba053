//! Connection configuration for the LXD client.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Connection settings for reaching the LXD daemon.
///
/// The endpoint is an internal, self-signed deployment, so certificate
/// verification defaults to off. That choice is an explicit, scoped
/// transport option carried here rather than process-global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the LXD REST API.
    pub endpoint: String,
    /// Path to the client certificate (PEM).
    pub client_cert: PathBuf,
    /// Path to the client private key (PEM).
    pub client_key: PathBuf,
    /// Whether to verify the server's TLS certificate.
    pub verify_tls: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let dir = crate::constants::credential_dir();
        Self {
            endpoint: crate::constants::DEFAULT_ENDPOINT.to_owned(),
            client_cert: dir.join(crate::constants::CLIENT_CERT_FILE),
            client_key: dir.join(crate::constants::CLIENT_KEY_FILE),
            verify_tls: false,
        }
    }
}
