//! Blocking LXD client over HTTPS with client-certificate authentication.

use std::path::Path;

use lxdinv_common::config::ClientConfig;
use lxdinv_common::error::{InventoryError, Result};
use serde::de::DeserializeOwned;

use crate::api::{ApiResponse, Container, ContainerState};

/// Client for the two LXD calls the inventory needs.
///
/// Reads the client certificate and key once at construction and holds a
/// single blocking HTTP connection pool for the lifetime of the run.
#[derive(Debug)]
pub struct LxdClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl LxdClient {
    /// Builds a client from the given connection settings.
    ///
    /// When `config.verify_tls` is false, server certificate verification
    /// is disabled on this client only. The target is a known-internal
    /// endpoint with a self-signed certificate.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential files cannot be read, the PEM
    /// pair is rejected as a TLS identity, or the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let identity = load_identity(&config.client_cert, &config.client_key)?;

        let mut builder = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .identity(identity);
        if !config.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build().map_err(|e| InventoryError::Http {
            message: format!("failed to construct HTTP client: {e}"),
        })?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_owned(),
            http,
        })
    }

    /// Lists all containers with their expanded configuration.
    ///
    /// One call: `GET /1.0/containers?recursion=1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response body is not a
    /// valid envelope, or the daemon reports an error.
    pub fn list_containers(&self) -> Result<Vec<Container>> {
        self.get("/1.0/containers?recursion=1")
    }

    /// Fetches the live state of a single container.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response body is not a
    /// valid envelope, or the daemon reports an error (e.g. an unknown
    /// container name).
    pub fn container_state(&self, name: &str) -> Result<ContainerState> {
        self.get(&format!("/1.0/containers/{name}/state"))
    }

    /// Issues a GET against the endpoint and unwraps the LXD envelope.
    ///
    /// Error envelopes arrive with non-2xx HTTP statuses, so the body is
    /// parsed regardless of status and the daemon's own error surfaces.
    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.endpoint);
        tracing::debug!(%url, "querying LXD");

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| InventoryError::Http {
                message: format!("request to {url} failed: {e}"),
            })?;

        let envelope: ApiResponse<T> = response.json().map_err(|e| InventoryError::Http {
            message: format!("invalid response from {url}: {e}"),
        })?;
        envelope.into_metadata()
    }
}

/// Reads the certificate/key PEM pair and combines it into a TLS identity.
fn load_identity(cert_path: &Path, key_path: &Path) -> Result<reqwest::Identity> {
    let mut pem = read_pem(cert_path)?;
    pem.extend_from_slice(&read_pem(key_path)?);
    reqwest::Identity::from_pem(&pem).map_err(|e| InventoryError::Config {
        message: format!(
            "invalid client certificate/key pair ({}, {}): {e}",
            cert_path.display(),
            key_path.display()
        ),
    })
}

fn read_pem(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| InventoryError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
