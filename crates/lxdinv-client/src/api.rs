//! Wire types for the LXD 1.0 REST API.
//!
//! Only the fields the inventory builder consumes are modeled. Nested
//! lookups that the consumer depends on (group tag, primary address) are
//! exposed as explicit accessors with defined failure modes instead of
//! ad-hoc map traversal at the call sites.

use std::collections::BTreeMap;

use lxdinv_common::constants;
use lxdinv_common::error::{InventoryError, Result};
use serde::Deserialize;

/// Envelope wrapped around every LXD response.
///
/// Synchronous successes carry `type: "sync"` and a `metadata` payload;
/// failures carry `type: "error"` with `error`/`error_code` set.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Response kind: `sync`, `async`, or `error`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable status, e.g. `Success`.
    #[serde(default)]
    pub status: String,
    /// Numeric status code paired with `status`.
    #[serde(default)]
    pub status_code: i64,
    /// Error message, populated on `error` responses.
    #[serde(default)]
    pub error: String,
    /// Error code, populated on `error` responses.
    #[serde(default)]
    pub error_code: i64,
    /// Response payload, populated on successful responses. Missing on
    /// error envelopes, which deserializes as `None` without requiring
    /// `T: Default`.
    pub metadata: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the envelope, returning the payload or the daemon's error.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Api` if the response is an error envelope
    /// or a success envelope with no metadata.
    pub fn into_metadata(self) -> Result<T> {
        if self.kind == "error" {
            return Err(InventoryError::Api {
                code: self.error_code,
                message: self.error,
            });
        }
        let code = self.status_code;
        let kind = self.kind;
        self.metadata.ok_or_else(|| InventoryError::Api {
            code,
            message: format!("{kind} response carried no metadata"),
        })
    }
}

/// One container record as returned by `GET /1.0/containers?recursion=1`.
#[derive(Debug, Clone, Deserialize)]
pub struct Container {
    /// Unique container name.
    pub name: String,
    /// Effective configuration, profiles already merged in.
    #[serde(default)]
    pub expanded_config: BTreeMap<String, String>,
    /// Lifecycle status string, e.g. `Running`.
    #[serde(default)]
    pub status: String,
}

impl Container {
    /// Returns the container's inventory group tag, if one is configured.
    #[must_use]
    pub fn group_tag(&self) -> Option<&str> {
        self.expanded_config
            .get(constants::GROUP_TAG_KEY)
            .map(String::as_str)
    }
}

/// Live container state from `GET /1.0/containers/{name}/state`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContainerState {
    /// Network interfaces keyed by interface name.
    #[serde(default)]
    pub network: BTreeMap<String, NetworkInterface>,
}

impl ContainerState {
    /// Resolves the container's primary address: the first address bound to
    /// the given interface. This is a hard dependency on the container
    /// being running and networked.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InterfaceNotFound` if the interface is
    /// absent, or `InventoryError::NoAddress` if it carries no addresses.
    pub fn primary_address(&self, container: &str, interface: &str) -> Result<&str> {
        let iface =
            self.network
                .get(interface)
                .ok_or_else(|| InventoryError::InterfaceNotFound {
                    container: container.to_owned(),
                    interface: interface.to_owned(),
                })?;
        iface
            .addresses
            .first()
            .map(|addr| addr.address.as_str())
            .ok_or_else(|| InventoryError::NoAddress {
                container: container.to_owned(),
                interface: interface.to_owned(),
            })
    }
}

/// One network interface in a container's state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkInterface {
    /// Addresses bound to this interface, in daemon order.
    #[serde(default)]
    pub addresses: Vec<NetworkAddress>,
}

/// One address bound to an interface.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkAddress {
    /// Address family, `inet` or `inet6`.
    #[serde(default)]
    pub family: String,
    /// The address itself, without prefix length.
    pub address: String,
    /// Network mask or prefix length.
    #[serde(default)]
    pub netmask: String,
    /// Address scope, e.g. `global` or `link`.
    #[serde(default)]
    pub scope: String,
}
