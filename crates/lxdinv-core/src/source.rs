//! Backend abstraction for the inventory builder.

use lxdinv_client::{Container, ContainerState, LxdClient};
use lxdinv_common::error::Result;

/// Read-only view of a container backend.
///
/// Implementors provide the two snapshot reads the builder needs; the
/// production implementation is [`LxdClient`], tests use in-memory fakes.
pub trait ContainerSource {
    /// Returns the full container list.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or the listing
    /// call fails.
    fn containers(&self) -> Result<Vec<Container>>;

    /// Returns the live state of one container.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or the container
    /// is unknown.
    fn state(&self, name: &str) -> Result<ContainerState>;
}

impl ContainerSource for LxdClient {
    fn containers(&self) -> Result<Vec<Container>> {
        self.list_containers()
    }

    fn state(&self, name: &str) -> Result<ContainerState> {
        self.container_state(name)
    }
}
