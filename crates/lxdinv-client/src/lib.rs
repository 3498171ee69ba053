//! # lxdinv-client
//!
//! Typed client for the LXD 1.0 REST API, covering the two calls the
//! inventory builder needs: listing containers and fetching a single
//! container's live state.
//!
//! The transport is deliberately simple: blocking HTTPS with a client
//! certificate/key pair, one request per call, no retries.

pub mod api;
pub mod client;

pub use api::{ApiResponse, Container, ContainerState, NetworkAddress, NetworkInterface};
pub use client::LxdClient;
