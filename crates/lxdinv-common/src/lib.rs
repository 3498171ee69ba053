//! # lxdinv-common
//!
//! Shared error definitions, configuration model, and constants used across
//! the lxdinv workspace.
//!
//! This crate is the leaf of the dependency graph — it depends on no other
//! internal crate and provides the primitives that the client, core, and CLI
//! crates build upon.

pub mod config;
pub mod constants;
pub mod error;
