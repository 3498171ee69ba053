//! # lxdinv-core
//!
//! The inventory builder: takes a snapshot of the containers known to a
//! backend, derives group memberships from the `user.ansible.group` config
//! key, resolves each container's primary address, and assembles the
//! Ansible dynamic-inventory JSON document.
//!
//! The backend sits behind the [`ContainerSource`] trait so the builder can
//! be exercised against an in-memory source in tests.

pub mod inventory;
pub mod render;
pub mod source;

pub use inventory::{
    GroupEntry, HostDocument, HostVars, InventoryDocument, Meta, build_inventory,
    empty_hostvars_document,
};
pub use render::render;
pub use source::ContainerSource;
