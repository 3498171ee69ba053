//! Inventory document assembly.
//!
//! Produces the grouped/host-variable structure Ansible expects from a
//! dynamic inventory: one entry per group with its member hosts and fixed
//! connection vars, plus a reserved `_meta.hostvars` block carrying each
//! container's address.

use std::collections::BTreeMap;

use lxdinv_common::constants;
use lxdinv_common::error::{InventoryError, Result};
use serde::Serialize;

use crate::source::ContainerSource;

/// Per-host variables attached under `_meta.hostvars`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostVars {
    /// Address Ansible connects to, the container's primary address.
    pub ansible_host: String,
}

/// The reserved `_meta` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meta {
    /// Per-host variables keyed by container name.
    pub hostvars: BTreeMap<String, HostVars>,
}

/// One group: its member hosts and fixed connection defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupEntry {
    /// Member container names, sorted.
    pub hosts: Vec<String>,
    /// Fixed connection defaults, always `{"ansible_user": "ubuntu"}`.
    pub vars: BTreeMap<String, String>,
}

impl GroupEntry {
    fn new() -> Self {
        Self {
            hosts: Vec::new(),
            vars: BTreeMap::from([(
                constants::ANSIBLE_USER_KEY.to_owned(),
                constants::ANSIBLE_USER.to_owned(),
            )]),
        }
    }
}

/// The complete dynamic-inventory document.
///
/// Group names live alongside the reserved `_meta` key in one flat JSON
/// object. Group tags are validated against the reserved key before
/// assembly, so the flattening cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryDocument {
    /// The reserved per-host variables block.
    #[serde(rename = "_meta")]
    pub meta: Meta,
    /// Groups keyed by name; always contains `all`.
    #[serde(flatten)]
    pub groups: BTreeMap<String, GroupEntry>,
}

/// The fixed reply for per-host queries.
///
/// `--list` already carries all hostvars, so this document is always empty
/// and producing it involves no backend call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostDocument {
    /// The reserved per-host variables block, always empty.
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

/// Returns the fixed empty-hostvars reply for `--host` queries.
#[must_use]
pub fn empty_hostvars_document() -> HostDocument {
    HostDocument::default()
}

/// Builds the inventory from one snapshot of the backend.
///
/// Every container lands in the `all` group plus at most one tag-derived
/// group. Hosts and groups are assembled in name order, so an unchanged
/// backend renders to byte-identical output.
///
/// # Errors
///
/// Fails without a partial result if the container listing fails, any
/// container's state lookup fails, any container lacks an addressed
/// primary interface, or a group tag collides with the reserved `_meta`
/// key.
pub fn build_inventory<S: ContainerSource>(source: &S) -> Result<InventoryDocument> {
    let containers = source.containers()?;
    tracing::debug!(count = containers.len(), "listed containers");

    let mut groups: BTreeMap<String, GroupEntry> = BTreeMap::new();
    let _ = groups.insert(constants::ALL_GROUP.to_owned(), GroupEntry::new());

    let mut hostvars = BTreeMap::new();
    for container in &containers {
        if let Some(tag) = container.group_tag() {
            if tag == constants::META_KEY {
                return Err(InventoryError::ReservedGroup {
                    name: tag.to_owned(),
                });
            }
            // A redundant `all` tag adds nothing; the implicit membership
            // below already covers it, and pushing here would duplicate
            // the host.
            if tag != constants::ALL_GROUP {
                groups
                    .entry(tag.to_owned())
                    .or_insert_with(GroupEntry::new)
                    .hosts
                    .push(container.name.clone());
            }
        }
        groups
            .get_mut(constants::ALL_GROUP)
            .ok_or_else(|| InventoryError::Config {
                message: "implicit group missing from inventory".to_owned(),
            })?
            .hosts
            .push(container.name.clone());

        // One blocking round trip per container, in listing order.
        let state = source.state(&container.name)?;
        let address = state.primary_address(&container.name, constants::PRIMARY_INTERFACE)?;
        let _ = hostvars.insert(
            container.name.clone(),
            HostVars {
                ansible_host: address.to_owned(),
            },
        );
    }

    for entry in groups.values_mut() {
        entry.hosts.sort_unstable();
    }

    tracing::info!(
        containers = containers.len(),
        groups = groups.len(),
        "inventory assembled"
    );
    Ok(InventoryDocument {
        meta: Meta { hostvars },
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lxdinv_client::{Container, ContainerState, NetworkAddress, NetworkInterface};

    struct FakeSource {
        containers: Vec<Container>,
        states: BTreeMap<String, ContainerState>,
    }

    impl ContainerSource for FakeSource {
        fn containers(&self) -> Result<Vec<Container>> {
            Ok(self.containers.clone())
        }

        fn state(&self, name: &str) -> Result<ContainerState> {
            self.states
                .get(name)
                .cloned()
                .ok_or_else(|| InventoryError::Api {
                    code: 404,
                    message: format!("no such container: {name}"),
                })
        }
    }

    fn container(name: &str, tag: Option<&str>) -> Container {
        let mut expanded_config = BTreeMap::new();
        if let Some(tag) = tag {
            let _ = expanded_config.insert(constants::GROUP_TAG_KEY.to_owned(), tag.to_owned());
        }
        Container {
            name: name.to_owned(),
            expanded_config,
            status: "Running".to_owned(),
        }
    }

    fn state(address: &str) -> ContainerState {
        ContainerState {
            network: BTreeMap::from([(
                "eth0".to_owned(),
                NetworkInterface {
                    addresses: vec![NetworkAddress {
                        family: "inet".to_owned(),
                        address: address.to_owned(),
                        netmask: "24".to_owned(),
                        scope: "global".to_owned(),
                    }],
                },
            )]),
        }
    }

    fn two_container_source() -> FakeSource {
        FakeSource {
            containers: vec![
                container("web1", Some("webservers")),
                container("db1", None),
            ],
            states: BTreeMap::from([
                ("web1".to_owned(), state("10.0.0.5")),
                ("db1".to_owned(), state("10.0.0.6")),
            ]),
        }
    }

    #[test]
    fn all_group_contains_every_container() {
        let doc = build_inventory(&two_container_source()).expect("build failed");
        assert_eq!(doc.groups["all"].hosts, vec!["db1", "web1"]);
    }

    #[test]
    fn tagged_container_joins_its_group_untagged_does_not() {
        let doc = build_inventory(&two_container_source()).expect("build failed");
        assert_eq!(doc.groups["webservers"].hosts, vec!["web1"]);
        let memberships: Vec<&String> = doc
            .groups
            .iter()
            .filter(|(_, entry)| entry.hosts.contains(&"db1".to_owned()))
            .map(|(name, _)| name)
            .collect();
        assert_eq!(memberships, vec!["all"]);
    }

    #[test]
    fn hostvars_cover_exactly_the_container_set() {
        let doc = build_inventory(&two_container_source()).expect("build failed");
        let names: Vec<&String> = doc.meta.hostvars.keys().collect();
        assert_eq!(names, vec!["db1", "web1"]);
        assert_eq!(doc.meta.hostvars["web1"].ansible_host, "10.0.0.5");
        assert_eq!(doc.meta.hostvars["db1"].ansible_host, "10.0.0.6");
    }

    #[test]
    fn every_group_gets_the_fixed_vars() {
        let doc = build_inventory(&two_container_source()).expect("build failed");
        for entry in doc.groups.values() {
            assert_eq!(
                entry.vars,
                BTreeMap::from([("ansible_user".to_owned(), "ubuntu".to_owned())])
            );
        }
    }

    #[test]
    fn empty_backend_still_yields_the_all_group() {
        let source = FakeSource {
            containers: Vec::new(),
            states: BTreeMap::new(),
        };
        let doc = build_inventory(&source).expect("build failed");
        assert_eq!(doc.groups.len(), 1);
        assert!(doc.groups["all"].hosts.is_empty());
        assert!(doc.meta.hostvars.is_empty());
    }

    #[test]
    fn shared_tag_collects_all_members_sorted() {
        let source = FakeSource {
            containers: vec![
                container("web2", Some("webservers")),
                container("web1", Some("webservers")),
            ],
            states: BTreeMap::from([
                ("web1".to_owned(), state("10.0.0.5")),
                ("web2".to_owned(), state("10.0.0.7")),
            ]),
        };
        let doc = build_inventory(&source).expect("build failed");
        assert_eq!(doc.groups["webservers"].hosts, vec!["web1", "web2"]);
    }

    #[test]
    fn redundant_all_tag_does_not_duplicate_the_host() {
        let source = FakeSource {
            containers: vec![container("web1", Some("all")), container("db1", None)],
            states: BTreeMap::from([
                ("web1".to_owned(), state("10.0.0.5")),
                ("db1".to_owned(), state("10.0.0.6")),
            ]),
        };
        let doc = build_inventory(&source).expect("build failed");
        assert_eq!(doc.groups["all"].hosts, vec!["db1", "web1"]);
        assert_eq!(doc.groups.len(), 1, "the all tag must not mint a second group");
    }

    #[test]
    fn meta_tag_is_rejected() {
        let source = FakeSource {
            containers: vec![container("rogue", Some("_meta"))],
            states: BTreeMap::from([("rogue".to_owned(), state("10.0.0.9"))]),
        };
        assert!(matches!(
            build_inventory(&source),
            Err(InventoryError::ReservedGroup { name }) if name == "_meta"
        ));
    }

    #[test]
    fn missing_interface_aborts_the_whole_build() {
        let source = FakeSource {
            containers: vec![container("web1", None), container("dark1", None)],
            states: BTreeMap::from([
                ("web1".to_owned(), state("10.0.0.5")),
                ("dark1".to_owned(), ContainerState::default()),
            ]),
        };
        assert!(matches!(
            build_inventory(&source),
            Err(InventoryError::InterfaceNotFound { container, .. }) if container == "dark1"
        ));
    }

    #[test]
    fn empty_hostvars_document_is_empty() {
        assert!(empty_hostvars_document().meta.hostvars.is_empty());
    }
}
