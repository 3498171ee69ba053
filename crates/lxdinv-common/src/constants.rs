//! System-wide constants and default paths.

use std::path::PathBuf;

/// Container config key whose value names the container's inventory group.
pub const GROUP_TAG_KEY: &str = "user.ansible.group";

/// Implicit group every container belongs to.
pub const ALL_GROUP: &str = "all";

/// Reserved top-level inventory key holding per-host variables.
pub const META_KEY: &str = "_meta";

/// Variable name attached to every group's `vars` block.
pub const ANSIBLE_USER_KEY: &str = "ansible_user";

/// Fixed connection user attached to every group.
pub const ANSIBLE_USER: &str = "ubuntu";

/// Hostvar key carrying the container's address.
pub const ANSIBLE_HOST_KEY: &str = "ansible_host";

/// Interface whose first address becomes the container's `ansible_host`.
pub const PRIMARY_INTERFACE: &str = "eth0";

/// Default LXD endpoint queried when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://u0156.sysenv.priv:8443";

/// Client certificate filename under the credential directory.
pub const CLIENT_CERT_FILE: &str = "client.crt";

/// Client key filename under the credential directory.
pub const CLIENT_KEY_FILE: &str = "client.key";

/// Application name used in CLI output.
pub const APP_NAME: &str = "lxdinv";

/// Returns the directory holding the LXD client certificate and key,
/// `$HOME/.config/lxc` (or `%USERPROFILE%` on Windows). Falls back to a
/// relative `.config/lxc` when no home directory is set.
pub fn credential_dir() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_or_else(
            |_| PathBuf::from(".config/lxc"),
            |home| PathBuf::from(home).join(".config").join("lxc"),
        )
}
