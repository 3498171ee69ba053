//! CLI argument definitions and dispatch.
//!
//! Ansible's dynamic-inventory protocol drives the surface: exactly one of
//! `--list` or `--host <name>` per invocation. Anything else gets clap's
//! usage message on stderr with nothing on stdout.

pub mod host;
pub mod list;

use std::path::PathBuf;

use clap::{Args, Parser};
use lxdinv_common::config::ClientConfig;
use lxdinv_common::constants;

/// LXD dynamic inventory for Ansible.
#[derive(Parser, Debug)]
#[command(name = constants::APP_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Invocation mode, exactly one required.
    #[command(flatten)]
    pub mode: Mode,

    /// Base URL of the LXD REST API.
    #[arg(long, env = "LXD_ENDPOINT", default_value = constants::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Path to the client certificate (defaults to ~/.config/lxc/client.crt).
    #[arg(long, env = "LXD_CLIENT_CERT", value_name = "PATH")]
    pub client_cert: Option<PathBuf>,

    /// Path to the client key (defaults to ~/.config/lxc/client.key).
    #[arg(long, env = "LXD_CLIENT_KEY", value_name = "PATH")]
    pub client_key: Option<PathBuf>,

    /// Verify the server's TLS certificate (off by default; the endpoint
    /// is an internal deployment with a self-signed certificate).
    #[arg(long)]
    pub verify_tls: bool,
}

/// The two modes of the dynamic-inventory protocol.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Mode {
    /// Emit the full inventory document.
    #[arg(long)]
    pub list: bool,

    /// Emit variables for a single host (always empty; --list already
    /// carries all hostvars).
    #[arg(long, value_name = "NAME")]
    pub host: Option<String>,
}

impl Cli {
    /// Resolves connection settings from flags, filling unset credential
    /// paths from the default location.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            endpoint: self.endpoint.clone(),
            client_cert: self
                .client_cert
                .clone()
                .unwrap_or(defaults.client_cert),
            client_key: self.client_key.clone().unwrap_or(defaults.client_key),
            verify_tls: self.verify_tls,
        }
    }
}

/// Dispatches the parsed invocation to its mode handler.
///
/// # Errors
///
/// Returns an error if the inventory cannot be built or rendered.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    if let Some(name) = cli.mode.host.clone() {
        host::execute(&name)
    } else {
        list::execute(&cli)
    }
}
