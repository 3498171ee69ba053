//! # lxdinv — LXD dynamic inventory for Ansible
//!
//! Queries an LXD daemon and prints an Ansible dynamic-inventory JSON
//! document. Invoked by Ansible with `--list` (full inventory) or
//! `--host <name>` (per-host variables, always empty here).

mod commands;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
