//! `lxdinv --list` — emit the full inventory document.

use lxdinv_client::LxdClient;
use lxdinv_core::{build_inventory, render};

use super::Cli;

/// Builds the inventory from the configured LXD endpoint and prints it.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed, the backend
/// cannot be queried, or rendering fails. There is no partial output: a
/// single failing container aborts the run before anything is printed.
pub fn execute(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.client_config();
    tracing::debug!(endpoint = %config.endpoint, "building inventory");

    let client = LxdClient::new(&config)?;
    let document = build_inventory(&client)?;
    println!("{}", render(&document)?);
    Ok(())
}
