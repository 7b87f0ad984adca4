//! `varahi-link`: print the deep link a form submission would open.
//!
//! Reads one JSON submission from stdin (see `varahi_site::preview`) and writes
//! the resulting URL to stdout. Logs go to stderr.

use std::io::Read;

use anyhow::Context;

use varahi_dispatch::{DispatchConfig, StdoutNavigator};

fn main() -> anyhow::Result<()> {
    varahi_observability::init();

    let config = DispatchConfig::from_env();
    tracing::info!(host = %config.host, destination = %config.destination, "dispatch configured");

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read submission from stdin")?;

    varahi_site::preview::run(&input, &config, StdoutNavigator)?;
    Ok(())
}
