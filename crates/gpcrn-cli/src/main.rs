mod cli;
mod commands;
mod error;
mod input;
mod logging;
mod output;

use crate::cli::{Cli, ColorWhen};
use crate::error::{CliError, Result};
use clap::Parser;
use gpcrn::data::{ReferenceStore, SCHEMES, resolve_scheme};
use std::io::IsTerminal;
use tracing::info;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("ERROR: {e}");
        std::process::exit(2);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);
    colored::control::set_override(color_enabled(&cli));

    let store = ReferenceStore::embedded()?;
    info!(proteins = store.len(), "reference data ready");

    let mut stdout = std::io::stdout().lock();

    if let Some(listing) = cli.list {
        return commands::list::run(&store, listing, &mut stdout);
    }

    // The scheme is resolved once per run, not per query.
    let scheme = resolve_scheme(&cli.scheme).ok_or_else(|| {
        let keywords: Vec<_> = SCHEMES.iter().map(|s| s.abbreviation()).collect();
        CliError::Argument(format!(
            "unrecognized scheme '{}'; use one of {}; see more with '--list schemes'",
            cli.scheme,
            keywords.join(", ")
        ))
    })?;

    commands::query::run(&cli, &store, scheme, &mut stdout)
}

/// Color policy: the flag decides, `auto` defers to the terminal and the
/// conventional `NO_COLOR` override.
pub fn color_enabled(cli: &Cli) -> bool {
    match cli.color {
        ColorWhen::Always => true,
        ColorWhen::Never => false,
        ColorWhen::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    }
}
