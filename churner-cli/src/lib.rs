//! Command-line interface for ranking and inspecting card exports.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod loader;
mod rank;
mod show;

pub use error::CliError;
use rank::{RankArgs, run_rank};
use show::{ShowArgs, run_show};

#[cfg(test)]
use loader::CatalogueLoader;
#[cfg(test)]
use rank::{RankConfig, config_from_layers_for_test, run_rank_with};
#[cfg(test)]
use show::{ShowConfig, run_show_with};

const ARG_CARDS: &str = "cards";
const ARG_PROGRAM: &str = "program";
const ARG_ISSUER_SLUG: &str = "issuer-slug";
const ARG_CARD_SLUG: &str = "card-slug";
const ENV_RANK_CARDS: &str = "CHURNER_CMDS_RANK_CARDS";
const ENV_SHOW_CARDS: &str = "CHURNER_CMDS_SHOW_CARDS";
const ENV_SHOW_ISSUER_SLUG: &str = "CHURNER_CMDS_SHOW_ISSUER_SLUG";
const ENV_SHOW_CARD_SLUG: &str = "CHURNER_CMDS_SHOW_CARD_SLUG";

/// Run the Churner CLI with the current process arguments and environment.
///
/// Help and version requests print and exit directly.
///
/// # Errors
/// Returns a [`CliError`] when arguments or configuration are invalid, the
/// card export cannot be loaded, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(|err| {
        if !err.use_stderr() {
            err.exit();
        }
        CliError::ArgumentParsing(err)
    })?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
        Command::Show(args) => run_show(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "churner",
    about = "Rank credit cards by their score and sign-up bonus for a rewards program",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the cards of an export for a rewards program.
    Rank(RankArgs),
    /// Print a single card, looked up by issuer and card slug.
    Show(ShowArgs),
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::Serialise)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
