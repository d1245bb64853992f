//! Rank command implementation for the Churner CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use churner_core::RewardsProgram;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::loader::{CatalogueLoader, ExportCatalogueLoader};
use crate::{ARG_CARDS, ARG_PROGRAM, CliError, ENV_RANK_CARDS};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the cards of a JSON card export for one rewards \
                 program. Cards without a score for the program are left \
                 out; the rest are ordered by score and then by sign-up \
                 bonus, best first.",
    about = "Rank cards for a rewards program"
)]
#[ortho_config(prefix = "CHURNER")]
pub(crate) struct RankArgs {
    /// Path to the JSON card export.
    #[arg(long = ARG_CARDS, value_name = "path")]
    #[serde(default)]
    pub(crate) cards: Option<Utf8PathBuf>,
    /// Rewards program to rank for (qantas or velocity). Defaults to qantas.
    #[arg(long = ARG_PROGRAM, value_name = "name")]
    #[serde(default)]
    pub(crate) program: Option<String>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Path to the JSON card export.
    pub(crate) cards: Utf8PathBuf,
    /// Program the cards are ranked for.
    pub(crate) program: RewardsProgram,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let cards = args.cards.ok_or(CliError::MissingArgument {
            field: ARG_CARDS,
            env: ENV_RANK_CARDS,
        })?;
        let program = match args.program {
            Some(name) => name.parse()?,
            None => RewardsProgram::default(),
        };
        Ok(Self { cards, program })
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &ExportCatalogueLoader, &mut stdout)
}

pub(crate) fn run_rank_with(
    args: RankArgs,
    loader: &dyn CatalogueLoader,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    debug!("Ranking {} for {}", config.cards, config.program);
    let catalogue = loader.load(&config.cards)?;
    let listings = catalogue.listings(config.program);
    crate::write_json(writer, &listings)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
