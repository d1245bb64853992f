//! Show command implementation for the Churner CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::loader::{CatalogueLoader, ExportCatalogueLoader};
use crate::{
    ARG_CARD_SLUG, ARG_CARDS, ARG_ISSUER_SLUG, CliError, ENV_SHOW_CARD_SLUG, ENV_SHOW_CARDS,
    ENV_SHOW_ISSUER_SLUG,
};

/// CLI arguments for the `show` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print one card of a JSON card export, with its issuer, \
                 bonus offers and scores. Cards are addressed by issuer slug \
                 and card slug, as on the card detail page.",
    about = "Print a single card"
)]
#[ortho_config(prefix = "CHURNER")]
pub(crate) struct ShowArgs {
    /// Slug of the card's issuer.
    #[arg(value_name = ARG_ISSUER_SLUG)]
    #[serde(default)]
    pub(crate) issuer_slug: Option<String>,
    /// Slug of the card.
    #[arg(value_name = ARG_CARD_SLUG)]
    #[serde(default)]
    pub(crate) card_slug: Option<String>,
    /// Path to the JSON card export.
    #[arg(long = ARG_CARDS, value_name = "path")]
    #[serde(default)]
    pub(crate) cards: Option<Utf8PathBuf>,
}

impl ShowArgs {
    pub(crate) fn into_config(self) -> Result<ShowConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ShowConfig::try_from(merged)
    }
}

/// Resolved `show` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShowConfig {
    pub(crate) cards: Utf8PathBuf,
    pub(crate) issuer_slug: String,
    pub(crate) card_slug: String,
}

impl TryFrom<ShowArgs> for ShowConfig {
    type Error = CliError;

    fn try_from(args: ShowArgs) -> Result<Self, Self::Error> {
        let issuer_slug = args.issuer_slug.ok_or(CliError::MissingArgument {
            field: ARG_ISSUER_SLUG,
            env: ENV_SHOW_ISSUER_SLUG,
        })?;
        let card_slug = args.card_slug.ok_or(CliError::MissingArgument {
            field: ARG_CARD_SLUG,
            env: ENV_SHOW_CARD_SLUG,
        })?;
        let cards = args.cards.ok_or(CliError::MissingArgument {
            field: ARG_CARDS,
            env: ENV_SHOW_CARDS,
        })?;
        Ok(Self {
            cards,
            issuer_slug,
            card_slug,
        })
    }
}

pub(crate) fn run_show(args: ShowArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_show_with(args, &ExportCatalogueLoader, &mut stdout)
}

pub(crate) fn run_show_with(
    args: ShowArgs,
    loader: &dyn CatalogueLoader,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    debug!(
        "Looking up {}/{} in {}",
        config.issuer_slug, config.card_slug, config.cards
    );
    let catalogue = loader.load(&config.cards)?;
    let card = catalogue
        .find(&config.issuer_slug, &config.card_slug)
        .ok_or_else(|| CliError::CardNotFound {
            path: config.cards.clone(),
            issuer_slug: config.issuer_slug.clone(),
            card_slug: config.card_slug.clone(),
        })?;
    crate::write_json(writer, card)
}
