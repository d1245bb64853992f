//! Error types emitted by the Churner CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use churner_core::ParseRewardsProgramError;
use churner_data::CatalogueError;
use thiserror::Error;

/// Errors emitted by the Churner CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing flag or positional argument.
        field: &'static str,
        /// Environment variable that can supply it instead.
        env: &'static str,
    },
    /// The selected rewards program is not offered.
    #[error(transparent)]
    UnknownProgram(#[from] ParseRewardsProgramError),
    /// Loading the card export failed.
    #[error("failed to load card export at {path}")]
    LoadCatalogue {
        /// Export path that was requested.
        path: Utf8PathBuf,
        /// Underlying loading error.
        #[source]
        source: CatalogueError,
    },
    /// No card matched the requested issuer and card slugs.
    #[error("no card {card_slug:?} from issuer {issuer_slug:?} in {path:?}")]
    CardNotFound {
        /// Export path that was searched.
        path: Utf8PathBuf,
        /// Requested issuer slug.
        issuer_slug: String,
        /// Requested card slug.
        card_slug: String,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output")]
    Serialise(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output")]
    WriteOutput(#[source] std::io::Error),
}
