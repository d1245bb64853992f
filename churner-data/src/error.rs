//! Error types raised while loading a card export.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading or parsing a card export.
///
/// Individual malformed offers, scores or cards are not errors; they are
/// skipped and counted in the [`IngestReport`](crate::IngestReport).
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// Opening the export file failed.
    #[error("failed to open card export at {path}")]
    Open {
        /// Requested export path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Reading the export file failed.
    #[error("failed to read card export at {path}")]
    Read {
        /// Requested export path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The export was not valid JSON of the expected shape.
    #[error("failed to parse card export")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The export had no cards collection, or it was `null`.
    #[error("card export does not contain a cards collection")]
    MissingCards,
}
