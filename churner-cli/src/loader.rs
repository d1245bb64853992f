//! Seam between the commands and the card export on disk.

use camino::Utf8Path;
use churner_data::{Catalogue, load_catalogue};
use log::{debug, warn};

use crate::CliError;

/// Loads the catalogue a command operates on.
pub(crate) trait CatalogueLoader {
    fn load(&self, path: &Utf8Path) -> Result<Catalogue, CliError>;
}

/// Reads and ingests the JSON card export at the configured path.
pub(crate) struct ExportCatalogueLoader;

impl CatalogueLoader for ExportCatalogueLoader {
    fn load(&self, path: &Utf8Path) -> Result<Catalogue, CliError> {
        let catalogue = load_catalogue(path).map_err(|source| CliError::LoadCatalogue {
            path: path.to_path_buf(),
            source,
        })?;
        let report = catalogue.report();
        if report.is_clean() {
            debug!("Loaded {} cards from {path}", report.cards);
        } else {
            warn!(
                "Loaded {} cards from {path}; skipped {} cards, {} offers and {} scores",
                report.cards, report.skipped_cards, report.skipped_offers, report.skipped_scores
            );
        }
        Ok(catalogue)
    }
}
