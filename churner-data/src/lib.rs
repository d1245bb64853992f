//! Typed ingestion of card exports for the Churner engine.
//!
//! The remote data layer hands out cards as the JSON response of the
//! `CardsQuery` GraphQL query: nested `edges`/`node` connections, nullable
//! collections, and `BigInt`/`BigFloat` values encoded as strings. This crate
//! is the boundary where that shape becomes [`churner_core::Card`] values.
//!
//! Malformed records never reach the ranker. A card without an issuer, an
//! offer with an unknown program or a negative amount, or a score that is not
//! a finite number is skipped, logged through [`log`] at `warn` level, and
//! counted in the catalogue's [`IngestReport`].
//!
//! # Examples
//!
//! ```
//! use churner_core::RewardsProgram;
//! use churner_data::parse_catalogue;
//!
//! # fn main() -> Result<(), churner_data::CatalogueError> {
//! let export = r#"{
//!   "data": {"cards": {"edges": [{"node": {
//!     "id": "1", "slug": "platinum", "name": "Platinum", "imagePath": null,
//!     "issuer": {"id": "9", "slug": "acme", "name": "Acme"},
//!     "bonusPoints": {"edges": [{"node": {
//!       "id": "b1", "rewardsProgram": "qantas", "amount": 100000, "yearlyFeeCents": "45000"
//!     }}]},
//!     "scores": {"edges": [{"node": {"rewardsProgram": "qantas", "score": "88.5"}}]}
//!   }}]}}
//! }"#;
//!
//! let catalogue = parse_catalogue(export)?;
//! let listings = catalogue.listings(RewardsProgram::Qantas);
//! assert_eq!(listings.len(), 1);
//! assert_eq!(listings[0].yearly_fee_cents, 45_000);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use std::io::Read;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use log::debug;

mod catalogue;
mod error;
mod export;
mod ingest;

pub use catalogue::Catalogue;
pub use error::CatalogueError;
pub use ingest::IngestReport;

use export::RawExport;

/// Parse a card export held in memory.
///
/// # Errors
/// Returns [`CatalogueError::Parse`] when the text is not JSON of the export
/// shape and [`CatalogueError::MissingCards`] when the cards collection is
/// absent or `null`.
pub fn parse_catalogue(export: &str) -> Result<Catalogue, CatalogueError> {
    let raw: RawExport =
        serde_json::from_str(export).map_err(|source| CatalogueError::Parse { source })?;
    let connection = raw.into_cards().ok_or(CatalogueError::MissingCards)?;
    let (cards, report) = ingest::ingest_cards(connection.into_nodes());
    debug!(
        "Ingested card export: kept {} cards, skipped {} cards, {} offers, {} scores",
        report.cards, report.skipped_cards, report.skipped_offers, report.skipped_scores
    );
    Ok(Catalogue::with_report(cards, report))
}

/// Load and parse a card export from disk.
///
/// # Errors
/// Returns [`CatalogueError::Open`] or [`CatalogueError::Read`] when the file
/// cannot be read, and otherwise the errors of [`parse_catalogue`].
pub fn load_catalogue(path: &Utf8Path) -> Result<Catalogue, CatalogueError> {
    let mut file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CatalogueError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let mut export = String::new();
    file.read_to_string(&mut export)
        .map_err(|source| CatalogueError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Read {} bytes of card export from {path}", export.len());
    parse_catalogue(&export)
}
