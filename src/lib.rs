//! Facade crate for the Churner card ranking engine.
//!
//! This crate re-exports the core domain types and ranker, and exposes card
//! export ingestion behind the `data` feature.

#![forbid(unsafe_code)]

pub use churner_core::{
    BonusOffer, Card, CardListing, Issuer, ParseRewardsProgramError, RankKey, RewardsProgram,
    ScoreEntry, listings, rank,
};

#[cfg(feature = "test-support")]
pub use churner_core::test_support;

#[cfg(feature = "data")]
pub use churner_data::{Catalogue, CatalogueError, IngestReport, load_catalogue, parse_catalogue};
