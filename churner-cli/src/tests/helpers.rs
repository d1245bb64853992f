//! Stub loaders and catalogues shared by the CLI unit and behaviour tests.

use super::*;
use camino::Utf8Path;
use churner_core::RewardsProgram;
use churner_core::test_support::{card, offer, scored_card};
use churner_data::{Catalogue, CatalogueError};

/// Hands out a fixed catalogue regardless of the requested path.
#[derive(Debug, Clone)]
pub(super) struct StubCatalogueLoader {
    pub(super) catalogue: Catalogue,
}

impl CatalogueLoader for StubCatalogueLoader {
    fn load(&self, _path: &Utf8Path) -> Result<Catalogue, CliError> {
        Ok(self.catalogue.clone())
    }
}

/// Fails as if the export were not valid JSON.
#[derive(Debug)]
pub(super) struct BrokenCatalogueLoader;

impl CatalogueLoader for BrokenCatalogueLoader {
    fn load(&self, path: &Utf8Path) -> Result<Catalogue, CliError> {
        let source = serde_json::from_str::<serde_json::Value>("{")
            .map_err(|source| CatalogueError::Parse { source })
            .expect_err("truncated JSON must not parse");
        Err(CliError::LoadCatalogue {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Three Qantas cards and one Velocity card, in catalogue order.
pub(super) fn sample_catalogue() -> Catalogue {
    let qantas = RewardsProgram::Qantas;
    Catalogue::new(vec![
        scored_card("silver", qantas, 60.0, Some(20_000)),
        scored_card("gold", qantas, 80.0, Some(50_000)),
        scored_card("platinum", qantas, 80.0, Some(90_000))
            .with_bonus_offer(offer(RewardsProgram::Velocity, 40_000)),
        scored_card("blue", RewardsProgram::Velocity, 75.0, None),
        card("unscored"),
    ])
}

pub(super) fn sample_loader() -> StubCatalogueLoader {
    StubCatalogueLoader {
        catalogue: sample_catalogue(),
    }
}

/// Parse command output as JSON, checking it ends with a newline.
pub(super) fn parse_output(stdout: &[u8]) -> serde_json::Value {
    let text = std::str::from_utf8(stdout).expect("stdout utf-8");
    assert!(text.ends_with('\n'), "output should end with a newline");
    serde_json::from_str(text).expect("output should be JSON")
}

/// Card slugs of a ranked listing array, in output order.
pub(super) fn listing_slugs(output: &serde_json::Value) -> Vec<String> {
    output
        .as_array()
        .expect("rank output is an array")
        .iter()
        .map(|listing| {
            listing["card"]["slug"]
                .as_str()
                .expect("listing carries the card slug")
                .to_owned()
        })
        .collect()
}
