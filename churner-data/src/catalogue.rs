//! An ingested, immutable set of cards.

use churner_core::{Card, CardListing, RewardsProgram, listings, rank};

use crate::IngestReport;

/// Cards in export order, plus what was skipped while building them.
///
/// # Examples
/// ```
/// use churner_core::RewardsProgram;
/// use churner_data::parse_catalogue;
///
/// # fn main() -> Result<(), churner_data::CatalogueError> {
/// let catalogue = parse_catalogue(r#"{"cards": {"edges": []}}"#)?;
/// assert!(catalogue.is_empty());
/// assert!(catalogue.rank(RewardsProgram::Qantas).is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalogue {
    cards: Vec<Card>,
    report: IngestReport,
}

impl Catalogue {
    /// Wrap already-typed cards. The report records them all as kept.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        let report = IngestReport {
            cards: cards.len(),
            ..IngestReport::default()
        };
        Self { cards, report }
    }

    pub(crate) const fn with_report(cards: Vec<Card>, report: IngestReport) -> Self {
        Self { cards, report }
    }

    /// Cards in export order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Report whether the catalogue holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// What ingestion kept and skipped.
    #[must_use]
    pub const fn report(&self) -> &IngestReport {
        &self.report
    }

    /// Rank the catalogue for `program`; see [`churner_core::rank`].
    #[must_use]
    pub fn rank(&self, program: RewardsProgram) -> Vec<&Card> {
        rank(&self.cards, program)
    }

    /// Ranked listings for `program`; see [`churner_core::listings`].
    #[must_use]
    pub fn listings(&self, program: RewardsProgram) -> Vec<CardListing<'_>> {
        listings(&self.cards, program)
    }

    /// Find a card by its issuer's slug and its own slug.
    ///
    /// Card slugs are only unique within an issuer, so both are required.
    #[must_use]
    pub fn find(&self, issuer_slug: &str, card_slug: &str) -> Option<&Card> {
        self.cards
            .iter()
            .find(|card| card.issuer.slug == issuer_slug && card.slug == card_slug)
    }
}

impl FromIterator<Card> for Catalogue {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
