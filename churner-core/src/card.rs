//! Card records as the ranker receives them.
//!
//! These are plain values. Deciding what counts as well formed belongs to
//! the ingestion layer; nothing here validates. Several entries for the same
//! program are tolerated, and lookups always take the first one in stored
//! order.

use std::collections::BTreeSet;

use crate::RewardsProgram;

/// The bank or lender issuing a card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Issuer {
    /// Opaque identifier from the data source.
    pub id: String,
    /// URL-safe name, unique among issuers.
    pub slug: String,
    /// Display name.
    pub name: String,
}

impl Issuer {
    /// Construct an [`Issuer`].
    #[must_use]
    pub fn new(id: impl Into<String>, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
        }
    }
}

/// A sign-up bonus granted in one rewards program.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BonusOffer {
    /// Opaque identifier from the data source.
    pub id: String,
    /// Program the bonus points are paid into.
    pub rewards_program: RewardsProgram,
    /// Bonus points granted.
    pub amount: u64,
    /// First-year fee attached to the offer, in cents.
    pub yearly_fee_cents: u64,
}

impl BonusOffer {
    /// Construct a [`BonusOffer`].
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        rewards_program: RewardsProgram,
        amount: u64,
        yearly_fee_cents: u64,
    ) -> Self {
        Self {
            id: id.into(),
            rewards_program,
            amount,
            yearly_fee_cents,
        }
    }
}

/// A precomputed desirability score for one rewards program.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoreEntry {
    /// Program the score applies to.
    pub rewards_program: RewardsProgram,
    /// Higher is better. May be fractional.
    pub score: f64,
}

impl ScoreEntry {
    /// Construct a [`ScoreEntry`].
    #[must_use]
    pub const fn new(rewards_program: RewardsProgram, score: f64) -> Self {
        Self {
            rewards_program,
            score,
        }
    }
}

/// A credit card with its bonus offers and program scores.
///
/// # Examples
/// ```
/// use churner_core::{BonusOffer, Card, Issuer, RewardsProgram, ScoreEntry};
///
/// let card = Card::new("c1", "platinum", "Platinum", Issuer::new("i1", "acme", "Acme"))
///     .with_bonus_offer(BonusOffer::new("b1", RewardsProgram::Qantas, 90_000, 45_000))
///     .with_score(ScoreEntry::new(RewardsProgram::Qantas, 72.5));
///
/// assert_eq!(card.score_for(RewardsProgram::Qantas), Some(72.5));
/// assert_eq!(card.bonus_points_for(RewardsProgram::Velocity), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Card {
    /// Opaque identifier from the data source.
    pub id: String,
    /// URL-safe name, unique within the issuer.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Optional path to the card artwork.
    pub image_path: Option<String>,
    /// The issuing bank.
    pub issuer: Issuer,
    /// Bonus offers in stored order.
    pub bonus_offers: Vec<BonusOffer>,
    /// Program scores in stored order.
    pub scores: Vec<ScoreEntry>,
}

impl Card {
    /// Construct a card with no image, offers or scores.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        name: impl Into<String>,
        issuer: Issuer,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
            image_path: None,
            issuer,
            bonus_offers: Vec::new(),
            scores: Vec::new(),
        }
    }

    /// Set the artwork path while returning `self` for chaining.
    #[must_use]
    pub fn with_image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }

    /// Append a bonus offer while returning `self` for chaining.
    #[must_use]
    pub fn with_bonus_offer(mut self, offer: BonusOffer) -> Self {
        self.bonus_offers.push(offer);
        self
    }

    /// Append a score entry while returning `self` for chaining.
    #[must_use]
    pub fn with_score(mut self, entry: ScoreEntry) -> Self {
        self.scores.push(entry);
        self
    }

    /// Report whether any score entry exists for `program`.
    #[must_use]
    pub fn is_scored_for(&self, program: RewardsProgram) -> bool {
        self.scores
            .iter()
            .any(|entry| entry.rewards_program == program)
    }

    /// Return the first score recorded for `program`.
    #[must_use]
    pub fn score_for(&self, program: RewardsProgram) -> Option<f64> {
        self.scores
            .iter()
            .find(|entry| entry.rewards_program == program)
            .map(|entry| entry.score)
    }

    /// Return the first bonus offer recorded for `program`.
    #[must_use]
    pub fn bonus_offer_for(&self, program: RewardsProgram) -> Option<&BonusOffer> {
        self.bonus_offers
            .iter()
            .find(|offer| offer.rewards_program == program)
    }

    /// Bonus points for `program`, or `0` when the card has no offer there.
    #[must_use]
    pub fn bonus_points_for(&self, program: RewardsProgram) -> u64 {
        self.bonus_offer_for(program).map_or(0, |offer| offer.amount)
    }

    /// Distinct programs the card's bonus offers pay into.
    #[must_use]
    pub fn bonus_programs(&self) -> BTreeSet<RewardsProgram> {
        self.bonus_offers
            .iter()
            .map(|offer| offer.rewards_program)
            .collect()
    }
}
