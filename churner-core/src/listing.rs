//! Ranked cards paired with the values a card list shows for them.
//!
//! A [`CardListing`] is data, not presentation: it carries the score, bonus
//! and fee picked out for the selected program and leaves formatting to the
//! renderer.

use crate::{Card, RankKey, RewardsProgram, rank};

/// A ranked card together with its values for one program.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CardListing<'a> {
    /// The ranked card.
    pub card: &'a Card,
    /// Program the values below were taken from.
    pub rewards_program: RewardsProgram,
    /// First score for the program, `0.0` when there is none or it is `-0.0`.
    pub score: f64,
    /// First bonus amount for the program, `0` when there is none.
    pub bonus_points: u64,
    /// Yearly fee of the same offer, `0` when there is none.
    pub yearly_fee_cents: u64,
    /// Whether the card's offers pay into more than one program.
    pub has_multiple_programs: bool,
}

impl<'a> CardListing<'a> {
    /// Pick out `card`'s values for `program`.
    ///
    /// # Examples
    /// ```
    /// use churner_core::{BonusOffer, Card, CardListing, Issuer, RewardsProgram, ScoreEntry};
    ///
    /// let card = Card::new("c1", "gold", "Gold", Issuer::new("i1", "acme", "Acme"))
    ///     .with_bonus_offer(BonusOffer::new("b1", RewardsProgram::Qantas, 80_000, 39_500))
    ///     .with_bonus_offer(BonusOffer::new("b2", RewardsProgram::Velocity, 60_000, 39_500))
    ///     .with_score(ScoreEntry::new(RewardsProgram::Qantas, 64.0));
    ///
    /// let listing = CardListing::new(&card, RewardsProgram::Qantas);
    /// assert_eq!(listing.bonus_points, 80_000);
    /// assert_eq!(listing.yearly_fee_cents, 39_500);
    /// assert!(listing.has_multiple_programs);
    /// ```
    #[must_use]
    pub fn new(card: &'a Card, program: RewardsProgram) -> Self {
        let offer = card.bonus_offer_for(program);
        Self {
            card,
            rewards_program: program,
            score: RankKey::for_card(card, program).score,
            bonus_points: offer.map_or(0, |found| found.amount),
            yearly_fee_cents: offer.map_or(0, |found| found.yearly_fee_cents),
            has_multiple_programs: card.bonus_programs().len() > 1,
        }
    }
}

/// Rank `cards` for `program` and describe each ranked card.
///
/// The order and membership are exactly those of [`rank`].
pub fn listings<'a, I>(cards: I, program: RewardsProgram) -> Vec<CardListing<'a>>
where
    I: IntoIterator<Item = &'a Card>,
{
    rank(cards, program)
        .into_iter()
        .map(|card| CardListing::new(card, program))
        .collect()
}
