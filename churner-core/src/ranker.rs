//! Order cards by the value of their sign-up bonus for one rewards program.
//!
//! Ranking is a display concern, so it never fails and never validates.
//! Cards without a score for the program are left out entirely; a score of
//! zero is still a score and keeps the card in the list.

use std::cmp::Ordering;

use crate::{Card, RewardsProgram};

/// Sort key derived from a card for a single program.
///
/// # Examples
/// ```
/// use churner_core::{Card, Issuer, RankKey, RewardsProgram, ScoreEntry};
///
/// let card = Card::new("c1", "gold", "Gold", Issuer::new("i1", "acme", "Acme"))
///     .with_score(ScoreEntry::new(RewardsProgram::Qantas, 55.0));
/// let key = RankKey::for_card(&card, RewardsProgram::Qantas);
/// assert_eq!(key, RankKey { score: 55.0, bonus_points: 0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankKey {
    /// First score recorded for the program, `0.0` when there is none.
    pub score: f64,
    /// First bonus amount recorded for the program, `0` when there is none.
    pub bonus_points: u64,
}

impl RankKey {
    /// Extract the key for `card` under `program`.
    #[must_use]
    pub fn for_card(card: &Card, program: RewardsProgram) -> Self {
        let score = card.score_for(program).map_or(0.0, unsigned_zero);
        Self {
            score,
            bonus_points: card.bonus_points_for(program),
        }
    }

    /// Compare keys best first: higher score, then larger bonus.
    ///
    /// Scores use the IEEE-754 total order, so the comparison is a valid
    /// total order even if a non-finite score slips through.
    #[must_use]
    pub fn cmp_best_first(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.bonus_points.cmp(&self.bonus_points))
    }
}

// `total_cmp` orders -0.0 below 0.0; both mean "zero" here.
fn unsigned_zero(score: f64) -> f64 {
    if score == 0.0 { 0.0 } else { score }
}

/// Filter `cards` to those scored for `program` and order them best first.
///
/// Cards are ordered by descending score, then by descending bonus points
/// for the same program (a missing offer counts as zero). Cards with equal
/// keys keep their input order. The returned references point into the
/// input; no card is cloned or modified.
///
/// The output can be fed straight back in, and re-ranking it yields the same
/// sequence.
///
/// # Examples
/// ```
/// use churner_core::{Card, Issuer, RewardsProgram, ScoreEntry, rank};
///
/// let issuer = Issuer::new("i1", "acme", "Acme");
/// let cards = vec![
///     Card::new("a", "a", "A", issuer.clone()).with_score(ScoreEntry::new(RewardsProgram::Qantas, 0.0)),
///     Card::new("b", "b", "B", issuer).with_score(ScoreEntry::new(RewardsProgram::Qantas, 0.0)),
/// ];
///
/// let once = rank(&cards, RewardsProgram::Qantas);
/// let twice = rank(once.iter().copied(), RewardsProgram::Qantas);
/// assert_eq!(once, twice);
/// assert_eq!(once[0].slug, "a");
/// ```
pub fn rank<'a, I>(cards: I, program: RewardsProgram) -> Vec<&'a Card>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut keyed: Vec<(RankKey, &'a Card)> = cards
        .into_iter()
        .filter(|card| card.is_scored_for(program))
        .map(|card| (RankKey::for_card(card, program), card))
        .collect();
    // `sort_by` is stable; equal keys stay in input order.
    keyed.sort_by(|(left, _), (right, _)| left.cmp_best_first(right));
    keyed.into_iter().map(|(_, card)| card).collect()
}
