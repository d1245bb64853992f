//! Card builders shared by unit and behaviour tests across the workspace.

use crate::{BonusOffer, Card, Issuer, RewardsProgram, ScoreEntry};

/// Issuer used by fixtures that do not care which bank issues the card.
#[must_use]
pub fn acme() -> Issuer {
    Issuer::new("issuer-acme", "acme-bank", "Acme Bank")
}

/// Bonus offer with no yearly fee; the identifier encodes program and amount.
#[must_use]
pub fn offer(program: RewardsProgram, amount: u64) -> BonusOffer {
    BonusOffer::new(format!("offer-{program}-{amount}"), program, amount, 0)
}

/// Card issued by [`acme`] whose slug, name and identifier derive from `slug`.
#[must_use]
pub fn card(slug: &str) -> Card {
    Card::new(format!("card-{slug}"), slug, slug.to_uppercase(), acme())
}

/// Card scored `score` for `program`, with an optional bonus in the same
/// program.
#[must_use]
pub fn scored_card(slug: &str, program: RewardsProgram, score: f64, bonus: Option<u64>) -> Card {
    let scored = card(slug).with_score(ScoreEntry::new(program, score));
    match bonus {
        Some(amount) => scored.with_bonus_offer(offer(program, amount)),
        None => scored,
    }
}
