//! Convert loosely-typed export records into [`Card`] values.
//!
//! This is the one place malformed data is dealt with. Records that cannot
//! be represented are skipped with a warning and counted in an
//! [`IngestReport`]; everything downstream receives well-formed cards only.

use churner_core::{
    BonusOffer, Card, Issuer, ParseRewardsProgramError, RewardsProgram, ScoreEntry,
};
use log::warn;
use thiserror::Error;

use crate::export::{RawBonusPoint, RawCard, RawConnection, RawNumeric, RawScore};

/// Counts of records kept and skipped while building a catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestReport {
    /// Cards kept.
    pub cards: usize,
    /// Cards dropped because they lacked an issuer, an identity field or a slug.
    pub skipped_cards: usize,
    /// Bonus offers dropped from otherwise valid cards.
    pub skipped_offers: usize,
    /// Score entries dropped from otherwise valid cards.
    pub skipped_scores: usize,
}

impl IngestReport {
    /// Report whether any record was skipped.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.skipped_cards == 0 && self.skipped_offers == 0 && self.skipped_scores == 0
    }
}

/// Build cards from raw export nodes, preserving their order.
pub(crate) fn ingest_cards<I>(raw_cards: I) -> (Vec<Card>, IngestReport)
where
    I: IntoIterator<Item = RawCard>,
{
    let mut report = IngestReport::default();
    let cards: Vec<Card> = raw_cards
        .into_iter()
        .filter_map(|raw| ingest_card(raw, &mut report))
        .collect();
    report.cards = cards.len();
    (cards, report)
}

fn ingest_card(raw: RawCard, report: &mut IngestReport) -> Option<Card> {
    let label = raw.id.clone().unwrap_or_else(|| "<no id>".to_owned());
    let (mut card, raw_offers, raw_scores) = match card_identity(raw) {
        Ok(parts) => parts,
        Err(reason) => {
            warn!("Skipped card: id={label} ({reason})");
            report.skipped_cards += 1;
            return None;
        }
    };

    for raw_offer in raw_offers {
        match ingest_bonus_offer(raw_offer) {
            Ok(offer) => card.bonus_offers.push(offer),
            Err(reason) => {
                warn!("Skipped bonus offer on card {}: {reason}", card.slug);
                report.skipped_offers += 1;
            }
        }
    }
    for raw_score in raw_scores {
        match ingest_score(raw_score) {
            Ok(entry) => card.scores.push(entry),
            Err(reason) => {
                warn!("Skipped score on card {}: {reason}", card.slug);
                report.skipped_scores += 1;
            }
        }
    }
    Some(card)
}

/// Build the card shell, with its raw offers and scores split off.
fn card_identity(
    raw: RawCard,
) -> Result<(Card, Vec<RawBonusPoint>, Vec<RawScore>), SkipReason> {
    let raw_issuer = raw.issuer.ok_or(SkipReason::MissingIssuer)?;
    let id = raw.id.ok_or(SkipReason::MissingField("id"))?;
    let slug = raw.slug.ok_or(SkipReason::MissingField("slug"))?;
    if slug.trim().is_empty() {
        return Err(SkipReason::EmptySlug);
    }
    let name = raw.name.ok_or(SkipReason::MissingField("name"))?;
    let issuer = Issuer::new(
        raw_issuer.id.ok_or(SkipReason::MissingField("issuer.id"))?,
        raw_issuer.slug.ok_or(SkipReason::MissingField("issuer.slug"))?,
        raw_issuer.name.ok_or(SkipReason::MissingField("issuer.name"))?,
    );

    let mut card = Card::new(id, slug, name, issuer);
    card.image_path = raw.image_path;
    // A null connection means the card has no offers (or scores) at all.
    let offers = raw
        .bonus_points
        .into_iter()
        .flat_map(RawConnection::into_nodes)
        .collect();
    let scores = raw
        .scores
        .into_iter()
        .flat_map(RawConnection::into_nodes)
        .collect();
    Ok((card, offers, scores))
}

/// Why a card, offer or score entry was dropped.
#[derive(Debug, Error)]
enum SkipReason {
    #[error("no issuer")]
    MissingIssuer,
    #[error("missing {0}")]
    MissingField(&'static str),
    #[error("empty slug")]
    EmptySlug,
    #[error("missing rewards program")]
    MissingProgram,
    #[error(transparent)]
    UnknownProgram(#[from] ParseRewardsProgramError),
    #[error("missing amount")]
    MissingAmount,
    #[error("invalid amount {0}")]
    InvalidAmount(RawNumeric),
    #[error("invalid yearly fee {0}")]
    InvalidYearlyFee(RawNumeric),
    #[error("missing score")]
    MissingScore,
    #[error("invalid score {0}")]
    InvalidScore(RawNumeric),
}

fn ingest_bonus_offer(raw: RawBonusPoint) -> Result<BonusOffer, SkipReason> {
    let id = raw.id.ok_or(SkipReason::MissingField("id"))?;
    let program = parse_program(raw.rewards_program)?;
    let amount = match raw.amount {
        None => return Err(SkipReason::MissingAmount),
        Some(value) => value.to_u64().ok_or(SkipReason::InvalidAmount(value))?,
    };
    let yearly_fee_cents = match raw.yearly_fee_cents {
        None => 0,
        Some(value) => value.to_u64().ok_or(SkipReason::InvalidYearlyFee(value))?,
    };
    Ok(BonusOffer::new(id, program, amount, yearly_fee_cents))
}

fn ingest_score(raw: RawScore) -> Result<ScoreEntry, SkipReason> {
    let program = parse_program(raw.rewards_program)?;
    let score = match raw.score {
        None => return Err(SkipReason::MissingScore),
        Some(value) => value.to_finite_f64().ok_or(SkipReason::InvalidScore(value))?,
    };
    Ok(ScoreEntry::new(program, score))
}

fn parse_program(name: Option<String>) -> Result<RewardsProgram, SkipReason> {
    let text = name.ok_or(SkipReason::MissingProgram)?;
    Ok(text.parse()?)
}
