//! Core domain types and ranking for the Churner card comparison engine.
//!
//! Cards arrive as immutable values assembled by an ingestion layer. The
//! [`rank`] function filters them to a single [`RewardsProgram`] and orders
//! them by precomputed score and sign-up bonus, while [`listings`] pairs each
//! ranked card with the per-program values a card list displays.
//!
//! Nothing in this crate performs I/O or holds shared state, so every
//! function can be called concurrently over the same card slice.
//!
//! # Examples
//!
//! ```
//! use churner_core::{BonusOffer, Card, Issuer, RewardsProgram, ScoreEntry, rank};
//!
//! let issuer = Issuer::new("iss-1", "acme-bank", "Acme Bank");
//! let low = Card::new("c1", "everyday", "Everyday", issuer.clone())
//!     .with_score(ScoreEntry::new(RewardsProgram::Velocity, 40.0));
//! let high = Card::new("c2", "platinum", "Platinum", issuer)
//!     .with_score(ScoreEntry::new(RewardsProgram::Velocity, 80.0))
//!     .with_bonus_offer(BonusOffer::new("b1", RewardsProgram::Velocity, 60_000, 29_900));
//!
//! let cards = vec![low, high];
//! let ranked = rank(&cards, RewardsProgram::Velocity);
//! let slugs: Vec<&str> = ranked.iter().map(|card| card.slug.as_str()).collect();
//! assert_eq!(slugs, ["platinum", "everyday"]);
//! assert!(rank(&cards, RewardsProgram::Qantas).is_empty());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod card;
mod listing;
mod program;
mod ranker;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(all(docsrs, not(test)), doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use card::{BonusOffer, Card, Issuer, ScoreEntry};
pub use listing::{CardListing, listings};
pub use program::{ParseRewardsProgramError, RewardsProgram};
pub use ranker::{RankKey, rank};
