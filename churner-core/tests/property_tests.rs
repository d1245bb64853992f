//! Property-based tests for the ranker.
//!
//! # Invariants tested
//!
//! - **Filter:** every ranked card is scored for the program, and every
//!   scored card is ranked.
//! - **Order:** scores never increase down the list; equal scores never have
//!   increasing bonuses.
//! - **Stability:** cards with equal keys keep their input order.
//! - **Idempotence:** re-ranking the output changes nothing.


use churner_core::{RankKey, rank};
use proptest::prelude::*;

use proptest_support::{catalogue_strategy, input_position, program_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: membership is exactly the cards scored for the program.
    #[test]
    fn ranked_cards_are_exactly_the_scored_cards(
        cards in catalogue_strategy(0, 12),
        program in program_strategy(),
    ) {
        let ranked = rank(&cards, program);

        prop_assert!(ranked.iter().all(|card| card.is_scored_for(program)));
        let expected = cards.iter().filter(|card| card.is_scored_for(program)).count();
        prop_assert_eq!(ranked.len(), expected);
    }

    /// Property: adjacent cards are in best-first order.
    #[test]
    fn adjacent_cards_are_ordered(
        cards in catalogue_strategy(0, 12),
        program in program_strategy(),
    ) {
        let ranked = rank(&cards, program);

        for pair in ranked.windows(2) {
            if let [first, second] = pair {
                let first_key = RankKey::for_card(first, program);
                let second_key = RankKey::for_card(second, program);
                prop_assert!(
                    first_key.score > second_key.score
                        || (first_key.score == second_key.score
                            && first_key.bonus_points >= second_key.bonus_points),
                    "{first_key:?} ranked above {second_key:?}"
                );
            }
        }
    }

    /// Property: cards with equal keys keep their relative input order.
    #[test]
    fn equal_keys_keep_input_order(
        cards in catalogue_strategy(0, 12),
        program in program_strategy(),
    ) {
        let ranked = rank(&cards, program);

        for pair in ranked.windows(2) {
            if let [first, second] = pair {
                if RankKey::for_card(first, program) == RankKey::for_card(second, program) {
                    prop_assert!(input_position(first) < input_position(second));
                }
            }
        }
    }

    /// Property: ranking the output again yields the same sequence.
    #[test]
    fn re_ranking_is_idempotent(
        cards in catalogue_strategy(0, 12),
        program in program_strategy(),
    ) {
        let once = rank(&cards, program);
        let twice = rank(once.iter().copied(), program);

        prop_assert_eq!(once, twice);
    }
}
