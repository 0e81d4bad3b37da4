//! Property-based tests for set and match closure.

use proptest::prelude::*;

use crate::domain::rules::{POINT_CAP, SETS_TO_WIN_MATCH};
use crate::domain::scoring::{apply_point, PointOutcome};
use crate::domain::state::{MatchState, SetResult};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: Set-close correctness
    /// Reaching a legal final score closes the set on exactly the last rally
    /// and resets both point totals.
    #[test]
    fn prop_closing_score_closes_on_last_rally((a, b) in test_gens::closing_score()) {
        let mut state = MatchState::new();
        let mut rallies = Vec::new();
        for _ in 0..b {
            rallies.push(0u8);
            rallies.push(1u8);
        }
        rallies.extend(std::iter::repeat(0u8).take((a - b) as usize));

        let last = rallies.len() - 1;
        for (i, team) in rallies.into_iter().enumerate() {
            let outcome = apply_point(&mut state, team).expect("valid team");
            prop_assert_eq!(outcome.closed_set(), i == last, "rally {} of {}-{}", i, a, b);
        }
        prop_assert_eq!(&state.scores[0].sets, &vec![SetResult::Won]);
        prop_assert_eq!(&state.scores[1].sets, &vec![SetResult::Lost]);
        prop_assert_eq!(state.scores[0].points, 0);
        prop_assert_eq!(state.scores[1].points, 0);
    }

    /// Property: Score bookkeeping
    /// Set histories stay in sync, points never pass the cap and exactly one
    /// point moves per accepted rally.
    #[test]
    fn prop_bookkeeping_stays_consistent(rallies in test_gens::rallies(250)) {
        let mut state = MatchState::new();
        for team in rallies {
            let before = state.clone();
            let outcome = apply_point(&mut state, team).expect("valid team");
            prop_assert_eq!(state.scores[0].sets.len(), state.scores[1].sets.len());
            prop_assert!(state.scores.iter().all(|s| s.points < POINT_CAP));
            prop_assert!((1..=3).contains(&state.current_set));

            match outcome {
                PointOutcome::Ignored => prop_assert_eq!(&state, &before),
                PointOutcome::Scored { team: scorer, points } => {
                    prop_assert_eq!(scorer, team);
                    prop_assert_eq!(points, before.points(team) + 1);
                    prop_assert_eq!(state.points(1 - team), before.points(1 - team));
                }
                PointOutcome::SetClosed { winner, .. } | PointOutcome::MatchClosed { winner, .. } => {
                    prop_assert_eq!(winner, team);
                    prop_assert_eq!(state.scores[0].sets.len(), before.scores[0].sets.len() + 1);
                }
            }
        }
    }

    /// Property: Match-close correctness
    /// The match ends exactly when a team collects two sets and then freezes.
    #[test]
    fn prop_match_freezes_after_two_sets(
        rallies in test_gens::lopsided_rallies(300),
        extra in test_gens::rallies(10),
    ) {
        let mut state = MatchState::new();
        for team in rallies {
            apply_point(&mut state, team).expect("valid team");
        }

        let sets_won = state.sets_won();
        match state.match_winner {
            Some(winner) => {
                prop_assert_eq!(sets_won[winner as usize], SETS_TO_WIN_MATCH);
                prop_assert!(sets_won[1 - winner as usize] < SETS_TO_WIN_MATCH);
                let frozen = state.clone();
                for team in extra {
                    prop_assert_eq!(apply_point(&mut state, team).expect("valid team"), PointOutcome::Ignored);
                }
                prop_assert_eq!(state, frozen);
            }
            None => prop_assert!(sets_won.iter().all(|&n| n < SETS_TO_WIN_MATCH)),
        }
    }
}
