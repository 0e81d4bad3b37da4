// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::state::TeamId;

/// A single rally winner.
pub fn team() -> impl Strategy<Value = TeamId> {
    prop_oneof![Just(0u8), Just(1u8)]
}

/// Up to `max_len` rally winners. Long enough sequences finish the match.
pub fn rallies(max_len: usize) -> impl Strategy<Value = Vec<TeamId>> {
    prop::collection::vec(team(), 0..=max_len)
}

/// Rallies biased towards one side, so sets regularly run to 21 instead of
/// stalling in long deuces.
pub fn lopsided_rallies(max_len: usize) -> impl Strategy<Value = Vec<TeamId>> {
    prop::collection::vec(
        prop_oneof![3 => Just(0u8), 1 => Just(1u8)],
        0..=max_len,
    )
}

/// A final set score `(winner_points, loser_points)` below the cap that a set
/// can actually end on: 21 against at most 19, or a two-point deuce win.
pub fn closing_score() -> impl Strategy<Value = (u8, u8)> {
    (21u8..30).prop_flat_map(|a| {
        if a == 21 {
            (Just(a), 0u8..=19).boxed()
        } else {
            (Just(a), Just(a - 2)).boxed()
        }
    })
}
