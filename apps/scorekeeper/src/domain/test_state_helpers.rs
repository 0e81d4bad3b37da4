//! Test-only helpers for building match states and replaying rallies.

use crate::domain::rotation::{Court, PlayerPosition, Role, Rotation, RotationChange};
use crate::domain::scoring::{apply_point, PointOutcome};
use crate::domain::state::{MatchState, TeamId};

/// Apply `rallies` to a bare score state, ignoring outcomes.
pub fn score_rallies(state: &mut MatchState, rallies: &[TeamId]) {
    for &team in rallies {
        apply_point(state, team).expect("valid team index");
    }
}

/// Score one rally and, if the set continues, run the rotation engine the way
/// a session does.
pub fn doubles_rally(
    state: &mut MatchState,
    rotation: &mut Rotation,
    team: TeamId,
) -> (PointOutcome, Option<RotationChange>) {
    let outcome = apply_point(state, team).expect("valid team index");
    let change = match outcome {
        PointOutcome::Scored { .. } => Some(
            rotation
                .on_point_scored(state, team)
                .expect("rotation invariants hold"),
        ),
        _ => None,
    };
    (outcome, change)
}

/// `[(court, role)]` for all four players, for compact assertions.
pub fn formation(rotation: &Rotation) -> [(Court, Role); 4] {
    (*rotation.positions()).map(|PlayerPosition { court, role }| (court, role))
}

/// `n` rallies alternating between the teams, team 0 first.
pub fn alternating(n: usize) -> Vec<TeamId> {
    (0..n).map(|i| (i % 2) as TeamId).collect()
}
