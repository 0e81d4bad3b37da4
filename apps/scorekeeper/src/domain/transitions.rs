//! Edge-triggered match events derived from before/after snapshots.
//!
//! The presentation layer consumes these as notifications; `MatchEnded` is the
//! match-end message carrying the winning team.

use serde::{Deserialize, Serialize};

use crate::domain::rules::TEAMS;
use crate::domain::state::{MatchState, SetResult, TeamId};

/// The parts of [`MatchState`] that transitions are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchLifecycleView {
    pub points: [u8; TEAMS],
    pub sets: [Vec<SetResult>; TEAMS],
    pub current_set: u8,
    pub serving_team: TeamId,
    pub match_winner: Option<TeamId>,
}

impl MatchLifecycleView {
    pub fn of(state: &MatchState) -> Self {
        Self {
            points: [state.scores[0].points, state.scores[1].points],
            sets: [state.scores[0].sets.clone(), state.scores[1].sets.clone()],
            current_set: state.current_set,
            serving_team: state.serving_team,
            match_winner: state.match_winner,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MatchTransition {
    /// Edge-triggered: a rally was won by `team`.
    PointScored { team: TeamId },
    /// Edge-triggered: set `set_no` finished.
    SetClosed { set_no: u8, winner: TeamId },
    /// Edge-triggered: the serving team changed.
    ServiceChanged { serving_team: TeamId },
    /// Edge-triggered: the match finished.
    MatchEnded { winner: TeamId },
}

/// Derive transitions from before/after lifecycle state.
pub fn derive_match_transitions(
    before: &MatchLifecycleView,
    after: &MatchLifecycleView,
) -> Vec<MatchTransition> {
    let mut transitions = Vec::new();

    // 1. Set closure (points were reset, so the set result names the scorer)
    let closed_set = after.sets[0].len() > before.sets[0].len();
    if closed_set {
        let idx = after.sets[0].len() - 1;
        let winner: TeamId = if after.sets[0][idx] == SetResult::Won {
            0
        } else {
            1
        };
        transitions.push(MatchTransition::PointScored { team: winner });
        transitions.push(MatchTransition::SetClosed {
            set_no: before.current_set,
            winner,
        });
    } else {
        // 2. Plain point
        for team in 0..TEAMS {
            if after.points[team] == before.points[team].saturating_add(1) {
                transitions.push(MatchTransition::PointScored {
                    team: team as TeamId,
                });
            }
        }
    }

    // 3. Service change
    if before.serving_team != after.serving_team {
        transitions.push(MatchTransition::ServiceChanged {
            serving_team: after.serving_team,
        });
    }

    // 4. Match end
    if let (None, Some(winner)) = (before.match_winner, after.match_winner) {
        transitions.push(MatchTransition::MatchEnded { winner });
    }

    transitions
}
