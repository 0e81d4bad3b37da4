//! Match score engine: points, set closure and match closure.
//!
//! All transitions are synchronous. A point that closes a set also evaluates
//! the match in the same call, so callers never see a closed set with an
//! undecided match.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::rules::{set_won, MAX_SETS, SETS_TO_WIN_MATCH};
use crate::domain::state::{opponent, require_team, MatchState, SetResult, TeamId};
use crate::errors::domain::DomainError;

/// What a call to [`apply_point`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PointOutcome {
    /// The match is already decided; no state changed.
    Ignored,
    /// The point was added and the set continues.
    Scored { team: TeamId, points: u8 },
    /// The point won set `set_no`; the next set has started at 0-0.
    SetClosed { set_no: u8, winner: TeamId },
    /// The point won set `set_no` and with it the match.
    MatchClosed { set_no: u8, winner: TeamId },
}

impl PointOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, PointOutcome::Ignored)
    }

    /// Whether the point ended a set (including the final one).
    pub fn closed_set(&self) -> bool {
        matches!(
            self,
            PointOutcome::SetClosed { .. } | PointOutcome::MatchClosed { .. }
        )
    }
}

/// Award one rally to `team`.
///
/// Fails fast on an out-of-range team index. Once the match has a winner every
/// call returns [`PointOutcome::Ignored`] without touching the state.
pub fn apply_point(state: &mut MatchState, team: u8) -> Result<PointOutcome, DomainError> {
    let team = require_team(team)?;
    if let Some(winner) = state.match_winner {
        warn!(team, winner, "point ignored: match already complete");
        return Ok(PointOutcome::Ignored);
    }

    let other = opponent(team);
    let score = &mut state.scores[team as usize];
    score.points = score.points.saturating_add(1);
    let points = state.points(team);
    let other_points = state.points(other);
    debug!(
        team,
        points,
        other_points,
        set_no = state.current_set,
        "point applied"
    );

    if !set_won(points, other_points) {
        return Ok(PointOutcome::Scored { team, points });
    }

    Ok(close_set(state, team))
}

/// Record the set for `winner`, reset points and either finish the match or
/// move on to the next set.
fn close_set(state: &mut MatchState, winner: TeamId) -> PointOutcome {
    let set_no = state.current_set;
    let loser = opponent(winner);
    info!(
        set_no,
        winner,
        winner_points = state.points(winner),
        loser_points = state.points(loser),
        "set closed"
    );

    state.scores[winner as usize].sets.push(SetResult::Won);
    state.scores[loser as usize].sets.push(SetResult::Lost);
    for score in state.scores.iter_mut() {
        score.points = 0;
    }

    if state.scores[winner as usize].sets_won() >= SETS_TO_WIN_MATCH {
        state.match_winner = Some(winner);
        info!(winner, sets_played = set_no, "match closed");
        return PointOutcome::MatchClosed { set_no, winner };
    }

    debug_assert!(set_no < MAX_SETS, "best of three cannot need a fourth set");
    state.current_set = set_no + 1;
    PointOutcome::SetClosed { set_no, winner }
}

/// Manual score correction: take one point away from `team` if it has any.
///
/// Returns whether the score changed. Never closes or reopens a set and never
/// feeds the rotation engine.
pub fn decrement_point(state: &mut MatchState, team: u8) -> Result<bool, DomainError> {
    let team = require_team(team)?;
    let score = &mut state.scores[team as usize];
    if score.points == 0 {
        return Ok(false);
    }
    score.points -= 1;
    debug!(team, points = score.points, "point corrected");
    Ok(true)
}

/// Flip the serving team without touching the score.
pub fn toggle_serving_team(state: &mut MatchState) -> TeamId {
    state.serving_team = opponent(state.serving_team);
    debug!(serving_team = state.serving_team, "serving team toggled");
    state.serving_team
}
