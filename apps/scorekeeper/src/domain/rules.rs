//! Rally-point scoring constants and the set-close predicate.

pub const TEAMS: usize = 2;
pub const DOUBLES_PLAYERS: usize = 4;

/// Points needed to win a set (subject to the two-point lead).
pub const SET_POINT_TARGET: u8 = 21;
/// Required winning margin below the cap.
pub const WINNING_MARGIN: u8 = 2;
/// Hard cap: the first team to reach it wins the set outright.
pub const POINT_CAP: u8 = 30;
/// Best of three.
pub const MAX_SETS: u8 = 3;
pub const SETS_TO_WIN_MATCH: usize = 2;

/// Whether a team holding `points` against `opponent_points` has taken the set.
///
/// Evaluated after the point is applied: 21+ with a two-point lead, or exactly
/// the cap regardless of lead.
#[inline]
pub fn set_won(points: u8, opponent_points: u8) -> bool {
    (points >= SET_POINT_TARGET && points >= opponent_points.saturating_add(WINNING_MARGIN))
        || points == POINT_CAP
}

/// Label shown under the scoreboard, e.g. `"Set 2 • Best of 3"`.
pub fn set_label(set_no: u8) -> String {
    format!("Set {set_no} • Best of {MAX_SETS}")
}
