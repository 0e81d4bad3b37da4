//! Error codes for the scorekeeper core.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. All codes are
//! SCREAMING_SNAKE_CASE and are what the presentation layer logs or displays.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Team index outside {0, 1}
    InvalidTeamIndex,
    /// Player index outside {0, 1, 2, 3}
    InvalidPlayerIndex,
    /// Rotation engine produced zero or duplicate server/receiver roles
    InconsistentRoleState,
    /// Roster size does not match the match type
    InvalidPlayerCount,
    /// Player name is blank
    EmptyPlayerName,
    /// Action not supported for this match type
    MatchTypeMismatch,
    /// General validation error
    ValidationError,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::InvalidTeamIndex,
        ErrorCode::InvalidPlayerIndex,
        ErrorCode::InconsistentRoleState,
        ErrorCode::InvalidPlayerCount,
        ErrorCode::EmptyPlayerName,
        ErrorCode::MatchTypeMismatch,
        ErrorCode::ValidationError,
    ];

    /// Canonical string form.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidTeamIndex => "INVALID_TEAM_INDEX",
            ErrorCode::InvalidPlayerIndex => "INVALID_PLAYER_INDEX",
            ErrorCode::InconsistentRoleState => "INCONSISTENT_ROLE_STATE",
            ErrorCode::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            ErrorCode::EmptyPlayerName => "EMPTY_PLAYER_NAME",
            ErrorCode::MatchTypeMismatch => "MATCH_TYPE_MISMATCH",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
