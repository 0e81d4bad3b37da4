//! Domain-level error type used by the scoring and rotation engines.
//!
//! Every variant is a caller bug or an engine invariant violation. Rejecting a
//! point after the match has finished is not an error; see
//! [`crate::domain::scoring::PointOutcome::Ignored`].

use thiserror::Error;

use crate::domain::rotation::Role;
use crate::errors::error_code::ErrorCode;

/// Validation failure kinds for setup and match-type dependent actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Roster size does not match the match type (2 singles, 4 doubles).
    PlayerCount,
    /// A player name is empty after trimming.
    EmptyPlayerName,
    /// Action is not available for this match type.
    MatchTypeMismatch,
    Other,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Team index outside {0, 1}.
    #[error("invalid team index: {0}")]
    InvalidTeamIndex(u8),
    /// Player index outside {0, 1, 2, 3}.
    #[error("invalid player index: {0}")]
    InvalidPlayerIndex(u8),
    /// Zero or several players hold a role that must be unique.
    #[error("inconsistent role state: {count} players hold role {role:?}")]
    InconsistentRoleState { role: Role, count: usize },
    /// Input or business rule violation
    #[error("validation error ({0:?}): {1}")]
    Validation(ValidationKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Other, detail.into())
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidTeamIndex(_) => ErrorCode::InvalidTeamIndex,
            DomainError::InvalidPlayerIndex(_) => ErrorCode::InvalidPlayerIndex,
            DomainError::InconsistentRoleState { .. } => ErrorCode::InconsistentRoleState,
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::PlayerCount => ErrorCode::InvalidPlayerCount,
                ValidationKind::EmptyPlayerName => ErrorCode::EmptyPlayerName,
                ValidationKind::MatchTypeMismatch => ErrorCode::MatchTypeMismatch,
                ValidationKind::Other => ErrorCode::ValidationError,
            },
        }
    }
}
