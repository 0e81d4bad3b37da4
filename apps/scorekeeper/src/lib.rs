#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Badminton match scorekeeping: rally-point scoring, set and match closure,
//! and doubles service rotation.

pub mod domain;
pub mod errors;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use domain::{
    Court, MatchPhase, MatchSession, MatchSetup, MatchSnapshot, MatchState, MatchTransition,
    MatchType, PlayerPosition, PointOutcome, PointReport, Role, Rotation, RotationChange,
    SetResult, TeamId,
};
pub use errors::{DomainError, ErrorCode, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
