//! Domain layer: pure match logic types and helpers.

pub mod rotation;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod setup;
pub mod snapshot;
pub mod state;
pub mod transitions;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use rotation::{Court, PlayerPosition, Role, Rotation, RotationChange};
pub use scoring::{apply_point, decrement_point, PointOutcome};
pub use session::{MatchSession, PointReport};
pub use setup::{team_display_name, MatchSetup};
pub use snapshot::MatchSnapshot;
pub use state::{MatchPhase, MatchState, MatchType, PlayerIndex, Score, SetResult, TeamId};
pub use transitions::MatchTransition;
