//! One match from first rally to final set, wiring the score engine and the
//! doubles rotation engine together.
//!
//! Every operation is an atomic transition: the engines run on working copies
//! and the session only commits them once everything succeeded.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::rotation::{Court, Rotation, RotationChange};
use crate::domain::scoring::{self, PointOutcome};
use crate::domain::setup::MatchSetup;
use crate::domain::snapshot::MatchSnapshot;
use crate::domain::state::{
    require_player, require_team, MatchPhase, MatchState, MatchType, PlayerIndex, TeamId,
};
use crate::domain::transitions::{derive_match_transitions, MatchLifecycleView, MatchTransition};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of awarding one rally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointReport {
    pub outcome: PointOutcome,
    /// Rotation decision for doubles rallies that did not end a set.
    pub rotation: Option<RotationChange>,
    pub transitions: Vec<MatchTransition>,
}

impl PointReport {
    /// Winner carried by the match-end notification, if this point ended it.
    pub fn match_ended(&self) -> Option<TeamId> {
        self.transitions.iter().find_map(|t| match t {
            MatchTransition::MatchEnded { winner } => Some(*winner),
            _ => None,
        })
    }
}

/// A match session, owned by a single caller.
#[derive(Debug, Clone)]
pub struct MatchSession {
    setup: MatchSetup,
    state: MatchState,
    /// Present for doubles only.
    rotation: Option<Rotation>,
}

impl MatchSession {
    /// Start a match: all zero, team 0 serving, set 1 and, for doubles, the
    /// set-1 formation.
    pub fn new(setup: MatchSetup) -> Result<Self, DomainError> {
        let mut state = MatchState::new();
        let rotation = match setup.match_type() {
            MatchType::Singles => None,
            MatchType::Doubles => {
                let rotation = Rotation::initialize_for_set(1, &state.scores)?;
                state.serving_team = rotation.serving_team()?;
                Some(rotation)
            }
        };
        info!(match_type = ?setup.match_type(), players = ?setup.players(), "match started");
        Ok(Self {
            setup,
            state,
            rotation,
        })
    }

    /// Award a rally to `team`.
    ///
    /// After the match is decided this returns an `Ignored` outcome with no
    /// transitions and leaves the session untouched.
    pub fn apply_point(&mut self, team: u8) -> Result<PointReport, DomainError> {
        let team = require_team(team)?;
        let before = MatchLifecycleView::of(&self.state);

        let mut state = self.state.clone();
        let mut rotation = self.rotation.clone();
        let outcome = scoring::apply_point(&mut state, team)?;

        let rotation_change = match (rotation.as_mut(), outcome) {
            (_, PointOutcome::Ignored) => return Ok(ignored()),
            (None, _) => None,
            (Some(rotation), PointOutcome::Scored { .. }) => {
                Some(rotation.on_point_scored(&mut state, team)?)
            }
            (Some(rotation), PointOutcome::SetClosed { .. }) => {
                *rotation = Rotation::initialize_for_set(state.current_set, &state.scores)?;
                state.serving_team = rotation.serving_team()?;
                None
            }
            // Final formation stays as it was when the last rally ended.
            (Some(_), PointOutcome::MatchClosed { .. }) => None,
        };

        let transitions = derive_match_transitions(&before, &MatchLifecycleView::of(&state));
        self.state = state;
        self.rotation = rotation;

        if let PointOutcome::MatchClosed { winner, .. } = outcome {
            let announcement = self.setup.winner_announcement(winner)?;
            info!(winner, %announcement, "match ended");
        }
        debug!(?outcome, ?rotation_change, "rally recorded");

        Ok(PointReport {
            outcome,
            rotation: rotation_change,
            transitions,
        })
    }

    /// Score correction: remove one point from `team` if it has any.
    ///
    /// The rotation is deliberately left alone, so it may no longer match the
    /// corrected score.
    pub fn decrement_point(&mut self, team: u8) -> Result<bool, DomainError> {
        scoring::decrement_point(&mut self.state, team)
    }

    /// Hand the service to the other side (singles only).
    pub fn toggle_server(&mut self) -> Result<TeamId, DomainError> {
        match self.setup.match_type() {
            MatchType::Singles => Ok(scoring::toggle_serving_team(&mut self.state)),
            MatchType::Doubles => Err(DomainError::validation(
                ValidationKind::MatchTypeMismatch,
                "service in doubles follows the rotation and cannot be toggled",
            )),
        }
    }

    pub fn setup(&self) -> &MatchSetup {
        &self.setup
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn rotation(&self) -> Option<&Rotation> {
        self.rotation.as_ref()
    }

    pub fn match_type(&self) -> MatchType {
        self.setup.match_type()
    }

    pub fn points(&self, team: u8) -> Result<u8, DomainError> {
        Ok(self.state.points(require_team(team)?))
    }

    pub fn sets_won(&self, team: u8) -> Result<usize, DomainError> {
        Ok(self.state.scores[require_team(team)? as usize].sets_won())
    }

    pub fn current_set(&self) -> u8 {
        self.state.current_set
    }

    pub fn serving_team(&self) -> TeamId {
        self.state.serving_team
    }

    pub fn match_winner(&self) -> Option<TeamId> {
        self.state.match_winner
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase()
    }

    pub fn team_display_name(&self, team: u8) -> Result<String, DomainError> {
        self.setup.team_display_name(team)
    }

    /// Match-end message once the match is decided.
    pub fn winner_announcement(&self) -> Result<Option<String>, DomainError> {
        self.state
            .match_winner
            .map(|winner| self.setup.winner_announcement(winner))
            .transpose()
    }

    /// Serving player (doubles); `None` in singles.
    pub fn current_server(&self) -> Result<Option<PlayerIndex>, DomainError> {
        self.rotation.as_ref().map(Rotation::current_server).transpose()
    }

    /// Receiving player (doubles); `None` in singles.
    pub fn current_receiver(&self) -> Result<Option<PlayerIndex>, DomainError> {
        self.rotation
            .as_ref()
            .map(Rotation::current_receiver)
            .transpose()
    }

    /// Court of a doubles player; `None` in singles.
    pub fn court_of(&self, player: u8) -> Result<Option<Court>, DomainError> {
        match &self.rotation {
            Some(rotation) => rotation.court_of(player).map(Some),
            None => {
                require_player(player)?;
                Ok(None)
            }
        }
    }

    /// Whether `player` serves. In singles the player index is the team index.
    pub fn is_serving(&self, player: u8) -> Result<bool, DomainError> {
        match &self.rotation {
            Some(rotation) => rotation.is_serving(player),
            None => Ok(require_team(player)? == self.state.serving_team),
        }
    }

    /// Whether `player` receives. In singles the player index is the team index.
    pub fn is_receiving(&self, player: u8) -> Result<bool, DomainError> {
        match &self.rotation {
            Some(rotation) => rotation.is_receiving(player),
            None => Ok(require_team(player)? != self.state.serving_team),
        }
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> Result<MatchSnapshot, DomainError> {
        MatchSnapshot::build(&self.setup, &self.state, self.rotation.as_ref())
    }
}

fn ignored() -> PointReport {
    PointReport {
        outcome: PointOutcome::Ignored,
        rotation: None,
        transitions: Vec::new(),
    }
}
