//! Public snapshot API for rendering a match without exposing engine internals.

use serde::{Deserialize, Serialize};

use crate::domain::rotation::{Court, Role, Rotation};
use crate::domain::rules::set_label;
use crate::domain::setup::MatchSetup;
use crate::domain::state::{team_of, MatchState, MatchType, PlayerIndex, SetResult, TeamId};
use crate::errors::domain::DomainError;

/// One team's scoreboard card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPublic {
    pub team: TeamId,
    pub display_name: String,
    pub points: u8,
    pub sets_won: usize,
    pub set_results: Vec<SetResult>,
    pub serving: bool,
}

/// One doubles player's place on court.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub player: PlayerIndex,
    pub name: String,
    pub team: TeamId,
    pub court: Court,
    pub role: Role,
}

/// Top-level snapshot handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub match_type: MatchType,
    pub teams: [TeamPublic; 2],
    pub current_set: u8,
    /// E.g. `"Set 2 • Best of 3"`.
    pub set_label: String,
    pub serving_team: TeamId,
    pub match_winner: Option<TeamId>,
    /// Doubles only: all four players in slot order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<PlayerPublic>>,
}

impl MatchSnapshot {
    pub fn build(
        setup: &MatchSetup,
        state: &MatchState,
        rotation: Option<&Rotation>,
    ) -> Result<Self, DomainError> {
        let team = |team: TeamId| -> Result<TeamPublic, DomainError> {
            let score = &state.scores[team as usize];
            Ok(TeamPublic {
                team,
                display_name: setup.team_display_name(team)?,
                points: score.points,
                sets_won: score.sets_won(),
                set_results: score.sets.clone(),
                serving: state.serving_team == team,
            })
        };

        let players = rotation
            .map(|rotation| {
                rotation.check_invariants()?;
                Ok::<_, DomainError>(
                    rotation
                        .positions()
                        .iter()
                        .zip(setup.players())
                        .enumerate()
                        .map(|(slot, (position, name))| {
                            let player = slot as PlayerIndex;
                            PlayerPublic {
                                player,
                                name: name.clone(),
                                team: team_of(player),
                                court: position.court,
                                role: position.role,
                            }
                        })
                        .collect(),
                )
            })
            .transpose()?;

        Ok(Self {
            match_type: setup.match_type(),
            teams: [team(0)?, team(1)?],
            current_set: state.current_set,
            set_label: set_label(state.current_set),
            serving_team: state.serving_team,
            match_winner: state.match_winner,
            players,
        })
    }

    /// Serialize for the presentation layer.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
