//! Match setup: roster validation and player/team naming.

use serde::{Deserialize, Serialize};

use crate::domain::state::{require_team, team_players, MatchType, TeamId};
use crate::errors::domain::{DomainError, ValidationKind};

/// Validated roster for a new match.
///
/// Singles holds one name per team. Doubles holds four names ordered
/// team 0 first player, team 0 partner, team 1 first player, team 1 partner.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchSetup {
    match_type: MatchType,
    players: Vec<String>,
}

impl MatchSetup {
    /// Trim and validate the roster.
    pub fn new<S: AsRef<str>>(match_type: MatchType, players: &[S]) -> Result<Self, DomainError> {
        let expected = match_type.player_count();
        if players.len() != expected {
            return Err(DomainError::validation(
                ValidationKind::PlayerCount,
                format!(
                    "{match_type:?} needs {expected} player names, got {}",
                    players.len()
                ),
            ));
        }

        let players: Vec<String> = players
            .iter()
            .map(|name| name.as_ref().trim().to_string())
            .collect();
        if let Some(slot) = players.iter().position(|name| name.is_empty()) {
            return Err(DomainError::validation(
                ValidationKind::EmptyPlayerName,
                format!("player name in slot {slot} is empty"),
            ));
        }

        Ok(Self {
            match_type,
            players,
        })
    }

    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Names of the players on `team`: one for singles, two for doubles.
    pub fn team_members(&self, team: u8) -> Result<Vec<&str>, DomainError> {
        let team = require_team(team)?;
        Ok(match self.match_type {
            MatchType::Singles => vec![self.players[team as usize].as_str()],
            MatchType::Doubles => team_players(team)
                .iter()
                .map(|p| self.players[*p as usize].as_str())
                .collect(),
        })
    }

    /// Scoreboard heading for a team: `"A"` or `"A / B"`.
    pub fn team_display_name(&self, team: u8) -> Result<String, DomainError> {
        team_display_name(team, &self.players, self.match_type)
    }

    /// Message shown when `team` wins the match.
    pub fn winner_announcement(&self, team: TeamId) -> Result<String, DomainError> {
        let names = self.team_members(team)?.join(" and ");
        Ok(format!("{names} won the match!"))
    }
}

/// Format a team's display name from a raw roster.
///
/// Singles returns `players[team]`; doubles joins the two team members with
/// `" / "`.
pub fn team_display_name<S: AsRef<str>>(
    team: u8,
    players: &[S],
    match_type: MatchType,
) -> Result<String, DomainError> {
    let team = require_team(team)?;
    let name = |i: u8| -> Result<&str, DomainError> {
        players
            .get(i as usize)
            .map(AsRef::as_ref)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::PlayerCount,
                    format!("no player name for slot {i}"),
                )
            })
    };
    match match_type {
        MatchType::Singles => Ok(name(team)?.to_string()),
        MatchType::Doubles => {
            let [first, partner] = team_players(team);
            Ok(format!("{} / {}", name(first)?, name(partner)?))
        }
    }
}
