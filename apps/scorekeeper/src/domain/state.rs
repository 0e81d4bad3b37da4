use serde::{Deserialize, Serialize};

use crate::domain::rules::{DOUBLES_PLAYERS, TEAMS};
use crate::errors::domain::DomainError;

pub type TeamId = u8; // 0..=1
pub type PlayerIndex = u8; // 0..=3, doubles only

/// Singles (one player per team) or doubles (two per team).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Singles,
    Doubles,
}

impl MatchType {
    /// Number of player names a roster of this type carries.
    pub const fn player_count(self) -> usize {
        match self {
            MatchType::Singles => TEAMS,
            MatchType::Doubles => DOUBLES_PLAYERS,
        }
    }
}

/// Outcome of one completed set from a single team's point of view.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetResult {
    Won,
    Lost,
}

/// Per-team score.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Points in the current set.
    pub points: u8,
    /// One entry per completed set; both teams' vectors always have equal length.
    pub sets: Vec<SetResult>,
}

impl Score {
    /// Number of sets this team has won.
    pub fn sets_won(&self) -> usize {
        self.sets.iter().filter(|r| **r == SetResult::Won).count()
    }
}

/// Observable match progression. A closed set is never observable on its own:
/// closing a set and evaluating the match happen in the same transition.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum MatchPhase {
    /// Set `set_no` (1-based) is being played.
    InProgress { set_no: u8 },
    /// Terminal: `winner` took two sets.
    Complete { winner: TeamId },
}

/// Score-keeping state of one match.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub scores: [Score; TEAMS],
    /// 1-based set number, never above 3.
    pub current_set: u8,
    pub serving_team: TeamId,
    pub match_winner: Option<TeamId>,
}

impl MatchState {
    /// Fresh match: all zero, team 0 serving, set 1.
    pub fn new() -> Self {
        Self {
            scores: [Score::default(), Score::default()],
            current_set: 1,
            serving_team: 0,
            match_winner: None,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        match self.match_winner {
            Some(winner) => MatchPhase::Complete { winner },
            None => MatchPhase::InProgress {
                set_no: self.current_set,
            },
        }
    }

    pub fn is_over(&self) -> bool {
        self.match_winner.is_some()
    }

    /// Points of `team` in the current set. `team` must already be validated.
    pub fn points(&self, team: TeamId) -> u8 {
        self.scores[team as usize].points
    }

    /// Sets won per team.
    pub fn sets_won(&self) -> [usize; TEAMS] {
        [self.scores[0].sets_won(), self.scores[1].sets_won()]
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Team / player index math (two teams, four fixed player slots).
///
/// Team 0 owns players {0, 1}; team 1 owns {2, 3}. The even index of each
/// team is its "first" player.
#[inline]
pub fn require_team(team: u8) -> Result<TeamId, DomainError> {
    if (team as usize) < TEAMS {
        Ok(team)
    } else {
        Err(DomainError::InvalidTeamIndex(team))
    }
}

#[inline]
pub fn require_player(player: u8) -> Result<PlayerIndex, DomainError> {
    if (player as usize) < DOUBLES_PLAYERS {
        Ok(player)
    } else {
        Err(DomainError::InvalidPlayerIndex(player))
    }
}

/// The other team.
#[inline]
pub fn opponent(team: TeamId) -> TeamId {
    1 - team
}

/// Team owning a player slot.
#[inline]
pub fn team_of(player: PlayerIndex) -> TeamId {
    player / 2
}

/// Partner of a player within their team.
#[inline]
pub fn teammate(player: PlayerIndex) -> PlayerIndex {
    player ^ 1
}

/// Both player slots of a team, first player first.
#[inline]
pub fn team_players(team: TeamId) -> [PlayerIndex; 2] {
    [team * 2, team * 2 + 1]
}
