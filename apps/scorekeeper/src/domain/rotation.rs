//! Doubles service rotation: who serves, who receives, and from which court.
//!
//! The engine owns one [`PlayerPosition`] per player slot (0..=3). It is
//! rebuilt from the fixed starting formation at the beginning of every set and
//! updated after every rally, strictly after the score engine has applied the
//! point. Court sides follow the serving team's point parity: even → right,
//! odd → left.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::rules::{DOUBLES_PLAYERS, MAX_SETS, TEAMS};
use crate::domain::state::{
    opponent, require_player, require_team, team_of, team_players, teammate, MatchState,
    PlayerIndex, Score, TeamId,
};
use crate::errors::domain::DomainError;

/// Service court, from the occupying team's own point of view.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Court {
    Left,
    Right,
}

impl Court {
    pub fn opposite(self) -> Court {
        match self {
            Court::Left => Court::Right,
            Court::Right => Court::Left,
        }
    }

    /// Court a player slot takes at the start of every set: each team's
    /// first player on the right, the partner on the left.
    pub fn starting(player: PlayerIndex) -> Court {
        if player % 2 == 0 {
            Court::Right
        } else {
            Court::Left
        }
    }

    /// Court the server stands in for a serving-team score.
    pub fn for_points(points: u8) -> Court {
        if points % 2 == 0 {
            Court::Right
        } else {
            Court::Left
        }
    }
}

/// Role of a player in the current rally.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Server,
    Receiver,
    /// Partner of the server or of the receiver.
    #[serde(rename = "none")]
    Idle,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerPosition {
    pub court: Court,
    pub role: Role,
}

/// Which side won the rally, relative to service.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RallyWinner {
    /// The serving team scored and keeps the service.
    ServingSide,
    /// The receiving team scored and takes over the service.
    ReceivingSide,
}

/// What the rotation engine did after a rally.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum RotationChange {
    /// Same server, now serving from `court`.
    ServiceHeld { server: PlayerIndex, court: Court },
    /// Service passed to `serving_team`.
    ServiceOver {
        serving_team: TeamId,
        server: PlayerIndex,
        receiver: PlayerIndex,
    },
}

/// Serving team at the start of a set.
///
/// Set 1 → team 0, set 2 → team 1, set 3 → the team with strictly more sets
/// won so far, team 0 on a tie.
pub fn serving_team_for_set(set_no: u8, scores: &[Score; TEAMS]) -> Result<TeamId, DomainError> {
    match set_no {
        1 => Ok(0),
        2 => Ok(1),
        3 => {
            let [a, b] = [scores[0].sets_won(), scores[1].sets_won()];
            Ok(if b > a { 1 } else { 0 })
        }
        other => Err(DomainError::validation_other(format!(
            "set number must be within 1..={MAX_SETS}, got {other}"
        ))),
    }
}

/// Four-player position and role assignment for one doubles set.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    positions: [PlayerPosition; DOUBLES_PLAYERS],
}

impl Rotation {
    /// Fixed starting formation for `set_no`.
    ///
    /// Each team's first player starts on the right, its partner on the left.
    /// The serving team's first player serves and the receiving team's first
    /// player receives.
    pub fn initialize_for_set(set_no: u8, scores: &[Score; TEAMS]) -> Result<Self, DomainError> {
        let serving_team = serving_team_for_set(set_no, scores)?;
        let receiving_team = opponent(serving_team);

        let [server, _] = team_players(serving_team);
        let [receiver, _] = team_players(receiving_team);
        let positions = std::array::from_fn(|slot| {
            let player = slot as PlayerIndex;
            let role = if player == server {
                Role::Server
            } else if player == receiver {
                Role::Receiver
            } else {
                Role::Idle
            };
            PlayerPosition {
                court: Court::starting(player),
                role,
            }
        });

        debug!(set_no, serving_team, server, receiver, "rotation initialized");
        Ok(Self { positions })
    }

    /// Build from explicit positions, e.g. a restored snapshot.
    ///
    /// Does not validate; call [`Rotation::check_invariants`] when the source
    /// is untrusted.
    pub fn from_positions(positions: [PlayerPosition; DOUBLES_PLAYERS]) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[PlayerPosition; DOUBLES_PLAYERS] {
        &self.positions
    }

    /// Recompute roles and courts after `scoring_team` won a rally.
    ///
    /// `state` must already contain the point. On a service change this also
    /// updates `state.serving_team`.
    pub fn on_point_scored(
        &mut self,
        state: &mut MatchState,
        scoring_team: u8,
    ) -> Result<RotationChange, DomainError> {
        let scoring_team = require_team(scoring_team)?;
        let server = self.current_server()?;
        let receiver = self.current_receiver()?;
        if team_of(server) != state.serving_team {
            return Err(DomainError::validation_other(format!(
                "server {server} does not belong to serving team {}",
                state.serving_team
            )));
        }

        let winner = if scoring_team == state.serving_team {
            RallyWinner::ServingSide
        } else {
            RallyWinner::ReceivingSide
        };

        let change = match winner {
            RallyWinner::ServingSide => self.hold_service(state, server, receiver),
            RallyWinner::ReceivingSide => self.pass_service(state, server, receiver),
        };
        debug!(?change, scoring_team, "rotation updated");
        Ok(change)
    }

    /// Serving team scored: the server switches court with their partner, then
    /// parity is enforced and the receiver is placed opposite.
    fn hold_service(
        &mut self,
        state: &MatchState,
        server: PlayerIndex,
        receiver: PlayerIndex,
    ) -> RotationChange {
        let serving_team = team_of(server);
        self.swap_team_courts(serving_team);
        self.place(server, Court::for_points(state.points(serving_team)));

        let court = self.court(server);
        self.place(receiver, court.opposite());
        RotationChange::ServiceHeld { server, court }
    }

    /// Receiving team scored: the outgoing receiver's partner serves and the
    /// outgoing server receives.
    fn pass_service(
        &mut self,
        state: &mut MatchState,
        old_server: PlayerIndex,
        old_receiver: PlayerIndex,
    ) -> RotationChange {
        let serving_team = team_of(old_receiver);
        state.serving_team = serving_team;

        for position in self.positions.iter_mut() {
            position.role = Role::Idle;
        }
        let server = teammate(old_receiver);
        let receiver = old_server;
        self.positions[server as usize].role = Role::Server;
        self.positions[receiver as usize].role = Role::Receiver;

        self.place(server, Court::for_points(state.points(serving_team)));
        let server_court = self.court(server);
        self.place(receiver, server_court.opposite());

        RotationChange::ServiceOver {
            serving_team,
            server,
            receiver,
        }
    }

    /// Swap the courts of both players of `team`; roles stay with the players.
    fn swap_team_courts(&mut self, team: TeamId) {
        let [a, b] = team_players(team);
        let court_a = self.positions[a as usize].court;
        self.positions[a as usize].court = self.positions[b as usize].court;
        self.positions[b as usize].court = court_a;
    }

    /// Move `player` to `court`, swapping with their partner if needed.
    fn place(&mut self, player: PlayerIndex, court: Court) {
        if self.court(player) != court {
            self.swap_team_courts(team_of(player));
        }
    }

    fn court(&self, player: PlayerIndex) -> Court {
        self.positions[player as usize].court
    }

    fn unique_holder(&self, role: Role) -> Result<PlayerIndex, DomainError> {
        let mut holders = self
            .positions
            .iter()
            .enumerate()
            .filter(|(_, p)| p.role == role)
            .map(|(i, _)| i as PlayerIndex);
        match (holders.next(), holders.count()) {
            (Some(player), 0) => Ok(player),
            (None, _) => Err(DomainError::InconsistentRoleState { role, count: 0 }),
            (Some(_), rest) => Err(DomainError::InconsistentRoleState {
                role,
                count: rest + 1,
            }),
        }
    }

    /// The unique serving player.
    pub fn current_server(&self) -> Result<PlayerIndex, DomainError> {
        self.unique_holder(Role::Server)
    }

    /// The unique receiving player.
    pub fn current_receiver(&self) -> Result<PlayerIndex, DomainError> {
        self.unique_holder(Role::Receiver)
    }

    /// Team of the current server.
    pub fn serving_team(&self) -> Result<TeamId, DomainError> {
        self.current_server().map(team_of)
    }

    pub fn court_of(&self, player: u8) -> Result<Court, DomainError> {
        let player = require_player(player)?;
        Ok(self.court(player))
    }

    pub fn role_of(&self, player: u8) -> Result<Role, DomainError> {
        let player = require_player(player)?;
        Ok(self.positions[player as usize].role)
    }

    pub fn is_serving(&self, player: u8) -> Result<bool, DomainError> {
        Ok(self.role_of(player)? == Role::Server)
    }

    pub fn is_receiving(&self, player: u8) -> Result<bool, DomainError> {
        Ok(self.role_of(player)? == Role::Receiver)
    }

    /// Verify the structural invariants: one server, one receiver, on
    /// different teams, and each team covering both courts.
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        let server = self.current_server()?;
        let receiver = self.current_receiver()?;
        if team_of(server) == team_of(receiver) {
            return Err(DomainError::validation_other(format!(
                "server {server} and receiver {receiver} are on the same team"
            )));
        }
        for team in 0..TEAMS as TeamId {
            let [a, b] = team_players(team);
            if self.court(a) == self.court(b) {
                return Err(DomainError::validation_other(format!(
                    "both players of team {team} stand in the {:?} court",
                    self.court(a)
                )));
            }
        }
        Ok(())
    }
}
