//! In-memory match simulator.
//!
//! Drives a [`MatchSession`] rally by rally, either from a seeded random
//! source or from a fixed script, and records what happened.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scorekeeper::{
    DomainError, MatchSession, MatchSetup, MatchTransition, MatchType, SetResult, TeamId,
};
use tracing::debug;

/// Where rally winners come from.
pub enum RallySource {
    /// Serving side wins each rally with probability `serve_win_rate`.
    Random {
        rng: ChaCha8Rng,
        serve_win_rate: f64,
    },
    /// Fixed sequence of rally winners.
    Scripted { rallies: Vec<TeamId>, next: usize },
}

impl RallySource {
    pub fn random(seed: [u8; 32], serve_win_rate: f64) -> Self {
        RallySource::Random {
            rng: ChaCha8Rng::from_seed(seed),
            serve_win_rate: serve_win_rate.clamp(0.0, 1.0),
        }
    }

    pub fn scripted(rallies: Vec<TeamId>) -> Self {
        RallySource::Scripted { rallies, next: 0 }
    }

    /// Winner of the next rally, or `None` when a script runs out.
    fn next_winner(&mut self, serving_team: TeamId) -> Option<TeamId> {
        match self {
            RallySource::Random {
                rng,
                serve_win_rate,
            } => {
                if rng.random_bool(*serve_win_rate) {
                    Some(serving_team)
                } else {
                    Some(1 - serving_team)
                }
            }
            RallySource::Scripted { rallies, next } => {
                let winner = rallies.get(*next).copied();
                *next += 1;
                winner
            }
        }
    }
}

/// Parse a rally script such as `"0,1,1,0"` or `"0110"`.
pub fn parse_rallies(script: &str) -> Result<Vec<TeamId>, SimulatorError> {
    script
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            other => Err(SimulatorError::InvalidScript(format!(
                "unexpected character {other:?}; use 0 and 1"
            ))),
        })
        .collect()
}

/// Final score of one completed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetScore {
    pub set_no: u8,
    pub points: [u8; 2],
    pub winner: TeamId,
}

/// Result of simulating one match.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// `None` when a script ended before the match did.
    pub winner: Option<TeamId>,
    pub winner_announcement: Option<String>,
    pub sets: Vec<SetScore>,
    pub set_results: [Vec<SetResult>; 2],
    /// Points of the unfinished set, if any.
    pub open_set: Option<[u8; 2]>,
    pub rallies: u32,
    pub service_changes: u32,
}

/// In-memory match simulator.
pub struct Simulator {
    session: MatchSession,
    source: RallySource,
}

impl Simulator {
    pub fn new(setup: MatchSetup, source: RallySource) -> Result<Self, SimulatorError> {
        Ok(Self {
            session: MatchSession::new(setup)?,
            source,
        })
    }

    /// Play until the match ends or the rally source runs dry.
    pub fn simulate_match(mut self) -> Result<MatchResult, SimulatorError> {
        let mut sets = Vec::new();
        let mut rallies = 0u32;
        let mut service_changes = 0u32;

        while self.session.match_winner().is_none() {
            let Some(team) = self.source.next_winner(self.session.serving_team()) else {
                break;
            };
            let points_before = [self.session.points(0)?, self.session.points(1)?];
            let report = self.session.apply_point(team)?;
            rallies += 1;

            for transition in &report.transitions {
                match *transition {
                    MatchTransition::SetClosed { set_no, winner } => {
                        let mut points = points_before;
                        points[winner as usize] += 1;
                        sets.push(SetScore {
                            set_no,
                            points,
                            winner,
                        });
                    }
                    MatchTransition::ServiceChanged { .. } => service_changes += 1,
                    MatchTransition::PointScored { .. } | MatchTransition::MatchEnded { .. } => {}
                }
            }
            // Singles has no rotation; service goes to whoever won the rally.
            if self.session.match_type() == MatchType::Singles
                && report.match_ended().is_none()
                && team != self.session.serving_team()
            {
                self.session.toggle_server()?;
                service_changes += 1;
            }
            debug!(rally = rallies, team, outcome = ?report.outcome, "rally simulated");
        }

        let state = self.session.state();
        let open_set = match state.match_winner {
            Some(_) => None,
            None => Some([state.scores[0].points, state.scores[1].points]),
        };
        Ok(MatchResult {
            winner: state.match_winner,
            winner_announcement: self.session.winner_announcement()?,
            sets,
            set_results: [state.scores[0].sets.clone(), state.scores[1].sets.clone()],
            open_set,
            rallies,
            service_changes,
        })
    }
}

#[derive(Debug)]
pub enum SimulatorError {
    /// Domain logic error
    Domain(DomainError),
    /// Malformed rally script
    InvalidScript(String),
}

impl From<DomainError> for SimulatorError {
    fn from(err: DomainError) -> Self {
        SimulatorError::Domain(err)
    }
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::Domain(err) => write!(f, "Domain error ({}): {err}", err.code()),
            SimulatorError::InvalidScript(msg) => write!(f, "Invalid rally script: {msg}"),
        }
    }
}

impl std::error::Error for SimulatorError {}
