//! Shared types for the simulator.

use clap::ValueEnum;
use scorekeeper::MatchType;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MatchKind {
    Singles,
    Doubles,
}

impl From<MatchKind> for MatchType {
    fn from(kind: MatchKind) -> Self {
        match kind {
            MatchKind::Singles => MatchType::Singles,
            MatchKind::Doubles => MatchType::Doubles,
        }
    }
}
