//! Session builders and rally drivers for integration tests.

use scorekeeper::{MatchSession, MatchSetup, MatchType, PointReport};
use scorekeeper_test_support::rallies;

pub fn singles_session(a: &str, b: &str) -> MatchSession {
    let setup = MatchSetup::new(MatchType::Singles, &[a, b]).expect("valid singles roster");
    MatchSession::new(setup).expect("session starts")
}

pub fn doubles_session(names: [&str; 4]) -> MatchSession {
    let setup = MatchSetup::new(MatchType::Doubles, &names).expect("valid doubles roster");
    MatchSession::new(setup).expect("session starts")
}

/// Award `count` rallies to `team`, returning the last report.
pub fn play(session: &mut MatchSession, team: u8, count: usize) -> Option<PointReport> {
    rallies::run(team, count)
        .into_iter()
        .map(|t| session.apply_point(t).expect("valid team"))
        .last()
}

/// Replay a `0`/`1` rally script, returning every report.
pub fn play_script(session: &mut MatchSession, script: &str) -> Vec<PointReport> {
    rallies::parse(script)
        .into_iter()
        .map(|t| session.apply_point(t).expect("valid team"))
        .collect()
}
