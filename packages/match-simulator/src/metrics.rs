//! Metrics collection and output for simulated matches.

use scorekeeper::{MatchSetup, MatchType, SetResult, TeamId};
use serde::Serialize;

use crate::simulator::MatchResult;

/// Complete match metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_id: u32,
    /// Hex-encoded 32-byte seed; absent for scripted matches.
    pub seed: Option<String>,
    pub timestamp: String,
    pub config: MatchConfig,
    pub result: MatchResultMetrics,
    pub sets: Vec<SetMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchConfig {
    pub match_type: MatchType,
    pub teams: [String; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serve_win_rate: Option<f64>,
    pub total_matches: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResultMetrics {
    pub winner: Option<TeamId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
    pub sets_won: [usize; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_set: Option<[u8; 2]>,
    pub rallies: u32,
    pub service_changes: u32,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetMetrics {
    pub set_no: u8,
    pub points: [u8; 2],
    pub winner: TeamId,
    /// Went past 20-20.
    pub deuce: bool,
    /// Ended on the 30-point cap.
    pub capped: bool,
}

pub struct MatchMetricsInput<'a> {
    pub match_id: u32,
    pub seed: Option<&'a [u8; 32]>,
    pub setup: &'a MatchSetup,
    pub serve_win_rate: Option<f64>,
    pub total_matches: u32,
    pub result: &'a MatchResult,
    pub duration_ms: f64,
}

/// Build metrics from a simulated match.
pub fn build_match_metrics(input: MatchMetricsInput<'_>) -> MatchMetrics {
    let MatchMetricsInput {
        match_id,
        seed,
        setup,
        serve_win_rate,
        total_matches,
        result,
        duration_ms,
    } = input;

    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let team_name = |team: TeamId| setup.team_display_name(team).unwrap_or_default();
    let sets_won = [0, 1].map(|team: usize| {
        result.set_results[team]
            .iter()
            .filter(|r| **r == SetResult::Won)
            .count()
    });

    MatchMetrics {
        match_id,
        seed: seed.map(hex::encode),
        timestamp,
        config: MatchConfig {
            match_type: setup.match_type(),
            teams: [team_name(0), team_name(1)],
            serve_win_rate,
            total_matches,
        },
        result: MatchResultMetrics {
            winner: result.winner,
            announcement: result.winner_announcement.clone(),
            sets_won,
            open_set: result.open_set,
            rallies: result.rallies,
            service_changes: result.service_changes,
            duration_ms,
        },
        sets: result
            .sets
            .iter()
            .map(|set| SetMetrics {
                set_no: set.set_no,
                points: set.points,
                winner: set.winner,
                deuce: set.points.iter().all(|&p| p >= 20),
                capped: set.points.contains(&30),
            })
            .collect(),
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub match_id: u32,
    pub seed: String,
    pub winner: String,
    pub team0: String,
    pub team1: String,
    pub team0_sets: usize,
    pub team1_sets: usize,
    pub set_scores: String,
    pub rallies: u32,
    pub service_changes: u32,
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(metrics: &MatchMetrics) -> Self {
        CsvSummaryRow {
            match_id: metrics.match_id,
            seed: metrics.seed.clone().unwrap_or_default(),
            winner: metrics
                .result
                .winner
                .map(|w| w.to_string())
                .unwrap_or_default(),
            team0: metrics.config.teams[0].clone(),
            team1: metrics.config.teams[1].clone(),
            team0_sets: metrics.result.sets_won[0],
            team1_sets: metrics.result.sets_won[1],
            set_scores: metrics
                .sets
                .iter()
                .map(|s| format!("{}-{}", s.points[0], s.points[1]))
                .collect::<Vec<_>>()
                .join(" "),
            rallies: metrics.result.rallies,
            service_changes: metrics.result.service_changes,
        }
    }
}
