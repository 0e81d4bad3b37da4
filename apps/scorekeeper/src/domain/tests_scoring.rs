use crate::domain::rules::POINT_CAP;
use crate::domain::scoring::{apply_point, decrement_point, toggle_serving_team, PointOutcome};
use crate::domain::state::{MatchPhase, MatchState, SetResult};
use crate::domain::test_state_helpers::{alternating, score_rallies};
use crate::errors::domain::DomainError;

#[test]
fn singles_straight_21_closes_first_set() {
    let mut state = MatchState::new();
    score_rallies(&mut state, &[0; 20]);
    assert_eq!(state.scores[0].points, 20);

    let outcome = apply_point(&mut state, 0).unwrap();
    assert_eq!(
        outcome,
        PointOutcome::SetClosed {
            set_no: 1,
            winner: 0
        }
    );
    assert_eq!(state.scores[0].sets, vec![SetResult::Won]);
    assert_eq!(state.scores[1].sets, vec![SetResult::Lost]);
    assert_eq!(state.scores[0].points, 0);
    assert_eq!(state.scores[1].points, 0);
    assert_eq!(state.current_set, 2);
    assert_eq!(state.match_winner, None);
}

#[test]
fn deuce_needs_two_point_lead() {
    let mut state = MatchState::new();
    score_rallies(&mut state, &alternating(40));
    assert_eq!((state.scores[0].points, state.scores[1].points), (20, 20));

    assert_eq!(
        apply_point(&mut state, 0).unwrap(),
        PointOutcome::Scored {
            team: 0,
            points: 21
        }
    );
    assert!(state.scores[0].sets.is_empty(), "21-20 must not close the set");

    let outcome = apply_point(&mut state, 0).unwrap();
    assert!(outcome.closed_set(), "22-20 closes the set");
    assert_eq!(state.scores[0].sets, vec![SetResult::Won]);
}

#[test]
fn cap_closes_set_with_one_point_lead() {
    let mut state = MatchState::new();
    score_rallies(&mut state, &alternating(58));
    assert_eq!((state.scores[0].points, state.scores[1].points), (29, 29));

    let outcome = apply_point(&mut state, 1).unwrap();
    assert_eq!(
        outcome,
        PointOutcome::SetClosed {
            set_no: 1,
            winner: 1
        }
    );
    assert_eq!(state.scores[1].sets, vec![SetResult::Won]);
    assert!(state.scores.iter().all(|s| s.points == 0));
}

#[test]
fn twenty_nine_twenty_eight_then_cap() {
    let mut state = MatchState::new();
    score_rallies(&mut state, &alternating(56));
    score_rallies(&mut state, &[0]);
    assert_eq!((state.scores[0].points, state.scores[1].points), (29, 28));
    assert!(state.scores[0].sets.is_empty());

    let outcome = apply_point(&mut state, 0).unwrap();
    assert!(outcome.closed_set());
    assert!(state.scores.iter().all(|s| s.points < POINT_CAP));
}

#[test]
fn two_sets_win_the_match_and_freeze_it() {
    let mut state = MatchState::new();
    score_rallies(&mut state, &[1; 21]);
    score_rallies(&mut state, &[1; 20]);

    let outcome = apply_point(&mut state, 1).unwrap();
    assert_eq!(
        outcome,
        PointOutcome::MatchClosed {
            set_no: 2,
            winner: 1
        }
    );
    assert_eq!(state.match_winner, Some(1));
    assert_eq!(state.phase(), MatchPhase::Complete { winner: 1 });
    assert_eq!(state.current_set, 2, "no third set is started");

    let frozen = state.clone();
    for team in [0, 1, 0] {
        assert_eq!(apply_point(&mut state, team).unwrap(), PointOutcome::Ignored);
    }
    assert_eq!(state, frozen);
}

#[test]
fn split_sets_go_to_a_third() {
    let mut state = MatchState::new();
    score_rallies(&mut state, &[0; 21]);
    score_rallies(&mut state, &[1; 21]);
    assert_eq!(state.current_set, 3);
    assert_eq!(state.sets_won(), [1, 1]);

    score_rallies(&mut state, &[0; 21]);
    assert_eq!(state.match_winner, Some(0));
    assert_eq!(
        state.scores[0].sets,
        vec![SetResult::Won, SetResult::Lost, SetResult::Won]
    );
    assert_eq!(state.scores[0].sets.len(), state.scores[1].sets.len());
}

#[test]
fn invalid_team_fails_fast_without_mutation() {
    let mut state = MatchState::new();
    assert_eq!(
        apply_point(&mut state, 2),
        Err(DomainError::InvalidTeamIndex(2))
    );
    assert_eq!(
        decrement_point(&mut state, 9),
        Err(DomainError::InvalidTeamIndex(9))
    );
    assert_eq!(state, MatchState::new());
}

#[test]
fn invalid_team_is_rejected_even_after_match_end() {
    let mut state = MatchState::new();
    score_rallies(&mut state, &[0; 42]);
    assert!(state.is_over());
    assert_eq!(
        apply_point(&mut state, 5),
        Err(DomainError::InvalidTeamIndex(5))
    );
}

#[test]
fn decrement_at_zero_is_noop() {
    let mut state = MatchState::new();
    assert_eq!(decrement_point(&mut state, 0), Ok(false));
    assert_eq!(state, MatchState::new());
}

#[test]
fn decrement_never_reopens_or_closes_sets() {
    let mut state = MatchState::new();
    score_rallies(&mut state, &[0; 21]);
    score_rallies(&mut state, &[1; 3]);

    assert_eq!(decrement_point(&mut state, 1), Ok(true));
    assert_eq!(state.scores[1].points, 2);
    assert_eq!(state.scores[0].sets, vec![SetResult::Won]);
    assert_eq!(state.current_set, 2);
}

#[test]
fn toggle_flips_serving_team_only() {
    let mut state = MatchState::new();
    score_rallies(&mut state, &[0, 1, 1]);
    let before = state.clone();

    assert_eq!(toggle_serving_team(&mut state), 1);
    assert_eq!(state.scores, before.scores);
    assert_eq!(toggle_serving_team(&mut state), 0);
}

#[test]
fn scoring_never_changes_serving_team_on_its_own() {
    let mut state = MatchState::new();
    score_rallies(&mut state, &alternating(10));
    score_rallies(&mut state, &[1; 25]);
    assert_eq!(state.serving_team, 0);
}

#[test]
fn hand_built_overflowing_score_closes_instead_of_panicking() {
    let mut state = MatchState::new();
    state.scores[0].points = u8::MAX;
    state.scores[1].points = 3;

    let outcome = apply_point(&mut state, 0).unwrap();
    assert_eq!(
        outcome,
        PointOutcome::SetClosed {
            set_no: 1,
            winner: 0
        }
    );
    assert!(state.scores.iter().all(|s| s.points == 0));
}
