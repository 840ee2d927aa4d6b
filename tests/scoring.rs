//! Integration tests for live match scoring: games, deuce, tiebreaks, sets, finish and undo.

use tennis_tournament::{MatchEngine, MatchPhase, PointValue, Points, SetsToWin, Side};

use PointValue::{Advantage, Forty, Love, Thirty};
use Side::{One, Two};

fn score(engine: &mut MatchEngine, side: Side, n: usize) {
    for _ in 0..n {
        engine.point(side);
    }
}

/// Win one game from love-all.
fn game(engine: &mut MatchEngine, side: Side) {
    score(engine, side, 4);
}

/// Alternate games (One first) until the set stands at `n`-`n`.
fn games_all(engine: &mut MatchEngine, n: u32) {
    for _ in 0..n {
        game(engine, One);
        game(engine, Two);
    }
}

fn set(engine: &mut MatchEngine, side: Side) {
    for _ in 0..6 {
        game(engine, side);
    }
}

#[test]
fn love_game() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_THREE);
    e.point(One);
    assert_eq!(e.state().points, Points::Regular([PointValue::Fifteen, Love]));
    e.point(One);
    assert_eq!(e.state().points, Points::Regular([Thirty, Love]));
    e.point(One);
    assert_eq!(e.state().points, Points::Regular([Forty, Love]));
    e.point(One);
    assert_eq!(e.state().games, [1, 0]);
    assert_eq!(e.state().points, Points::LOVE_ALL);
    assert_eq!(e.state().stats.points_won, [4, 0]);
}

#[test]
fn game_from_forty_thirty() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_THREE);
    score(&mut e, One, 3);
    score(&mut e, Two, 2);
    assert_eq!(e.state().points, Points::Regular([Forty, Thirty]));
    e.point(One);
    assert_eq!(e.state().games, [1, 0]);
    assert_eq!(e.state().points, Points::LOVE_ALL);
}

#[test]
fn deuce_advantage_and_game() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_THREE);
    score(&mut e, One, 3);
    score(&mut e, Two, 3);
    assert_eq!(e.state().points, Points::Regular([Forty, Forty]));

    e.point(One);
    assert_eq!(e.state().points, Points::Regular([Advantage, Forty]));
    e.point(One);
    assert_eq!(e.state().games, [1, 0]);
    assert_eq!(e.state().points, Points::LOVE_ALL);
}

#[test]
fn advantage_is_cancelled_back_to_deuce() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_THREE);
    score(&mut e, One, 3);
    score(&mut e, Two, 3);
    e.point(One);
    e.point(Two);
    assert_eq!(e.state().points, Points::Regular([Forty, Forty]));
    e.point(Two);
    assert_eq!(e.state().points, Points::Regular([Forty, Advantage]));
    e.point(Two);
    assert_eq!(e.state().games, [0, 1]);
}

#[test]
fn six_all_starts_a_tiebreak() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_THREE);
    games_all(&mut e, 5);
    game(&mut e, One);
    assert_eq!(e.state().games, [6, 5]);
    assert!(!e.state().tiebreak_active);

    game(&mut e, Two);
    let s = e.state();
    assert_eq!(s.games, [6, 6]);
    assert!(s.tiebreak_active);
    assert_eq!(s.points, Points::Tiebreak([0, 0]));
    assert!(s.set_scores.is_empty());
    assert_eq!(s.current_set_index, 0);
}

#[test]
fn tiebreak_needs_two_point_margin() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_THREE);
    games_all(&mut e, 6);
    for _ in 0..6 {
        e.point(One);
        e.point(Two);
    }
    assert_eq!(e.state().points, Points::Tiebreak([6, 6]));
    e.point(One);
    assert_eq!(e.state().points, Points::Tiebreak([7, 6]));
    assert!(e.state().tiebreak_active);

    e.point(One);
    let s = e.state();
    assert_eq!(s.set_scores, vec![[7, 6]]);
    assert_eq!(s.sets, [1, 0]);
    assert_eq!(s.games, [0, 0]);
    assert_eq!(s.points, Points::LOVE_ALL);
    assert_eq!(s.current_set_index, 1);
    assert!(!s.tiebreak_active);
    assert_eq!(s.phase, MatchPhase::InProgress);
}

#[test]
fn tiebreak_seven_love() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_THREE);
    games_all(&mut e, 6);
    score(&mut e, Two, 6);
    assert_eq!(e.state().points, Points::Tiebreak([0, 6]));
    e.point(Two);
    assert_eq!(e.state().set_scores, vec![[6, 7]]);
    assert_eq!(e.state().sets, [0, 1]);
}

#[test]
fn seven_five_closes_the_set() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_THREE);
    games_all(&mut e, 5);
    game(&mut e, One);
    assert_eq!(e.state().games, [6, 5]);
    assert!(e.state().set_scores.is_empty());
    game(&mut e, One);
    assert_eq!(e.state().set_scores, vec![[7, 5]]);
    assert_eq!(e.state().sets, [1, 0]);
    assert!(!e.state().tiebreak_active);
}

#[test]
fn six_four_closes_the_set() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_THREE);
    games_all(&mut e, 4);
    game(&mut e, Two);
    assert_eq!(e.state().games, [4, 5]);
    game(&mut e, Two);
    assert_eq!(e.state().set_scores, vec![[4, 6]]);
    assert_eq!(e.state().sets, [0, 1]);
    assert_eq!(e.state().current_set_index, 1);
}

#[test]
fn best_of_three_needs_two_sets() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_THREE);
    set(&mut e, One);
    assert_eq!(e.state().phase, MatchPhase::InProgress);
    set(&mut e, Two);
    set(&mut e, One);
    let s = e.state();
    assert_eq!(s.sets, [2, 1]);
    assert_eq!(s.set_scores, vec![[6, 0], [0, 6], [6, 0]]);
    assert_eq!(s.phase, MatchPhase::ReadyToFinish);
}

#[test]
fn ready_to_finish_blocks_scoring_until_finished() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_ONE);
    set(&mut e, Two);
    assert_eq!(e.state().phase, MatchPhase::ReadyToFinish);

    let before = e.state().clone();
    let history = e.history().len();
    e.point(One);
    e.ace(Two);
    e.single_fault(One);
    e.double_fault(Two);
    assert_eq!(e.state(), &before);
    assert_eq!(e.history().len(), history);
    assert!(e.outcome().is_none());

    e.finish();
    assert_eq!(e.state().phase, MatchPhase::Finished);
    let outcome = e.outcome().unwrap();
    assert_eq!(outcome.winner, Two);
    assert_eq!(outcome.sets, [0, 1]);
    assert_eq!(outcome.set_scores, vec![[0, 6]]);
}

#[test]
fn finish_is_rejected_while_in_progress() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_ONE);
    score(&mut e, One, 2);
    e.finish();
    assert_eq!(e.state().phase, MatchPhase::InProgress);
    assert!(e.outcome().is_none());
}

#[test]
fn finished_match_is_read_only() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_ONE);
    set(&mut e, One);
    e.finish();
    let before = e.state().clone();
    assert!(!e.can_undo());
    e.undo();
    e.point(Two);
    e.finish();
    assert_eq!(e.state(), &before);
}

#[test]
fn undo_reverts_a_match_win_back_into_play() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_ONE);
    for _ in 0..5 {
        game(&mut e, One);
    }
    score(&mut e, One, 3);
    let before = e.state().clone();
    e.point(One);
    assert_eq!(e.state().phase, MatchPhase::ReadyToFinish);
    assert!(e.can_undo());

    e.undo();
    assert_eq!(e.state(), &before);
    assert_eq!(e.state().phase, MatchPhase::InProgress);
    assert_eq!(e.state().games, [5, 0]);
    assert_eq!(e.state().points, Points::Regular([Forty, Love]));
}

#[test]
fn undo_restores_tiebreak_flag() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_THREE);
    games_all(&mut e, 5);
    game(&mut e, One);
    score(&mut e, Two, 3);
    e.point(Two);
    assert!(e.state().tiebreak_active);

    e.undo();
    assert!(!e.state().tiebreak_active);
    assert_eq!(e.state().games, [6, 5]);

    e.point(Two);
    e.point(One);
    assert_eq!(e.state().points, Points::Tiebreak([1, 0]));
    e.undo();
    assert!(e.state().tiebreak_active);
    assert_eq!(e.state().points, Points::Tiebreak([0, 0]));
}

#[test]
fn undo_with_empty_history_is_a_no_op() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_FIVE);
    let before = e.state().clone();
    assert!(!e.can_undo());
    e.undo();
    assert_eq!(e.state(), &before);
}

#[test]
fn every_action_is_exactly_undone() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_THREE);
    score(&mut e, One, 3);
    score(&mut e, Two, 3);
    let deuce = e.state().clone();

    e.ace(One);
    e.undo();
    assert_eq!(e.state(), &deuce);
    e.double_fault(One);
    e.undo();
    assert_eq!(e.state(), &deuce);
    e.single_fault(Two);
    e.undo();
    assert_eq!(e.state(), &deuce);
    e.point(Two);
    e.undo();
    assert_eq!(e.state(), &deuce);
    assert_eq!(e.history().len(), 6);
}

#[test]
fn ace_scores_a_point_and_counts() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_THREE);
    for _ in 0..4 {
        e.ace(Two);
    }
    assert_eq!(e.state().games, [0, 1]);
    assert_eq!(e.state().stats.aces, [0, 4]);
    assert_eq!(e.state().stats.points_won, [0, 4]);
}

#[test]
fn single_fault_only_counts() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_THREE);
    e.single_fault(One);
    e.single_fault(One);
    assert_eq!(e.state().points, Points::LOVE_ALL);
    assert_eq!(e.state().stats.single_faults, [2, 0]);
    assert_eq!(e.state().stats.points_won, [0, 0]);
    assert_eq!(e.history().len(), 2);
}

#[test]
fn double_fault_gives_the_point_to_the_receiver() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_THREE);
    e.double_fault(One);
    assert_eq!(e.state().points, Points::Regular([Love, PointValue::Fifteen]));
    assert_eq!(e.state().stats.double_faults, [1, 0]);
    assert_eq!(e.state().stats.points_won, [0, 1]);

    // a double fault against the advantage goes back to deuce
    score(&mut e, One, 3);
    score(&mut e, Two, 2);
    e.point(One);
    assert_eq!(e.state().points, Points::Regular([Advantage, Forty]));
    e.double_fault(One);
    assert_eq!(e.state().points, Points::Regular([Forty, Forty]));
}

#[test]
fn double_fault_in_tiebreak_can_end_the_set() {
    let mut e = MatchEngine::new(SetsToWin::BEST_OF_ONE);
    games_all(&mut e, 6);
    score(&mut e, One, 6);
    e.double_fault(Two);
    assert_eq!(e.state().set_scores, vec![[7, 6]]);
    assert_eq!(e.state().phase, MatchPhase::ReadyToFinish);
    assert_eq!(e.state().stats.double_faults, [0, 1]);
}
