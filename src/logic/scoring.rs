//! Live match scoring: points -> games -> sets -> match, with ace/fault counters and undo.
//!
//! [`MatchEngine`] owns one [`MatchState`] and a stack of full pre-action snapshots. Scoring
//! actions are accepted only while the match is in progress; anything else is a logged no-op,
//! so a double tap on a scoreboard cannot corrupt the score.

use crate::models::{MatchPhase, MatchState, MatchStats, PointValue, Points, SetsToWin, Side};
use serde::{Deserialize, Serialize};

/// Games per side at which the set goes to a tiebreak.
const TIEBREAK_AT: u32 = 6;
/// Games needed to take a set (with a two-game lead, or 7-5).
const GAMES_FOR_SET: u32 = 6;
/// Tiebreak points needed to take the set (with a two-point lead).
const TIEBREAK_POINTS: u32 = 7;
const WINNING_MARGIN: u32 = 2;

/// An input from the scoreboard.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "side")]
pub enum ScoringAction {
    /// Rally won by `side`.
    Point(Side),
    /// Unreturned serve by `side`; counts as a point for it.
    Ace(Side),
    /// First-serve fault by `side`; the point continues.
    SingleFault(Side),
    /// Second-serve fault by `side`; the point goes to the other side.
    DoubleFault(Side),
    Undo,
    Finish,
}

/// One entry of the undo stack.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub action: ScoringAction,
    /// State as it was before `action` was applied.
    pub before: MatchState,
}

/// Final tally of a finished match (what gets persisted).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: Side,
    pub sets: [u32; 2],
    pub set_scores: Vec<[u32; 2]>,
    pub stats: MatchStats,
}

/// Scoring state machine for a single two-sided match.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    state: MatchState,
    history: Vec<HistoryEntry>,
}

impl MatchEngine {
    pub fn new(sets_to_win: SetsToWin) -> Self {
        Self {
            state: MatchState::new(sets_to_win),
            history: Vec::new(),
        }
    }

    /// Read-only view of the current score.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.state.phase != MatchPhase::Finished && !self.history.is_empty()
    }

    /// Dispatch a scoreboard input to the matching operation.
    pub fn apply(&mut self, action: ScoringAction) -> &MatchState {
        match action {
            ScoringAction::Point(side) => self.point(side),
            ScoringAction::Ace(side) => self.ace(side),
            ScoringAction::SingleFault(side) => self.single_fault(side),
            ScoringAction::DoubleFault(side) => self.double_fault(side),
            ScoringAction::Undo => self.undo(),
            ScoringAction::Finish => self.finish(),
        }
    }

    pub fn point(&mut self, side: Side) -> &MatchState {
        if self.begin(ScoringAction::Point(side)) {
            self.state.stats.points_won[side.index()] += 1;
            self.score_point(side);
        }
        &self.state
    }

    pub fn ace(&mut self, side: Side) -> &MatchState {
        if self.begin(ScoringAction::Ace(side)) {
            self.state.stats.aces[side.index()] += 1;
            self.state.stats.points_won[side.index()] += 1;
            self.score_point(side);
        }
        &self.state
    }

    pub fn single_fault(&mut self, side: Side) -> &MatchState {
        if self.begin(ScoringAction::SingleFault(side)) {
            self.state.stats.single_faults[side.index()] += 1;
        }
        &self.state
    }

    pub fn double_fault(&mut self, side: Side) -> &MatchState {
        if self.begin(ScoringAction::DoubleFault(side)) {
            let receiver = side.other();
            self.state.stats.double_faults[side.index()] += 1;
            self.state.stats.points_won[receiver.index()] += 1;
            self.score_point(receiver);
        }
        &self.state
    }

    /// Restore the state from before the last scoring action.
    ///
    /// The tiebreak flag and phase are recomputed from the restored score, so undoing the
    /// match-winning point puts the match back in play.
    pub fn undo(&mut self) -> &MatchState {
        if self.state.phase == MatchPhase::Finished {
            log::debug!("Ignoring undo: match is finished");
            return &self.state;
        }
        let Some(entry) = self.history.pop() else {
            return &self.state;
        };
        let mut restored = entry.before;
        restored.tiebreak_active = restored.games == [TIEBREAK_AT, TIEBREAK_AT];
        restored.phase = if restored.set_winner().is_some() {
            MatchPhase::ReadyToFinish
        } else {
            MatchPhase::InProgress
        };
        log::debug!("Undid {:?}", entry.action);
        self.state = restored;
        &self.state
    }

    /// Close the match once a side has reached the sets-to-win target.
    pub fn finish(&mut self) -> &MatchState {
        if self.state.phase != MatchPhase::ReadyToFinish {
            log::debug!("Ignoring finish: match is {:?}", self.state.phase);
            return &self.state;
        }
        self.state.phase = MatchPhase::Finished;
        &self.state
    }

    /// Final tally; None until the match is finished.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        if self.state.phase != MatchPhase::Finished {
            return None;
        }
        let winner = self.state.set_winner()?;
        Some(MatchOutcome {
            winner,
            sets: self.state.sets,
            set_scores: self.state.set_scores.clone(),
            stats: self.state.stats,
        })
    }

    /// Push the pre-action snapshot. False (and nothing recorded) unless the match is in progress.
    fn begin(&mut self, action: ScoringAction) -> bool {
        if self.state.phase != MatchPhase::InProgress {
            log::debug!("Ignoring {:?}: match is {:?}", action, self.state.phase);
            return false;
        }
        self.history.push(HistoryEntry {
            action,
            before: self.state.clone(),
        });
        true
    }

    fn score_point(&mut self, scorer: Side) {
        if self.state.tiebreak_active {
            let points = match self.state.points {
                Points::Tiebreak(p) => p,
                Points::Regular(_) => [0, 0],
            };
            self.tiebreak_point(scorer, points);
        } else {
            let points = match self.state.points {
                Points::Regular(p) => p,
                Points::Tiebreak(_) => [PointValue::Love; 2],
            };
            self.regular_point(scorer, points);
        }
    }

    fn regular_point(&mut self, scorer: Side, mut points: [PointValue; 2]) {
        let (s, o) = (scorer.index(), scorer.other().index());
        if points == [PointValue::Forty, PointValue::Forty] {
            points[s] = PointValue::Advantage;
        } else if points[s] == PointValue::Advantage {
            return self.win_game(scorer);
        } else if points[o] == PointValue::Advantage {
            points = [PointValue::Forty, PointValue::Forty];
        } else {
            points[s] = points[s].successor();
            // Stepping past 40 without deuce is the game itself, not an advantage.
            if points[s] == PointValue::Advantage && points[o] != PointValue::Forty {
                return self.win_game(scorer);
            }
        }
        self.state.points = Points::Regular(points);
    }

    fn tiebreak_point(&mut self, scorer: Side, mut points: [u32; 2]) {
        let (s, o) = (scorer.index(), scorer.other().index());
        points[s] += 1;
        if points[s] >= TIEBREAK_POINTS && points[s].saturating_sub(points[o]) >= WINNING_MARGIN {
            // The tiebreak counts as the deciding game of the set.
            self.state.games[s] += 1;
            self.close_set(scorer);
        } else {
            self.state.points = Points::Tiebreak(points);
        }
    }

    fn win_game(&mut self, scorer: Side) {
        self.state.points = Points::LOVE_ALL;
        self.state.games[scorer.index()] += 1;
        log::debug!("Game {:?}, games {:?}", scorer, self.state.games);
        self.check_set_completion();
    }

    fn check_set_completion(&mut self) {
        let games = self.state.games;
        if games == [TIEBREAK_AT, TIEBREAK_AT] {
            self.state.tiebreak_active = true;
            self.state.points = Points::Tiebreak([0, 0]);
            log::debug!("Tiebreak in set {}", self.state.current_set_index + 1);
            return;
        }
        let leader = if games[0] > games[1] { Side::One } else { Side::Two };
        let lead = games[leader.index()];
        let trail = games[leader.other().index()];
        if (lead >= GAMES_FOR_SET && lead - trail >= WINNING_MARGIN) || (lead == 7 && trail == 5) {
            self.close_set(leader);
        }
    }

    fn close_set(&mut self, winner: Side) {
        let state = &mut self.state;
        state.set_scores.push(state.games);
        state.sets[winner.index()] += 1;
        state.points = Points::LOVE_ALL;
        state.games = [0, 0];
        state.current_set_index += 1;
        state.tiebreak_active = false;
        log::debug!("Set {:?}, sets {:?}", winner, state.sets);
        if state.sets[winner.index()] >= state.required_sets_to_win {
            state.phase = MatchPhase::ReadyToFinish;
        }
    }
}
