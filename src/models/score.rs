//! Live score data: point values, per-side statistics and the MatchState snapshot.

use crate::models::game::Side;
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of sets a side must win: 1 (Bo1), 2 (Bo3) or 3 (Bo5), up to [`SetsToWin::MAX`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SetsToWin(u32);

impl SetsToWin {
    pub const BEST_OF_ONE: SetsToWin = SetsToWin(1);
    pub const BEST_OF_THREE: SetsToWin = SetsToWin(2);
    pub const BEST_OF_FIVE: SetsToWin = SetsToWin(3);
    /// Bo9.
    pub const MAX: u32 = 5;

    pub fn new(sets: u32) -> Result<Self, TournamentError> {
        if sets == 0 || sets > Self::MAX {
            return Err(TournamentError::InvalidSetsToWin(sets));
        }
        Ok(Self(sets))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Maximum number of sets the match can last.
    pub fn best_of(self) -> u32 {
        self.0 * 2 - 1
    }
}

impl Default for SetsToWin {
    fn default() -> Self {
        Self::BEST_OF_THREE
    }
}

impl TryFrom<u32> for SetsToWin {
    type Error = TournamentError;

    fn try_from(sets: u32) -> Result<Self, Self::Error> {
        Self::new(sets)
    }
}

impl From<SetsToWin> for u32 {
    fn from(sets: SetsToWin) -> u32 {
        sets.0
    }
}

impl fmt::Display for SetsToWin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bo{}", self.best_of())
    }
}

/// Game score of one side outside a tiebreak, ordered `Love < Fifteen < Thirty < Forty < Advantage`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointValue {
    #[default]
    Love,
    Fifteen,
    Thirty,
    Forty,
    Advantage,
}

impl PointValue {
    /// Next value along `0 -> 15 -> 30 -> 40 -> Ad`. Advantage is the top and stays put.
    pub fn successor(self) -> PointValue {
        match self {
            PointValue::Love => PointValue::Fifteen,
            PointValue::Fifteen => PointValue::Thirty,
            PointValue::Thirty => PointValue::Forty,
            PointValue::Forty | PointValue::Advantage => PointValue::Advantage,
        }
    }

    /// Previous value; Love is the bottom and stays put.
    pub fn predecessor(self) -> PointValue {
        match self {
            PointValue::Love | PointValue::Fifteen => PointValue::Love,
            PointValue::Thirty => PointValue::Fifteen,
            PointValue::Forty => PointValue::Thirty,
            PointValue::Advantage => PointValue::Forty,
        }
    }
}

impl fmt::Display for PointValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PointValue::Love => "0",
            PointValue::Fifteen => "15",
            PointValue::Thirty => "30",
            PointValue::Forty => "40",
            PointValue::Advantage => "Ad",
        };
        f.write_str(label)
    }
}

/// Current-game score of both sides.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "points")]
pub enum Points {
    Regular([PointValue; 2]),
    /// Plain point counts, reset to zero when the tiebreak starts and ends.
    Tiebreak([u32; 2]),
}

impl Points {
    pub const LOVE_ALL: Points = Points::Regular([PointValue::Love, PointValue::Love]);

    /// Score label for one side ("0", "15", ..., "Ad", or a tiebreak count).
    pub fn label(&self, side: Side) -> String {
        match self {
            Points::Regular(p) => p[side.index()].to_string(),
            Points::Tiebreak(p) => p[side.index()].to_string(),
        }
    }
}

impl Default for Points {
    fn default() -> Self {
        Points::LOVE_ALL
    }
}

/// Serve and point counters per side.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    pub aces: [u32; 2],
    pub double_faults: [u32; 2],
    pub single_faults: [u32; 2],
    pub points_won: [u32; 2],
}

/// Lifecycle of a live match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    #[default]
    InProgress,
    /// A side reached the sets-to-win target; waiting for an explicit finish (or an undo).
    ReadyToFinish,
    Finished,
}

/// Full score of one live match, as rendered by a scoreboard.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub points: Points,
    /// Games won in the current set.
    pub games: [u32; 2],
    /// Sets won overall.
    pub sets: [u32; 2],
    /// Final game counts of each completed set, oldest first.
    pub set_scores: Vec<[u32; 2]>,
    pub current_set_index: usize,
    pub tiebreak_active: bool,
    pub stats: MatchStats,
    pub required_sets_to_win: u32,
    pub phase: MatchPhase,
}

impl MatchState {
    pub fn new(sets_to_win: SetsToWin) -> Self {
        Self {
            points: Points::LOVE_ALL,
            games: [0, 0],
            sets: [0, 0],
            set_scores: Vec::new(),
            current_set_index: 0,
            tiebreak_active: false,
            stats: MatchStats::default(),
            required_sets_to_win: sets_to_win.get(),
            phase: MatchPhase::InProgress,
        }
    }

    /// Side that has reached the sets-to-win target, if any.
    pub fn set_winner(&self) -> Option<Side> {
        [Side::One, Side::Two]
            .into_iter()
            .find(|s| self.sets[s.index()] >= self.required_sets_to_win)
    }
}
