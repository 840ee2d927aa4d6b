//! Tournament match, its recorded result, and the Side of a contest.

use crate::models::team::Competitor;
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// One of the two sides of a match. `One` is listed first on the score sheet.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    One,
    Two,
}

impl Side {
    /// Index into the per-side `[_; 2]` arrays of the score.
    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

/// Final set tally of a match, validated against its sets-to-win target.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub side_one_wins: u32,
    pub side_two_wins: u32,
    pub winner: Side,
}

impl MatchResult {
    /// Exactly one side must have reached `required_sets_to_win`; the other must be below it.
    pub fn new(
        side_one_wins: u32,
        side_two_wins: u32,
        required_sets_to_win: u32,
    ) -> Result<Self, TournamentError> {
        let winner = match (
            side_one_wins == required_sets_to_win,
            side_two_wins == required_sets_to_win,
        ) {
            (true, false) if side_two_wins < required_sets_to_win => Side::One,
            (false, true) if side_one_wins < required_sets_to_win => Side::Two,
            _ => {
                return Err(TournamentError::InvalidResult {
                    side_one_wins,
                    side_two_wins,
                    required: required_sets_to_win,
                })
            }
        };
        Ok(Self {
            side_one_wins,
            side_two_wins,
            winner,
        })
    }
}

/// A scheduled contest within a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentMatch {
    pub id: MatchId,
    /// Play sequence, starting at 1.
    pub order: u32,
    /// Set only for round-based (multi-court) schedules.
    pub round: Option<u32>,
    pub competitors: [Competitor; 2],
    pub required_sets_to_win: u32,
    /// None if not yet played.
    pub result: Option<MatchResult>,
}

impl TournamentMatch {
    pub fn new(
        order: u32,
        round: Option<u32>,
        competitors: [Competitor; 2],
        required_sets_to_win: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order,
            round,
            competitors,
            required_sets_to_win,
            result: None,
        }
    }

    pub fn competitor(&self, side: Side) -> Competitor {
        self.competitors[side.index()]
    }

    pub fn winner(&self) -> Option<Competitor> {
        self.result.map(|r| self.competitor(r.winner))
    }
}
