//! Tournament, its format, and TournamentError.

use crate::models::game::{MatchId, TournamentMatch};
use crate::models::player::PlayerId;
use crate::models::score::SetsToWin;
use crate::models::team::{Competitor, Team, TeamId};
use crate::persistence::PersistenceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur while assembling tournaments, forming teams or recording results.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TournamentError {
    /// Too few competitors for the requested format.
    #[error("Need at least {required} competitors (got {found})")]
    NotEnoughCompetitors { required: usize, found: usize },
    /// Doubles rosters must split into two-person teams.
    #[error("Doubles needs an even number of players (got {0})")]
    OddDoublesRoster(usize),
    /// The same player or team was entered twice.
    #[error("Competitor {0} is listed more than once")]
    DuplicateCompetitor(Uuid),
    /// Sets to win must lie in `1..=SetsToWin::MAX`.
    #[error("Sets to win must be between 1 and {max} (got {0})", max = SetsToWin::MAX)]
    InvalidSetsToWin(u32),
    #[error("Tournament place must not be empty")]
    EmptyPlace,
    /// A submitted final score does not match the sets-to-win target.
    #[error("Result {side_one_wins}-{side_two_wins} does not end a match played to {required} sets")]
    InvalidResult {
        side_one_wins: u32,
        side_two_wins: u32,
        required: u32,
    },
    #[error("Player field {0} is required")]
    MissingPlayerField(&'static str),
    #[error("Player not found")]
    PlayerNotFound(PlayerId),
    /// Exact player count required (single matches: 2 for singles, 4 for doubles).
    #[error("Must select exactly {needed} players (selected {selected})")]
    WrongNumberOfPlayers { needed: usize, selected: usize },
    #[error("Team {0} does not exist")]
    TeamNotFound(usize),
    #[error("Team {0} already has two players")]
    TeamFull(usize),
    #[error("Team {0} is missing a player")]
    IncompleteTeam(usize),
    /// Player is already placed on a team.
    #[error("Player is already assigned to a team")]
    PlayerAlreadyAssigned(PlayerId),
    /// Team holds the same player twice or a player outside the roster.
    #[error("Team {0} is not made of two distinct roster players")]
    InvalidTeam(TeamId),
    /// Only finished matches can be recorded from a live scoring session.
    #[error("Match is not finished")]
    MatchNotFinished,
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Singles (player vs player) or doubles (team vs team).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    #[default]
    Singles,
    Doubles,
}

/// How the round-robin pairings are ordered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleMode {
    /// Single court: greedy order that spaces out repeat appearances.
    #[default]
    Greedy,
    /// Multi-court: circle method grouped into simultaneous rounds.
    Rounds,
}

/// Full tournament record: roster, teams and scheduled matches.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub place: String,
    pub format: TournamentFormat,
    pub sets_to_win: SetsToWin,
    pub schedule_mode: ScheduleMode,
    pub created_at: DateTime<Utc>,
    /// Competitors in entry order (players for singles, teams for doubles).
    pub competitors: Vec<Competitor>,
    /// Doubles teams; empty for singles.
    pub teams: Vec<Team>,
    /// Matches ordered by `order`.
    pub matches: Vec<TournamentMatch>,
}

impl Tournament {
    /// Create an empty tournament record. Matches are filled in by assembly.
    pub fn new(
        place: impl Into<String>,
        format: TournamentFormat,
        sets_to_win: SetsToWin,
        schedule_mode: ScheduleMode,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            place: place.into(),
            format,
            sets_to_win,
            schedule_mode,
            created_at: Utc::now(),
            competitors: Vec::new(),
            teams: Vec::new(),
            matches: Vec::new(),
        }
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut TournamentMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Individual players behind a competitor (one for singles, two for a team).
    pub fn players_of(&self, competitor: Competitor) -> Vec<PlayerId> {
        match competitor {
            Competitor::Player(id) => vec![id],
            Competitor::Team(id) => self
                .team(id)
                .map(|t| t.players.to_vec())
                .unwrap_or_default(),
        }
    }

    /// True once every match has a recorded result.
    pub fn is_complete(&self) -> bool {
        !self.matches.is_empty() && self.matches.iter().all(|m| m.result.is_some())
    }
}
