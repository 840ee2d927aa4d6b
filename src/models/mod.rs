//! Data structures for the tennis club: players, teams, matches, tournaments and live scores.

mod game;
mod player;
mod score;
mod team;
mod tournament;

pub use game::{MatchId, MatchResult, Side, TournamentMatch};
pub use player::{PairStats, Player, PlayerId, PlayerStats};
pub use score::{MatchPhase, MatchState, MatchStats, PointValue, Points, SetsToWin};
pub use team::{Competitor, Team, TeamId};
pub use tournament::{ScheduleMode, Tournament, TournamentError, TournamentFormat, TournamentId};
