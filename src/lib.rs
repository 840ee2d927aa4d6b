//! Tennis club tournament manager: library with models, scheduling, live scoring and the
//! persistence boundary.

pub mod config;
pub mod logic;
pub mod models;
pub mod persistence;

pub use config::Config;
pub use logic::{
    circle_rounds, create_tournament, delete_tournament, greedy_spacing, pair_in_order,
    pair_shuffled, pair_stats, plan_doubles, plan_singles, player_stats, prepare_single_match,
    record_finished_match, record_manual_result, schedule, sort_stats, start_match, Entries,
    MatchEngine, MatchOutcome, Pairing, ScoringAction, SingleMatch, StatsFilter, StatsSort,
    TeamSheet, TournamentPlan,
};
pub use models::{
    Competitor, MatchId, MatchPhase, MatchResult, MatchState, MatchStats, PairStats, Player, PlayerId,
    PlayerStats, PointValue, Points, ScheduleMode, SetsToWin, Side, Team, TeamId, Tournament,
    TournamentError, TournamentFormat, TournamentId, TournamentMatch,
};
pub use persistence::{InMemoryStore, Persistence, PersistenceError};
