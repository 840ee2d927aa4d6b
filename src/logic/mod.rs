//! Tournament business logic: scheduling, live scoring, team forming, assembly and standings.

mod assembly;
mod schedule;
mod scoring;
mod standings;
mod teams;

pub use assembly::{
    create_tournament, delete_tournament, plan_doubles, plan_singles, prepare_single_match,
    record_finished_match, record_manual_result, start_match, Entries, SingleMatch,
    TournamentPlan,
};
pub use schedule::{circle_rounds, greedy_spacing, pair_count, round_count, schedule, Pairing};
pub use scoring::{HistoryEntry, MatchEngine, MatchOutcome, ScoringAction};
pub use standings::{
    pair_stats, places, player_stats, sort_stats, DateRange, SortDirection, SortKey,
    StandingsRow, StatsFilter, StatsSort,
};
pub use teams::{pair_in_order, pair_shuffled, validate_teams, TeamSheet};
