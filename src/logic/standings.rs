//! Standings across stored tournaments: matches, wins and win percentage, per player and per
//! doubles pair.

use crate::models::{
    Competitor, PairStats, Player, PlayerId, PlayerStats, Side, Tournament, TournamentFormat,
};
use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Tournament age window, relative to the caller's "now".
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    #[default]
    All,
    LastWeek,
    LastMonth,
}

impl DateRange {
    fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            DateRange::All => None,
            DateRange::LastWeek => Some(now - Duration::days(7)),
            DateRange::LastMonth => Some(
                now.checked_sub_months(Months::new(1))
                    .unwrap_or(now - Duration::days(30)),
            ),
        }
    }
}

/// Which tournaments count towards the standings.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StatsFilter {
    /// None counts both singles and doubles.
    pub format: Option<TournamentFormat>,
    /// Exact place name; None counts every place.
    pub place: Option<String>,
    pub range: DateRange,
}

impl StatsFilter {
    fn accepts(&self, tournament: &Tournament, now: DateTime<Utc>) -> bool {
        if self.format.is_some_and(|f| f != tournament.format) {
            return false;
        }
        if self.place.as_ref().is_some_and(|p| *p != tournament.place) {
            return false;
        }
        match self.range.cutoff(now) {
            Some(cutoff) => tournament.created_at > cutoff,
            None => true,
        }
    }
}

/// Distinct places of the given tournaments, in first-seen order (for a place picker).
pub fn places(tournaments: &[Tournament]) -> Vec<String> {
    let mut places: Vec<String> = Vec::new();
    for t in tournaments {
        if !places.contains(&t.place) {
            places.push(t.place.clone());
        }
    }
    places
}

/// One row per player who played a recorded match in the filtered tournaments.
///
/// Doubles results credit both partners. Rows come out in first-appearance order; names fall
/// back to the player id when the player is no longer registered.
pub fn player_stats(
    tournaments: &[Tournament],
    players: &[Player],
    filter: &StatsFilter,
    now: DateTime<Utc>,
) -> Vec<PlayerStats> {
    let mut rows: Vec<PlayerStats> = Vec::new();
    let mut index: HashMap<PlayerId, usize> = HashMap::new();

    for tournament in tournaments.iter().filter(|t| filter.accepts(t, now)) {
        for m in &tournament.matches {
            let Some(result) = m.result else {
                continue;
            };
            for side in [Side::One, Side::Two] {
                for player_id in tournament.players_of(m.competitor(side)) {
                    let i = *index.entry(player_id).or_insert_with(|| {
                        rows.push(PlayerStats::new(player_id, display_name(players, player_id)));
                        rows.len() - 1
                    });
                    rows[i].record_match(result.winner == side);
                }
            }
        }
    }
    rows
}

/// One row per doubles pair that played a recorded match in the filtered doubles tournaments.
///
/// Pairs are keyed on their sorted player ids, so the same two players add up across
/// tournaments. Only doubles tournaments count, so a singles-only filter gives no rows.
pub fn pair_stats(
    tournaments: &[Tournament],
    players: &[Player],
    filter: &StatsFilter,
    now: DateTime<Utc>,
) -> Vec<PairStats> {
    let mut rows: Vec<PairStats> = Vec::new();
    let mut index: HashMap<[PlayerId; 2], usize> = HashMap::new();

    let doubles = tournaments
        .iter()
        .filter(|t| t.format == TournamentFormat::Doubles && filter.accepts(t, now));
    for tournament in doubles {
        for m in &tournament.matches {
            let Some(result) = m.result else {
                continue;
            };
            for side in [Side::One, Side::Two] {
                let Competitor::Team(team_id) = m.competitor(side) else {
                    continue;
                };
                let Some(team) = tournament.team(team_id) else {
                    continue;
                };
                let mut key = team.players;
                key.sort();
                let i = *index.entry(key).or_insert_with(|| {
                    let name = format!(
                        "{} / {}",
                        display_name(players, key[0]),
                        display_name(players, key[1])
                    );
                    rows.push(PairStats::new(key, name));
                    rows.len() - 1
                });
                rows[i].record_match(result.winner == side);
            }
        }
    }
    rows
}

/// "First Last", or the id when the player is no longer registered.
fn display_name(players: &[Player], id: PlayerId) -> String {
    players
        .iter()
        .find(|p| p.id == id)
        .map(Player::display_name)
        .unwrap_or_else(|| id.to_string())
}

/// Sortable columns of a standings row.
pub trait StandingsRow {
    fn wins(&self) -> u32;
    fn matches(&self) -> u32;
    fn percent(&self) -> u32;
    fn name(&self) -> &str;
}

impl StandingsRow for PlayerStats {
    fn wins(&self) -> u32 {
        self.wins
    }
    fn matches(&self) -> u32 {
        self.matches
    }
    fn percent(&self) -> u32 {
        self.percent
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl StandingsRow for PairStats {
    fn wins(&self) -> u32 {
        self.wins
    }
    fn matches(&self) -> u32 {
        self.matches
    }
    fn percent(&self) -> u32 {
        self.percent
    }
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Wins,
    #[default]
    Matches,
    Percent,
    Name,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Descending,
    Ascending,
    /// Keep first-appearance order.
    Unsorted,
}

/// Current sort of a standings table. Defaults to most matches first.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StatsSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl StatsSort {
    /// Header click: a new key starts descending; the same key cycles
    /// descending -> ascending -> unsorted -> descending.
    pub fn toggle(self, key: SortKey) -> StatsSort {
        if key != self.key {
            return StatsSort {
                key,
                direction: SortDirection::Descending,
            };
        }
        let direction = match self.direction {
            SortDirection::Descending => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Unsorted,
            SortDirection::Unsorted => SortDirection::Descending,
        };
        StatsSort { key, direction }
    }
}

/// Stable sort; ties keep their current order.
pub fn sort_stats<R: StandingsRow>(rows: &mut [R], sort: StatsSort) {
    let compare = |a: &R, b: &R| -> Ordering {
        match sort.key {
            SortKey::Wins => a.wins().cmp(&b.wins()),
            SortKey::Matches => a.matches().cmp(&b.matches()),
            SortKey::Percent => a.percent().cmp(&b.percent()),
            SortKey::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        }
    };
    match sort.direction {
        SortDirection::Ascending => rows.sort_by(compare),
        SortDirection::Descending => rows.sort_by(|a, b| compare(b, a)),
        SortDirection::Unsorted => {}
    }
}
