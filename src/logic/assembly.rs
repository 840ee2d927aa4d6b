//! Tournament assembly: validate a roster, schedule it into matches, hand matches to live
//! scoring, and write finished results through the persistence collaborator.
//!
//! Every check runs before anything is stored; a failed collaborator call leaves nothing
//! half-written on our side.

use crate::config::Config;
use crate::logic::schedule::schedule;
use crate::logic::scoring::MatchEngine;
use crate::logic::teams::{ensure_distinct, pair_in_order, validate_teams};
use crate::models::{
    Competitor, MatchResult, PlayerId, ScheduleMode, SetsToWin, Team, Tournament,
    TournamentError, TournamentFormat, TournamentId, TournamentMatch,
};
use crate::persistence::Persistence;

/// Where and how a new tournament is played.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TournamentPlan {
    pub place: String,
    pub sets_to_win: SetsToWin,
    pub schedule_mode: ScheduleMode,
}

impl TournamentPlan {
    /// Plan with the configured sets-to-win and schedule mode.
    pub fn new(place: impl Into<String>, config: &Config) -> Self {
        Self {
            place: place.into(),
            sets_to_win: config.sets_to_win,
            schedule_mode: config.schedule_mode,
        }
    }
}

/// Who enters a tournament.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entries {
    Singles(Vec<PlayerId>),
    /// `roster` is every entered player; `teams` must cover it exactly.
    Doubles { roster: Vec<PlayerId>, teams: Vec<Team> },
}

impl Entries {
    pub fn players(&self) -> &[PlayerId] {
        match self {
            Entries::Singles(players) => players,
            Entries::Doubles { roster, .. } => roster,
        }
    }
}

fn check_place(place: &str) -> Result<(), TournamentError> {
    if place.trim().is_empty() {
        return Err(TournamentError::EmptyPlace);
    }
    Ok(())
}

fn build(
    plan: &TournamentPlan,
    format: TournamentFormat,
    competitors: Vec<Competitor>,
    teams: Vec<Team>,
) -> Tournament {
    let mut tournament = Tournament::new(
        plan.place.trim(),
        format,
        plan.sets_to_win,
        plan.schedule_mode,
    );
    let sets = plan.sets_to_win.get();
    tournament.matches = schedule(&competitors, plan.schedule_mode)
        .into_iter()
        .map(|p| TournamentMatch::new(p.order, p.round, [p.a, p.b], sets))
        .collect();
    tournament.competitors = competitors;
    tournament.teams = teams;
    tournament
}

/// Singles round robin: one match per pair of players.
pub fn plan_singles(
    plan: &TournamentPlan,
    players: &[PlayerId],
    config: &Config,
) -> Result<Tournament, TournamentError> {
    check_place(&plan.place)?;
    ensure_distinct(players.iter().copied())?;
    let required = config.singles_minimum();
    if players.len() < required {
        return Err(TournamentError::NotEnoughCompetitors {
            required,
            found: players.len(),
        });
    }
    let competitors = players.iter().copied().map(Competitor::Player).collect();
    Ok(build(plan, TournamentFormat::Singles, competitors, Vec::new()))
}

/// Doubles round robin between already formed teams.
pub fn plan_doubles(
    plan: &TournamentPlan,
    roster: &[PlayerId],
    teams: &[Team],
    config: &Config,
) -> Result<Tournament, TournamentError> {
    check_place(&plan.place)?;
    ensure_distinct(roster.iter().copied())?;
    if roster.len() % 2 != 0 {
        return Err(TournamentError::OddDoublesRoster(roster.len()));
    }
    let required = config.doubles_minimum();
    if roster.len() < required {
        return Err(TournamentError::NotEnoughCompetitors {
            required,
            found: roster.len(),
        });
    }
    validate_teams(teams, roster)?;
    if let Some(missing) = roster
        .iter()
        .find(|p| !teams.iter().any(|t| t.contains(**p)))
    {
        return Err(TournamentError::PlayerNotFound(*missing));
    }
    let competitors = teams.iter().map(Competitor::from).collect();
    Ok(build(plan, TournamentFormat::Doubles, competitors, teams.to_vec()))
}

/// Validate, schedule and store a tournament. Entered players must be registered.
pub async fn create_tournament<P: Persistence + ?Sized>(
    store: &P,
    plan: &TournamentPlan,
    entries: &Entries,
    config: &Config,
) -> Result<Tournament, TournamentError> {
    let tournament = match entries {
        Entries::Singles(players) => plan_singles(plan, players, config)?,
        Entries::Doubles { roster, teams } => plan_doubles(plan, roster, teams, config)?,
    };
    let registered = store.list_competitors().await?;
    if let Some(unknown) = entries
        .players()
        .iter()
        .find(|id| !registered.iter().any(|p| p.id == **id))
    {
        return Err(TournamentError::PlayerNotFound(*unknown));
    }
    store.create_tournament(&tournament).await?;
    log::info!(
        "Created {:?} tournament {} at {} ({} competitors, {} matches, {})",
        tournament.format,
        tournament.id,
        tournament.place,
        tournament.competitors.len(),
        tournament.matches.len(),
        tournament.sets_to_win
    );
    Ok(tournament)
}

/// Fresh scoring engine for a scheduled match.
pub fn start_match(tournament_match: &TournamentMatch) -> Result<MatchEngine, TournamentError> {
    let sets = SetsToWin::new(tournament_match.required_sets_to_win)?;
    log::debug!(
        "Starting match {} (order {})",
        tournament_match.id,
        tournament_match.order
    );
    Ok(MatchEngine::new(sets))
}

/// Persist the final tally of a finished live match.
pub async fn record_finished_match<P: Persistence + ?Sized>(
    store: &P,
    tournament_match: &TournamentMatch,
    engine: &MatchEngine,
) -> Result<MatchResult, TournamentError> {
    let outcome = engine.outcome().ok_or(TournamentError::MatchNotFinished)?;
    record_manual_result(store, tournament_match, outcome.sets[0], outcome.sets[1]).await
}

/// Persist a typed-in final score after checking it against the match's sets-to-win.
pub async fn record_manual_result<P: Persistence + ?Sized>(
    store: &P,
    tournament_match: &TournamentMatch,
    side_one_wins: u32,
    side_two_wins: u32,
) -> Result<MatchResult, TournamentError> {
    let result = MatchResult::new(
        side_one_wins,
        side_two_wins,
        tournament_match.required_sets_to_win,
    )?;
    store
        .record_match_result(tournament_match.id, side_one_wins, side_two_wins)
        .await?;
    log::info!(
        "Recorded match {}: {}-{}",
        tournament_match.id,
        side_one_wins,
        side_two_wins
    );
    Ok(result)
}

pub async fn delete_tournament<P: Persistence + ?Sized>(
    store: &P,
    id: TournamentId,
) -> Result<(), TournamentError> {
    store.delete_tournament(id).await?;
    log::info!("Deleted tournament {}", id);
    Ok(())
}

/// An exhibition match outside any tournament.
#[derive(Clone, Debug)]
pub struct SingleMatch {
    pub format: TournamentFormat,
    pub competitors: [Competitor; 2],
    /// The two teams for doubles; empty for singles.
    pub teams: Vec<Team>,
    pub engine: MatchEngine,
}

/// Singles takes exactly 2 players; doubles exactly 4, paired in order (first two vs last two).
pub fn prepare_single_match(
    format: TournamentFormat,
    players: &[PlayerId],
    sets_to_win: SetsToWin,
) -> Result<SingleMatch, TournamentError> {
    let needed = match format {
        TournamentFormat::Singles => 2,
        TournamentFormat::Doubles => 4,
    };
    if players.len() != needed {
        return Err(TournamentError::WrongNumberOfPlayers {
            needed,
            selected: players.len(),
        });
    }
    ensure_distinct(players.iter().copied())?;
    let (competitors, teams) = match format {
        TournamentFormat::Singles => (
            [
                Competitor::Player(players[0]),
                Competitor::Player(players[1]),
            ],
            Vec::new(),
        ),
        TournamentFormat::Doubles => {
            let teams = pair_in_order(players)?;
            ([Competitor::from(&teams[0]), Competitor::from(&teams[1])], teams)
        }
    };
    Ok(SingleMatch {
        format,
        competitors,
        teams,
        engine: MatchEngine::new(sets_to_win),
    })
}
