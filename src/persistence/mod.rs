//! Persistence boundary: the storage collaborator seen by tournament assembly.
//!
//! The core only awaits these calls one at a time; whether the backing store is relational or
//! document-based is up to the implementation. [`InMemoryStore`] is the reference implementation.

mod memory;
mod roster;

pub use memory::InMemoryStore;
pub use roster::{read_roster, RosterError};

use crate::models::{MatchId, Player, PlayerId, Tournament, TournamentId, TournamentMatch};
use async_trait::async_trait;

/// Failure reported by the storage collaborator. Never retried by the core.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PersistenceError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}

#[async_trait]
pub trait Persistence: Send + Sync {
    /// All registered players, in registration order.
    async fn list_competitors(&self) -> Result<Vec<Player>, PersistenceError>;

    async fn add_player(&self, player: Player) -> Result<PlayerId, PersistenceError>;

    async fn delete_player(&self, id: PlayerId) -> Result<(), PersistenceError>;

    /// Store a tournament together with its scheduled matches, all or nothing.
    async fn create_tournament(&self, tournament: &Tournament) -> Result<TournamentId, PersistenceError>;

    /// Stored tournaments, newest first.
    async fn list_tournaments(&self) -> Result<Vec<Tournament>, PersistenceError>;

    /// Matches of one tournament ordered by play sequence, with results where recorded.
    async fn list_matches(&self, id: TournamentId) -> Result<Vec<TournamentMatch>, PersistenceError>;

    /// Insert or replace the set tally of a match.
    async fn record_match_result(
        &self,
        match_id: MatchId,
        side_one_wins: u32,
        side_two_wins: u32,
    ) -> Result<(), PersistenceError>;

    /// Remove a tournament with its matches and results.
    async fn delete_tournament(&self, id: TournamentId) -> Result<(), PersistenceError>;
}
