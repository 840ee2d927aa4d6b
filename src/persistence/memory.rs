//! In-memory persistence, shared behind an `Arc` by embedding applications and tests.

use super::{Persistence, PersistenceError};
use crate::models::{
    MatchId, MatchResult, Player, PlayerId, Side, Tournament, TournamentId, TournamentMatch,
};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct StoreInner {
    players: Vec<Player>,
    tournaments: Vec<Tournament>,
}

/// Players and tournaments kept in process memory. Lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a roster (e.g. from [`super::read_roster`]).
    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                players,
                tournaments: Vec::new(),
            }),
        }
    }
}

fn find_match_mut(
    tournaments: &mut [Tournament],
    id: MatchId,
) -> Option<&mut TournamentMatch> {
    tournaments.iter_mut().find_map(|t| t.get_match_mut(id))
}

#[async_trait]
impl Persistence for InMemoryStore {
    async fn list_competitors(&self) -> Result<Vec<Player>, PersistenceError> {
        Ok(self.inner.read().await.players.clone())
    }

    async fn add_player(&self, player: Player) -> Result<PlayerId, PersistenceError> {
        let mut g = self.inner.write().await;
        if g.players.iter().any(|p| p.id == player.id) {
            return Err(PersistenceError::Storage(format!(
                "player {} already exists",
                player.id
            )));
        }
        let id = player.id;
        g.players.push(player);
        Ok(id)
    }

    async fn delete_player(&self, id: PlayerId) -> Result<(), PersistenceError> {
        let mut g = self.inner.write().await;
        let before = g.players.len();
        g.players.retain(|p| p.id != id);
        if g.players.len() == before {
            return Err(PersistenceError::NotFound(format!("player {id}")));
        }
        Ok(())
    }

    async fn create_tournament(
        &self,
        tournament: &Tournament,
    ) -> Result<TournamentId, PersistenceError> {
        let mut g = self.inner.write().await;
        if g.tournaments.iter().any(|t| t.id == tournament.id) {
            return Err(PersistenceError::Storage(format!(
                "tournament {} already exists",
                tournament.id
            )));
        }
        g.tournaments.push(tournament.clone());
        Ok(tournament.id)
    }

    async fn list_tournaments(&self) -> Result<Vec<Tournament>, PersistenceError> {
        let mut tournaments = self.inner.read().await.tournaments.clone();
        tournaments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tournaments)
    }

    async fn list_matches(
        &self,
        id: TournamentId,
    ) -> Result<Vec<TournamentMatch>, PersistenceError> {
        let g = self.inner.read().await;
        let tournament = g
            .tournaments
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| PersistenceError::NotFound(format!("tournament {id}")))?;
        let mut matches = tournament.matches.clone();
        matches.sort_by_key(|m| m.order);
        Ok(matches)
    }

    async fn record_match_result(
        &self,
        match_id: MatchId,
        side_one_wins: u32,
        side_two_wins: u32,
    ) -> Result<(), PersistenceError> {
        let mut g = self.inner.write().await;
        let m = find_match_mut(&mut g.tournaments, match_id)
            .ok_or_else(|| PersistenceError::NotFound(format!("match {match_id}")))?;
        let winner = if side_one_wins > side_two_wins {
            Side::One
        } else {
            Side::Two
        };
        m.result = Some(MatchResult {
            side_one_wins,
            side_two_wins,
            winner,
        });
        Ok(())
    }

    async fn delete_tournament(&self, id: TournamentId) -> Result<(), PersistenceError> {
        let mut g = self.inner.write().await;
        let before = g.tournaments.len();
        g.tournaments.retain(|t| t.id != id);
        if g.tournaments.len() == before {
            return Err(PersistenceError::NotFound(format!("tournament {id}")));
        }
        Ok(())
    }
}
