//! Player and PlayerStats data structures.

use crate::models::tournament::TournamentError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in teams, matches and lookups).
pub type PlayerId = Uuid;

/// A club member who can be entered into tournaments.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub nick_name: String,
    pub email: String,
    pub home_place: String,
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Create a new player. Text fields are trimmed; call [`Player::validate`] before storing.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        nick_name: impl Into<String>,
        email: impl Into<String>,
        home_place: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
            nick_name: nick_name.into().trim().to_string(),
            email: email.into().trim().to_string(),
            home_place: home_place.into().trim().to_string(),
            created_at: Utc::now(),
        }
    }

    /// "First Last", the label used on score sheets and standings.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Every text field is required.
    pub fn validate(&self) -> Result<(), TournamentError> {
        let fields = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("nick_name", &self.nick_name),
            ("email", &self.email),
            ("home_place", &self.home_place),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(TournamentError::MissingPlayerField(*name)),
            None => Ok(()),
        }
    }
}

/// Statistics view of a player across stored tournaments (for standings tables).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    pub name: String,
    /// Matches with a recorded result.
    pub matches: u32,
    pub wins: u32,
    /// Win percentage rounded to the nearest integer (0 when no matches).
    pub percent: u32,
}

impl PlayerStats {
    pub fn new(player_id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            player_id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Record one played match for this player.
    pub fn record_match(&mut self, won: bool) {
        self.matches += 1;
        if won {
            self.wins += 1;
        }
        self.percent = win_percent(self.wins, self.matches);
    }
}

/// Statistics of a doubles pair across stored tournaments.
///
/// A pair is the same two players, whatever team record they were entered under.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PairStats {
    /// Both players, sorted.
    pub players: [PlayerId; 2],
    /// "First Last / First Last", in `players` order.
    pub name: String,
    pub matches: u32,
    pub wins: u32,
    pub percent: u32,
}

impl PairStats {
    pub fn new(mut players: [PlayerId; 2], name: impl Into<String>) -> Self {
        players.sort();
        Self {
            players,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn record_match(&mut self, won: bool) {
        self.matches += 1;
        if won {
            self.wins += 1;
        }
        self.percent = win_percent(self.wins, self.matches);
    }
}

fn win_percent(wins: u32, matches: u32) -> u32 {
    if matches == 0 {
        return 0;
    }
    ((wins as f64 / matches as f64) * 100.0).round() as u32
}
