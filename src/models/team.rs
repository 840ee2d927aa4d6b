//! Doubles teams and the Competitor label used by scheduling and scoring.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a doubles team.
pub type TeamId = Uuid;

/// A fixed two-person doubles team.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub players: [PlayerId; 2],
}

impl Team {
    pub fn new(first: PlayerId, second: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            players: [first, second],
        }
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        self.players.contains(&player)
    }
}

/// One side of a contest: a single player or a doubles team.
///
/// Scheduling and scoring only compare competitors for equality; names are
/// resolved by whoever renders them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum Competitor {
    Player(PlayerId),
    Team(TeamId),
}

impl Competitor {
    pub fn id(&self) -> Uuid {
        match self {
            Competitor::Player(id) | Competitor::Team(id) => *id,
        }
    }
}

impl From<&Team> for Competitor {
    fn from(team: &Team) -> Self {
        Competitor::Team(team.id)
    }
}
