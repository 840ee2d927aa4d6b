//! CSV roster import: `first_name,last_name,nick_name,email,home_place` with a header row.

use crate::models::{Player, TournamentError};
use serde::Deserialize;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// `line` counts the header as line 1.
    #[error("line {line}: {source}")]
    InvalidPlayer {
        line: usize,
        #[source]
        source: TournamentError,
    },
}

#[derive(Debug, Deserialize)]
struct PlayerRecord {
    first_name: String,
    last_name: String,
    nick_name: String,
    email: String,
    home_place: String,
}

/// Parse players from CSV. Stops at the first malformed or incomplete row.
pub fn read_roster<R: io::Read>(reader: R) -> Result<Vec<Player>, RosterError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut players = Vec::new();
    for (i, record) in rdr.deserialize::<PlayerRecord>().enumerate() {
        let r = record?;
        let player = Player::new(r.first_name, r.last_name, r.nick_name, r.email, r.home_place);
        player
            .validate()
            .map_err(|source| RosterError::InvalidPlayer { line: i + 2, source })?;
        players.push(player);
    }
    Ok(players)
}
