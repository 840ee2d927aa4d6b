//! Doubles team forming: split an even roster into fixed two-person teams.

use crate::models::{PlayerId, Team, TournamentError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use uuid::Uuid;

/// Reject the first id that appears twice.
pub(crate) fn ensure_distinct(ids: impl IntoIterator<Item = Uuid>) -> Result<(), TournamentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(TournamentError::DuplicateCompetitor(id));
        }
    }
    Ok(())
}

/// A doubles roster must be distinct, even and hold at least one team.
fn check_roster(players: &[PlayerId]) -> Result<(), TournamentError> {
    ensure_distinct(players.iter().copied())?;
    if players.len() < 2 {
        return Err(TournamentError::NotEnoughCompetitors {
            required: 2,
            found: players.len(),
        });
    }
    if players.len() % 2 != 0 {
        return Err(TournamentError::OddDoublesRoster(players.len()));
    }
    Ok(())
}

/// Manual team assignment: `n / 2` empty teams with two slots each.
#[derive(Clone, Debug)]
pub struct TeamSheet {
    slots: Vec<[Option<PlayerId>; 2]>,
    unassigned: Vec<PlayerId>,
}

impl TeamSheet {
    pub fn new(players: &[PlayerId]) -> Result<Self, TournamentError> {
        check_roster(players)?;
        Ok(Self {
            slots: vec![[None, None]; players.len() / 2],
            unassigned: players.to_vec(),
        })
    }

    pub fn team_count(&self) -> usize {
        self.slots.len()
    }

    /// Players not yet placed, in roster order (removed players go to the back).
    pub fn unassigned(&self) -> &[PlayerId] {
        &self.unassigned
    }

    pub fn team_slots(&self, team: usize) -> Option<[Option<PlayerId>; 2]> {
        self.slots.get(team).copied()
    }

    /// Put an unassigned player into the first free slot of `team`.
    pub fn assign(&mut self, player: PlayerId, team: usize) -> Result<(), TournamentError> {
        let slots = self
            .slots
            .get(team)
            .ok_or(TournamentError::TeamNotFound(team))?;
        let free = slots
            .iter()
            .position(Option::is_none)
            .ok_or(TournamentError::TeamFull(team))?;
        let pos = match self.unassigned.iter().position(|p| *p == player) {
            Some(pos) => pos,
            None if self.slots.iter().flatten().any(|p| *p == Some(player)) => {
                return Err(TournamentError::PlayerAlreadyAssigned(player))
            }
            None => return Err(TournamentError::PlayerNotFound(player)),
        };
        self.unassigned.remove(pos);
        self.slots[team][free] = Some(player);
        Ok(())
    }

    /// Clear a slot and return its player to the unassigned pool. Ok(None) if the slot was empty.
    pub fn remove(&mut self, team: usize, slot: usize) -> Result<Option<PlayerId>, TournamentError> {
        let slots = self
            .slots
            .get_mut(team)
            .ok_or(TournamentError::TeamNotFound(team))?;
        let removed = slots.get_mut(slot).and_then(Option::take);
        if let Some(player) = removed {
            self.unassigned.push(player);
        }
        Ok(removed)
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s[0].is_some() && s[1].is_some())
    }

    /// Build the teams; fails on the first team with an empty slot.
    pub fn finish(&self) -> Result<Vec<Team>, TournamentError> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slots)| match slots {
                [Some(a), Some(b)] => Ok(Team::new(*a, *b)),
                _ => Err(TournamentError::IncompleteTeam(i)),
            })
            .collect()
    }
}

/// Consecutive players form a team: (0, 1), (2, 3), ...
pub fn pair_in_order(players: &[PlayerId]) -> Result<Vec<Team>, TournamentError> {
    check_roster(players)?;
    Ok(players
        .chunks_exact(2)
        .map(|pair| Team::new(pair[0], pair[1]))
        .collect())
}

/// Random partners: shuffle the roster, then pair in order.
pub fn pair_shuffled<R: Rng + ?Sized>(
    players: &[PlayerId],
    rng: &mut R,
) -> Result<Vec<Team>, TournamentError> {
    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);
    pair_in_order(&shuffled)
}

/// Every team must hold two distinct roster players, and no player may be on two teams.
pub fn validate_teams(teams: &[Team], roster: &[PlayerId]) -> Result<(), TournamentError> {
    ensure_distinct(teams.iter().map(|t| t.id))?;
    let mut placed = HashSet::new();
    for team in teams {
        let [a, b] = team.players;
        if a == b || !roster.contains(&a) || !roster.contains(&b) {
            return Err(TournamentError::InvalidTeam(team.id));
        }
        for player in team.players {
            if !placed.insert(player) {
                return Err(TournamentError::PlayerAlreadyAssigned(player));
            }
        }
    }
    Ok(())
}
