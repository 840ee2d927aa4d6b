//! Assembly thresholds and match defaults.
//!
//! Loaded from JSON (missing keys take defaults) and overridable from env:
//! TENNIS_MIN_SINGLES, TENNIS_MIN_DOUBLES, TENNIS_SETS_TO_WIN, TENNIS_SCHEDULE (greedy|rounds).

use crate::models::{ScheduleMode, SetsToWin};
use serde::{Deserialize, Serialize};

/// Hard floor for singles: a round robin needs two competitors.
const SINGLES_FLOOR: usize = 2;
/// Hard floor for doubles: two teams of two.
const DOUBLES_FLOOR: usize = 4;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_min_singles")]
    pub min_singles_competitors: usize,
    /// Individual players, before teams are formed.
    #[serde(default = "default_min_doubles")]
    pub min_doubles_players: usize,
    #[serde(default)]
    pub sets_to_win: SetsToWin,
    #[serde(default)]
    pub schedule_mode: ScheduleMode,
}

fn default_min_singles() -> usize {
    SINGLES_FLOOR
}

fn default_min_doubles() -> usize {
    DOUBLES_FLOOR
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_singles_competitors: default_min_singles(),
            min_doubles_players: default_min_doubles(),
            sets_to_win: SetsToWin::default(),
            schedule_mode: ScheduleMode::default(),
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup` (env-style keys). Unparsable values are logged and skipped.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(n) = parse_var(&lookup, "TENNIS_MIN_SINGLES") {
            self.min_singles_competitors = n;
        }
        if let Some(n) = parse_var(&lookup, "TENNIS_MIN_DOUBLES") {
            self.min_doubles_players = n;
        }
        if let Some(n) = parse_var::<u32>(&lookup, "TENNIS_SETS_TO_WIN") {
            match SetsToWin::new(n) {
                Ok(sets) => self.sets_to_win = sets,
                Err(e) => log::warn!("Ignoring TENNIS_SETS_TO_WIN: {}", e),
            }
        }
        if let Some(raw) = lookup("TENNIS_SCHEDULE") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "greedy" => self.schedule_mode = ScheduleMode::Greedy,
                "rounds" => self.schedule_mode = ScheduleMode::Rounds,
                other => log::warn!("Ignoring TENNIS_SCHEDULE={:?}", other),
            }
        }
        self
    }

    /// Minimum singles competitors, never below two.
    pub fn singles_minimum(&self) -> usize {
        self.min_singles_competitors.max(SINGLES_FLOOR)
    }

    /// Minimum doubles players, never below four.
    pub fn doubles_minimum(&self) -> usize {
        self.min_doubles_players.max(DOUBLES_FLOOR)
    }
}

fn parse_var<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: not a number", key, raw);
            None
        }
    }
}
