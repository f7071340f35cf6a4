//! Cross-session statistics.
//!
//! The aggregator is a pure fold: [`StatsRecord::record`] merges one
//! completed session into the running counters, and the load/persist pair
//! moves whole records through a [`StatsStore`](crate::StatsStore). Storage
//! trouble is never an error here; the game keeps working on defaults.

use serde::{Deserialize, Serialize};

use crate::StatsStore;
use crate::session::SessionResult;

/// Which deployment track the player is on. Each track keeps its own
/// statistics record so the two never cross-contaminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Stable,
    Canary,
}

impl Variant {
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Stable => "numberGameStats",
            Self::Canary => "numberGameStatsCanary",
        }
    }

    /// Map a version string from the version probe onto a track. Only the
    /// exact string `canary` selects the canary; anything else is stable.
    #[must_use]
    pub fn from_version(version: &str) -> Self {
        if version == "canary" {
            Self::Canary
        } else {
            Self::Stable
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Canary => "canary",
        }
    }
}

/// Persisted counters. Field names mirror the JSON stored under the
/// per-variant keys; records written before streak tracking existed carry
/// only the first three fields and deserialize with zeroed streaks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsRecord {
    pub games_played: u32,
    pub games_won: u32,
    pub average_guesses: f64,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl StatsRecord {
    /// Fold one completed session into the counters.
    ///
    /// The running mean is updated numerator-first so the same outcome
    /// sequence always reproduces bit-identical averages.
    #[must_use]
    pub fn record(self, result: SessionResult) -> Self {
        let games_played = self.games_played + 1;
        let average_guesses = (self.average_guesses * f64::from(self.games_played)
            + f64::from(result.attempts))
            / f64::from(games_played);
        if result.won {
            let current_streak = self.current_streak + 1;
            Self {
                games_played,
                games_won: self.games_won + 1,
                average_guesses,
                current_streak,
                best_streak: self.best_streak.max(current_streak),
            }
        } else {
            Self {
                games_played,
                games_won: self.games_won,
                average_guesses,
                current_streak: 0,
                best_streak: self.best_streak,
            }
        }
    }

    /// Win rate rounded to the nearest whole percent, 0 when nothing has
    /// been played yet.
    #[must_use]
    pub fn win_rate_percent(&self) -> u8 {
        if self.games_played == 0 {
            return 0;
        }
        let played = u64::from(self.games_played);
        let scaled = u64::from(self.games_won) * 100 + played / 2;
        u8::try_from(scaled / played).unwrap_or(100)
    }
}

/// Read the record persisted for `variant`, or the zero default.
///
/// Absent data is not an error, and neither is a broken or unreadable
/// store; both degrade to the default record with a logged warning.
pub fn load_stats<S: StatsStore>(store: &S, variant: Variant) -> StatsRecord {
    let key = variant.storage_key();
    match store.get(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!("discarding unreadable stats under {key}: {err}");
            StatsRecord::default()
        }),
        Ok(None) => StatsRecord::default(),
        Err(err) => {
            log::warn!("stats store unavailable, starting from zero: {err}");
            StatsRecord::default()
        }
    }
}

/// Overwrite the record persisted for `variant`. Best effort: a failed
/// write is logged and swallowed, never surfaced to gameplay.
pub fn persist_stats<S: StatsStore>(store: &S, variant: Variant, record: &StatsRecord) {
    match serde_json::to_string(record) {
        Ok(raw) => {
            if let Err(err) = store.set(variant.storage_key(), &raw) {
                log::warn!("failed to persist stats: {err}");
            }
        }
        Err(err) => log::warn!("failed to encode stats: {err}"),
    }
}
