//! Difficulty tiers and their fixed session budgets.

use serde::{Deserialize, Serialize};

/// The closed set of playable difficulty tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Tuning knobs for one session, fixed before the session starts.
///
/// Valid guesses lie in `1..=range`; a session ends in a loss once
/// `max_attempts` guesses have missed. `hint_after` is the number of played
/// guesses that unlocks the quarter hint, and `warmth_steps` holds the
/// ascending distance bounds for the non-exact warmth tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub range: u16,
    pub max_attempts: u8,
    pub hint_after: u8,
    pub warmth_steps: [u16; 4],
}

impl DifficultyProfile {
    const fn new(range: u16, max_attempts: u8) -> Self {
        Self {
            range,
            max_attempts,
            hint_after: max_attempts / 2,
            warmth_steps: [5, 15, 30, 50],
        }
    }
}

impl Difficulty {
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    #[must_use]
    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Self::Easy => DifficultyProfile::new(50, 12),
            Self::Medium => DifficultyProfile::new(100, 10),
            Self::Hard => DifficultyProfile::new(200, 8),
            Self::Expert => DifficultyProfile::new(500, 6),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Easy => "\u{1f7e2}",
            Self::Medium => "\u{1f535}",
            Self::Hard => "\u{1f7e0}",
            Self::Expert => "\u{1f534}",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
