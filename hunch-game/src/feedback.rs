//! Classification of rejected guesses: direction, warmth tier, quarter hint.

use serde::{Deserialize, Serialize};

/// Which side of the target a missed guess landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    TooLow,
    TooHigh,
}

impl Direction {
    #[must_use]
    pub const fn of(guess: u16, target: u16) -> Self {
        if guess < target {
            Self::TooLow
        } else {
            Self::TooHigh
        }
    }
}

/// Discrete bucket for how close a guess was to the target.
///
/// Buckets are ordered from closest to farthest. `Exact` covers distance
/// zero, the four middle tiers cover the ascending bounds carried by the
/// active profile, and `Cold` catches everything beyond the last bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Warmth {
    Exact,
    VeryHot,
    Hot,
    Warm,
    Cool,
    Cold,
}

impl Warmth {
    /// Classify `guess` against `target` using the profile's distance bounds.
    #[must_use]
    pub fn classify(guess: u16, target: u16, steps: &[u16; 4]) -> Self {
        let diff = guess.abs_diff(target);
        if diff == 0 {
            return Self::Exact;
        }
        let tiers = [Self::VeryHot, Self::Hot, Self::Warm, Self::Cool];
        for (bound, tier) in steps.iter().zip(tiers) {
            if diff <= *bound {
                return tier;
            }
        }
        Self::Cold
    }
}

/// One of the four contiguous quarters of `1..=range`, with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quarter {
    pub index: u8,
    pub lo: u16,
    pub hi: u16,
}

/// Locate the quarter of `1..=range` containing `target`.
///
/// Quarter boundaries are the floors of `range / 4`, `range / 2` and
/// `3 * range / 4`, so uneven ranges put the slack in the last quarter.
#[must_use]
pub fn quarter_of(target: u16, range: u16) -> Quarter {
    let first = range / 4;
    let half = range / 2;
    let third = range * 3 / 4;
    if target <= first {
        Quarter {
            index: 1,
            lo: 1,
            hi: first,
        }
    } else if target <= half {
        Quarter {
            index: 2,
            lo: first + 1,
            hi: half,
        }
    } else if target <= third {
        Quarter {
            index: 3,
            lo: half + 1,
            hi: third,
        }
    } else {
        Quarter {
            index: 4,
            lo: third + 1,
            hi: range,
        }
    }
}
