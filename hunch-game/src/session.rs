//! The guessing session state machine.
//!
//! A [`Session`] owns one play-through: the hidden target, the ordered guess
//! history, the remaining-attempts budget and the elapsed clock. It performs
//! no I/O; entropy is injected at [`Session::start`] and the clock is
//! advanced by an external once-per-second driver calling [`Session::tick`].

use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::feedback::{self, Direction, Quarter, Warmth};
use crate::profile::DifficultyProfile;

/// Guess history storage, inline up to the largest attempt budget.
pub type GuessList = SmallVec<[u16; 12]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Playing,
    Won,
    Lost,
}

/// Caller errors surfaced by the session contract.
///
/// All of these are recoverable misuse signals for the presentation layer;
/// none of them change session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("guess must be a whole number between 1 and {range}")]
    OutOfRange { range: u16 },
    #[error("{value} was already guessed this session")]
    Duplicate { value: u16 },
    #[error("the quarter hint has not unlocked yet")]
    HintLocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    Won {
        attempts: u8,
        elapsed_secs: u32,
    },
    Lost {
        target: u16,
    },
    Continue {
        direction: Direction,
        warmth: Warmth,
        remaining: u8,
        hint_unlocked: bool,
    },
}

/// Terminal result of a completed session, the input to the statistics fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub won: bool,
    pub attempts: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    profile: DifficultyProfile,
    target: u16,
    history: GuessList,
    status: SessionStatus,
    elapsed_secs: u32,
    hint_unlocked: bool,
}

impl Session {
    /// Begin a session with a target drawn uniformly from `1..=range`.
    #[must_use]
    pub fn start(profile: DifficultyProfile, rng: &mut impl Rng) -> Self {
        let target = rng.gen_range(1..=profile.range);
        Self::with_target(profile, target)
    }

    /// Begin a session with a known target. Targets outside `1..=range` are
    /// clamped into the valid interval.
    #[must_use]
    pub fn with_target(profile: DifficultyProfile, target: u16) -> Self {
        Self {
            profile,
            target: target.clamp(1, profile.range),
            history: GuessList::new(),
            status: SessionStatus::Playing,
            elapsed_secs: 0,
            hint_unlocked: false,
        }
    }

    #[must_use]
    pub const fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    #[must_use]
    pub const fn target(&self) -> u16 {
        self.target
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &[u16] {
        &self.history
    }

    #[must_use]
    pub fn attempts(&self) -> u8 {
        clamp_u8(self.history.len())
    }

    #[must_use]
    pub fn remaining(&self) -> u8 {
        self.profile.max_attempts.saturating_sub(self.attempts())
    }

    #[must_use]
    pub const fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        matches!(self.status, SessionStatus::Playing)
    }

    /// Whether the quarter hint may be requested. Latches on once reached
    /// and never unlatches within a session.
    #[must_use]
    pub const fn hint_available(&self) -> bool {
        self.hint_unlocked && self.is_playing()
    }

    /// Classify any value against this session's target and tier bounds.
    #[must_use]
    pub fn warmth_of(&self, value: u16) -> Warmth {
        Warmth::classify(value, self.target, &self.profile.warmth_steps)
    }

    /// Submit a guess.
    ///
    /// A session that already ended stays frozen: the recorded terminal
    /// outcome is returned again and the history is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::OutOfRange`] when `value` is outside
    /// `1..=range` and [`GuessError::Duplicate`] when it was already
    /// guessed. The session is unchanged in both cases.
    pub fn guess(&mut self, value: u16) -> Result<GuessOutcome, GuessError> {
        match self.status {
            SessionStatus::Won => {
                return Ok(GuessOutcome::Won {
                    attempts: self.attempts(),
                    elapsed_secs: self.elapsed_secs,
                });
            }
            SessionStatus::Lost => {
                return Ok(GuessOutcome::Lost {
                    target: self.target,
                });
            }
            SessionStatus::Playing => {}
        }

        if value == 0 || value > self.profile.range {
            return Err(GuessError::OutOfRange {
                range: self.profile.range,
            });
        }
        if self.history.contains(&value) {
            return Err(GuessError::Duplicate { value });
        }

        self.history.push(value);
        if value == self.target {
            self.status = SessionStatus::Won;
            return Ok(GuessOutcome::Won {
                attempts: self.attempts(),
                elapsed_secs: self.elapsed_secs,
            });
        }
        if self.history.len() >= usize::from(self.profile.max_attempts) {
            self.status = SessionStatus::Lost;
            return Ok(GuessOutcome::Lost {
                target: self.target,
            });
        }

        if self.attempts() >= self.profile.hint_after {
            self.hint_unlocked = true;
        }
        Ok(GuessOutcome::Continue {
            direction: Direction::of(value, self.target),
            warmth: self.warmth_of(value),
            remaining: self.remaining(),
            hint_unlocked: self.hint_unlocked,
        })
    }

    /// Report the quarter of `1..=range` holding the target.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::HintLocked`] before enough guesses have been
    /// played or once the session has ended.
    pub fn hint(&self) -> Result<Quarter, GuessError> {
        if !self.hint_available() {
            return Err(GuessError::HintLocked);
        }
        Ok(feedback::quarter_of(self.target, self.profile.range))
    }

    /// Advance the session clock by one second. No-op once the session is
    /// over, so a sloppy driver cannot inflate the recorded time.
    pub fn tick(&mut self) {
        if self.is_playing() {
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        }
    }

    /// Terminal result for the statistics fold, once the session is over.
    #[must_use]
    pub fn result(&self) -> Option<SessionResult> {
        match self.status {
            SessionStatus::Playing => None,
            SessionStatus::Won => Some(SessionResult {
                won: true,
                attempts: self.attempts(),
            }),
            SessionStatus::Lost => Some(SessionResult {
                won: false,
                attempts: self.attempts(),
            }),
        }
    }
}

fn clamp_u8(value: usize) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Difficulty;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn medium_session(target: u16) -> Session {
        Session::with_target(Difficulty::Medium.profile(), target)
    }

    #[test]
    fn start_draws_target_inside_the_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for difficulty in Difficulty::ALL {
            let profile = difficulty.profile();
            let session = Session::start(profile, &mut rng);
            assert!((1..=profile.range).contains(&session.target()));
            assert_eq!(session.status(), SessionStatus::Playing);
            assert!(session.history().is_empty());
            assert_eq!(session.elapsed_secs(), 0);
        }
    }

    #[test]
    fn guess_outside_range_is_rejected_without_mutation() {
        let mut session = medium_session(42);
        assert_eq!(
            session.guess(0),
            Err(GuessError::OutOfRange { range: 100 })
        );
        assert_eq!(
            session.guess(101),
            Err(GuessError::OutOfRange { range: 100 })
        );
        assert!(session.history().is_empty());
        assert_eq!(session.status(), SessionStatus::Playing);
    }

    #[test]
    fn duplicate_guess_is_rejected_and_history_unchanged() {
        let mut session = medium_session(42);
        session.guess(50).unwrap();
        assert_eq!(session.guess(50), Err(GuessError::Duplicate { value: 50 }));
        assert_eq!(session.history(), &[50]);
    }

    #[test]
    fn winning_guess_freezes_the_session() {
        let mut session = medium_session(42);
        session.guess(10).unwrap();
        let outcome = session.guess(42).unwrap();
        assert_eq!(
            outcome,
            GuessOutcome::Won {
                attempts: 2,
                elapsed_secs: 0
            }
        );
        assert_eq!(session.status(), SessionStatus::Won);

        // Frozen: further guesses replay the terminal outcome untouched.
        let replay = session.guess(77).unwrap();
        assert_eq!(replay, outcome);
        assert_eq!(session.history(), &[10, 42]);
    }

    #[test]
    fn exhausting_the_budget_loses_and_reveals_the_target() {
        let mut session = medium_session(50);
        for value in 1..=9 {
            session.guess(value).unwrap();
        }
        let outcome = session.guess(10).unwrap();
        assert_eq!(outcome, GuessOutcome::Lost { target: 50 });
        assert_eq!(session.status(), SessionStatus::Lost);
        assert_eq!(session.remaining(), 0);

        let replay = session.guess(50).unwrap();
        assert_eq!(replay, GuessOutcome::Lost { target: 50 });
        assert_eq!(session.attempts(), 10);
    }

    #[test]
    fn continue_outcome_reports_direction_and_warmth() {
        let mut session = medium_session(42);
        match session.guess(45).unwrap() {
            GuessOutcome::Continue {
                direction,
                warmth,
                remaining,
                hint_unlocked,
            } => {
                assert_eq!(direction, Direction::TooHigh);
                assert_eq!(warmth, Warmth::VeryHot);
                assert_eq!(remaining, 9);
                assert!(!hint_unlocked);
            }
            other => panic!("expected a continue outcome, got {other:?}"),
        }
    }

    #[test]
    fn hint_latch_is_monotonic() {
        let mut session = medium_session(42);
        assert_eq!(session.hint(), Err(GuessError::HintLocked));
        for value in [90, 91, 92, 93] {
            session.guess(value).unwrap();
            assert!(!session.hint_available());
        }
        session.guess(94).unwrap();
        assert!(session.hint_available());
        let quarter = session.hint().unwrap();
        assert_eq!((quarter.index, quarter.lo, quarter.hi), (2, 26, 50));

        // Stays unlocked for every later guess.
        session.guess(95).unwrap();
        assert!(session.hint_available());
    }

    #[test]
    fn hint_is_locked_again_once_the_session_ends() {
        let mut session = medium_session(42);
        for value in [90, 91, 92, 93, 94] {
            session.guess(value).unwrap();
        }
        assert!(session.hint().is_ok());
        session.guess(42).unwrap();
        assert_eq!(session.hint(), Err(GuessError::HintLocked));
    }

    #[test]
    fn tick_only_advances_while_playing() {
        let mut session = medium_session(42);
        session.tick();
        session.tick();
        assert_eq!(session.elapsed_secs(), 2);
        session.guess(42).unwrap();
        session.tick();
        assert_eq!(session.elapsed_secs(), 2);
    }

    #[test]
    fn won_outcome_carries_the_elapsed_clock() {
        let mut session = medium_session(42);
        for _ in 0..75 {
            session.tick();
        }
        assert_eq!(
            session.guess(42).unwrap(),
            GuessOutcome::Won {
                attempts: 1,
                elapsed_secs: 75
            }
        );
    }

    #[test]
    fn result_is_none_until_terminal() {
        let mut session = medium_session(42);
        assert_eq!(session.result(), None);
        session.guess(41).unwrap();
        assert_eq!(session.result(), None);
        session.guess(42).unwrap();
        assert_eq!(
            session.result(),
            Some(SessionResult {
                won: true,
                attempts: 2
            })
        );
    }

    #[test]
    fn history_never_exceeds_the_budget() {
        for difficulty in Difficulty::ALL {
            let profile = difficulty.profile();
            let mut session = Session::with_target(profile, profile.range);
            for value in 1..=profile.range {
                let _ = session.guess(value);
            }
            assert!(session.history().len() <= usize::from(profile.max_attempts));
        }
    }

    #[test]
    fn with_target_clamps_out_of_range_targets() {
        let profile = Difficulty::Easy.profile();
        assert_eq!(Session::with_target(profile, 0).target(), 1);
        assert_eq!(Session::with_target(profile, 999).target(), 50);
    }
}
