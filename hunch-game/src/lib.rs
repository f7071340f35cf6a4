//! Hunch Game Engine
//!
//! Platform-agnostic core for the Hunch number-guessing game. This crate
//! holds the session state machine and the statistics fold with no UI or
//! platform-specific dependencies; entropy, clocks and storage are injected
//! by the caller.

pub mod feedback;
pub mod profile;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use feedback::{Direction, Quarter, Warmth, quarter_of};
pub use profile::{Difficulty, DifficultyProfile};
pub use session::{GuessError, GuessList, GuessOutcome, Session, SessionResult, SessionStatus};
pub use stats::{StatsRecord, Variant, load_stats, persist_stats};

/// Durable string key-value storage for statistics records.
/// Platform-specific implementations should provide this.
pub trait StatsStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}
