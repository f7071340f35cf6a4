//! Play state shared by the stable and canary tracks.
//!
//! The running session lives behind a reducer so the interval-driven clock
//! always acts on the current snapshot instead of the one captured when the
//! timer was scheduled.

use std::rc::Rc;

use hunch_game::{Difficulty, Session, StatsRecord, Variant};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use yew::prelude::*;

use crate::storage;

/// Actions applied to the running session.
pub enum SessionAction {
    /// Swap in a new snapshot after a guess or a restart.
    Replace(Session),
    /// Advance the play clock by one second.
    Tick,
}

/// Reducer wrapper around the engine session.
#[derive(PartialEq)]
pub struct ActiveSession(pub Session);

impl Reducible for ActiveSession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Replace(session) => Rc::new(Self(session)),
            SessionAction::Tick => {
                if self.0.is_playing() {
                    let mut session = self.0.clone();
                    session.tick();
                    Rc::new(Self(session))
                } else {
                    self
                }
            }
        }
    }
}

impl std::ops::Deref for ActiveSession {
    type Target = Session;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Start a fresh session for `difficulty`, seeded from the wall clock.
#[must_use]
pub fn fresh_session(difficulty: Difficulty) -> Session {
    let mut rng = SmallRng::seed_from_u64(clock_entropy());
    Session::start(difficulty.profile(), &mut rng)
}

#[cfg(target_arch = "wasm32")]
fn clock_entropy() -> u64 {
    js_sys::Date::now().to_bits()
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_entropy() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos()))
}

/// Handles shared by a presentation track and its callbacks.
#[derive(Clone)]
pub struct PlayState {
    pub variant: Variant,
    pub session: UseReducerHandle<ActiveSession>,
    pub entry: UseStateHandle<AttrValue>,
    pub message: UseStateHandle<AttrValue>,
    pub stats: UseStateHandle<StatsRecord>,
}

/// Mount the session, entry, message and stats state for one track.
#[hook]
pub fn use_play_state(variant: Variant, difficulty: Difficulty, opener: AttrValue) -> PlayState {
    let session = use_reducer(|| ActiveSession(fresh_session(difficulty)));
    let entry = use_state(|| AttrValue::from(""));
    let message = use_state(|| opener);
    let stats = use_state(|| storage::initial_stats(variant));
    PlayState {
        variant,
        session,
        entry,
        message,
        stats,
    }
}
