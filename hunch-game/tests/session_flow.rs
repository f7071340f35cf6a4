use hunch_game::{
    Difficulty, Direction, GuessError, GuessOutcome, Session, SessionStatus, StatsRecord,
    StatsStore, Variant, Warmth, load_stats, persist_stats,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

#[derive(Clone, Default)]
struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl StatsStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Midpoint bisection against the direction feedback. Wins within the
/// attempt budget on every profile whose budget covers the range.
fn play_bisecting(session: &mut Session) {
    let mut lo = 1u16;
    let mut hi = session.profile().range;
    while session.is_playing() {
        let mid = lo + (hi - lo) / 2;
        match session.guess(mid).unwrap() {
            GuessOutcome::Won { .. } | GuessOutcome::Lost { .. } => break,
            GuessOutcome::Continue { direction, .. } => match direction {
                Direction::TooLow => lo = mid + 1,
                Direction::TooHigh => hi = mid - 1,
            },
        }
    }
}

#[test]
fn scripted_medium_game_reaches_a_win_in_four() {
    let mut session = Session::with_target(Difficulty::Medium.profile(), 42);

    match session.guess(50).unwrap() {
        GuessOutcome::Continue {
            direction, warmth, ..
        } => {
            assert_eq!(direction, Direction::TooHigh);
            assert_eq!(warmth, Warmth::Hot);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    match session.guess(25).unwrap() {
        GuessOutcome::Continue { direction, .. } => assert_eq!(direction, Direction::TooLow),
        other => panic!("unexpected outcome {other:?}"),
    }
    match session.guess(45).unwrap() {
        GuessOutcome::Continue {
            direction, warmth, ..
        } => {
            assert_eq!(direction, Direction::TooHigh);
            assert_eq!(warmth, Warmth::VeryHot);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(
        session.guess(42).unwrap(),
        GuessOutcome::Won {
            attempts: 4,
            elapsed_secs: 0
        }
    );
    assert_eq!(session.status(), SessionStatus::Won);
}

#[test]
fn ten_misses_lose_and_reveal_the_target() {
    let mut session = Session::with_target(Difficulty::Medium.profile(), 50);
    for value in 1..=9 {
        assert!(matches!(
            session.guess(value).unwrap(),
            GuessOutcome::Continue { .. }
        ));
    }
    assert_eq!(
        session.guess(10).unwrap(),
        GuessOutcome::Lost { target: 50 }
    );
    assert_eq!(session.status(), SessionStatus::Lost);
    assert_eq!(session.history().len(), 10);
}

#[test]
fn hint_unlocks_at_half_the_budget() {
    let mut session = Session::with_target(Difficulty::Medium.profile(), 42);
    for value in [60, 61, 62, 63] {
        session.guess(value).unwrap();
        assert_eq!(session.hint(), Err(GuessError::HintLocked));
    }
    session.guess(64).unwrap();
    let quarter = session.hint().unwrap();
    assert_eq!((quarter.index, quarter.lo, quarter.hi), (2, 26, 50));
}

#[test]
fn rejected_guesses_spend_no_attempts() {
    let mut session = Session::with_target(Difficulty::Expert.profile(), 300);
    session.guess(250).unwrap();
    assert_eq!(
        session.guess(501),
        Err(GuessError::OutOfRange { range: 500 })
    );
    assert_eq!(session.guess(250), Err(GuessError::Duplicate { value: 250 }));
    assert_eq!(session.attempts(), 1);
    assert_eq!(session.remaining(), 5);
}

#[test]
fn elapsed_ticks_flow_into_the_winning_outcome() {
    let mut session = Session::with_target(Difficulty::Easy.profile(), 7);
    session.tick();
    session.guess(30).unwrap();
    session.tick();
    session.tick();
    assert_eq!(
        session.guess(7).unwrap(),
        GuessOutcome::Won {
            attempts: 2,
            elapsed_secs: 3
        }
    );
    session.tick();
    assert_eq!(session.elapsed_secs(), 3);
}

#[test]
fn completed_games_fold_into_persisted_stats() {
    let store = MemoryStore::default();

    let mut first = Session::with_target(Difficulty::Medium.profile(), 42);
    for value in [50, 25, 45, 42] {
        first.guess(value).unwrap();
    }
    let loaded = load_stats(&store, Variant::Canary);
    let folded = loaded.record(first.result().unwrap());
    persist_stats(&store, Variant::Canary, &folded);

    let mut second = Session::with_target(Difficulty::Medium.profile(), 99);
    for value in 1..=10 {
        second.guess(value).unwrap();
    }
    let folded = load_stats(&store, Variant::Canary).record(second.result().unwrap());
    persist_stats(&store, Variant::Canary, &folded);

    let record = load_stats(&store, Variant::Canary);
    assert_eq!(record.games_played, 2);
    assert_eq!(record.games_won, 1);
    assert!((record.average_guesses - 7.0).abs() < f64::EPSILON);
    assert_eq!(record.current_streak, 0);
    assert_eq!(record.best_streak, 1);
    assert_eq!(record.win_rate_percent(), 50);

    // The other track is untouched.
    assert_eq!(load_stats(&store, Variant::Stable), StatsRecord::default());
}

#[test]
fn streaks_track_consecutive_wins_across_sessions() {
    let store = MemoryStore::default();
    let profile = Difficulty::Easy.profile();
    let outcomes = [true, true, true, false, true];

    for win in outcomes {
        let mut session = Session::with_target(profile, 25);
        if win {
            play_bisecting(&mut session);
        } else {
            for value in 1..=12 {
                session.guess(value).unwrap();
            }
        }
        let folded = load_stats(&store, Variant::Stable).record(session.result().unwrap());
        persist_stats(&store, Variant::Stable, &folded);
    }

    let record = load_stats(&store, Variant::Stable);
    assert_eq!(record.games_played, 5);
    assert_eq!(record.games_won, 4);
    assert_eq!(record.current_streak, 1);
    assert_eq!(record.best_streak, 3);
}

#[test]
fn bisection_wins_every_target_where_the_budget_allows() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let profile = difficulty.profile();
        for target in 1..=profile.range {
            let mut session = Session::with_target(profile, target);
            play_bisecting(&mut session);
            assert_eq!(
                session.status(),
                SessionStatus::Won,
                "{difficulty} target {target} not found"
            );
            assert!(session.history().len() <= usize::from(profile.max_attempts));
        }
    }
}

#[test]
fn expert_budget_can_run_out() {
    let profile = Difficulty::Expert.profile();
    let mut session = Session::with_target(profile, 499);
    for value in 1..=6 {
        session.guess(value).unwrap();
    }
    assert_eq!(session.status(), SessionStatus::Lost);
    assert_eq!(session.remaining(), 0);
    assert_eq!(session.result().map(|r| r.won), Some(false));
}
