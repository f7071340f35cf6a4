//! The stable track: fixed Medium profile, plain copy, no extras.

use hunch_game::{
    Difficulty, Direction, GuessError, GuessOutcome, Quarter, Session, StatsRecord, Variant,
};
use yew::prelude::*;

use super::{chip_items, plural_es};
use crate::app::state::{PlayState, SessionAction, fresh_session, use_play_state};
use crate::pages::stable::StablePage;
use crate::storage;

fn opening_message() -> AttrValue {
    AttrValue::from("I'm thinking of a number between 1 and 100!")
}

fn invalid_message() -> String {
    "Please enter a valid number between 1 and 100!".to_string()
}

fn duplicate_message() -> String {
    "You already guessed that number! Try a different one.".to_string()
}

fn outcome_message(outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Won { attempts, .. } => format!(
            "🎉 Congratulations! You found it in {attempts} guess{}!",
            plural_es(*attempts)
        ),
        GuessOutcome::Lost { target } => {
            format!("😞 Game over! The number was {target}. Better luck next time!")
        }
        GuessOutcome::Continue {
            direction,
            remaining,
            ..
        } => {
            let lead = match direction {
                Direction::TooLow => "📈 Too low!",
                Direction::TooHigh => "📉 Too high!",
            };
            format!(
                "{lead} {remaining} guess{} remaining.",
                plural_es(*remaining)
            )
        }
    }
}

fn hint_message(quarter: Quarter) -> String {
    match quarter.index {
        1 => format!("The number is quite small ({}-{})", quarter.lo, quarter.hi),
        2 => format!("The number is in the lower half ({}-{})", quarter.lo, quarter.hi),
        3 => format!("The number is in the upper half ({}-{})", quarter.lo, quarter.hi),
        _ => format!("The number is quite large ({}-{})", quarter.lo, quarter.hi),
    }
}

/// What one submitted entry does to the screen.
struct SubmitOutcome {
    session: Option<Session>,
    message: AttrValue,
    clear_entry: bool,
    folded: Option<StatsRecord>,
}

fn evaluate_entry(session: &Session, stats: StatsRecord, raw: &str) -> SubmitOutcome {
    let Ok(value) = raw.trim().parse::<u16>() else {
        return SubmitOutcome {
            session: None,
            message: AttrValue::from(invalid_message()),
            clear_entry: false,
            folded: None,
        };
    };
    let mut next = session.clone();
    match next.guess(value) {
        Err(GuessError::Duplicate { .. }) => SubmitOutcome {
            session: None,
            message: AttrValue::from(duplicate_message()),
            clear_entry: false,
            folded: None,
        },
        Err(_) => SubmitOutcome {
            session: None,
            message: AttrValue::from(invalid_message()),
            clear_entry: false,
            folded: None,
        },
        Ok(outcome) => SubmitOutcome {
            message: AttrValue::from(outcome_message(&outcome)),
            clear_entry: true,
            folded: next.result().map(|result| stats.record(result)),
            session: Some(next),
        },
    }
}

fn apply_submission(play: &PlayState, outcome: SubmitOutcome) {
    play.message.set(outcome.message);
    if outcome.clear_entry {
        play.entry.set(AttrValue::from(""));
    }
    if let Some(folded) = outcome.folded {
        play.stats.set(folded);
        storage::persist_for(play.variant, &folded);
    }
    if let Some(session) = outcome.session {
        play.session.dispatch(SessionAction::Replace(session));
    }
}

struct StableHandlers {
    on_entry: Callback<String>,
    on_guess: Callback<()>,
    on_restart: Callback<()>,
}

fn build_handlers(play: &PlayState) -> StableHandlers {
    let on_entry = {
        let entry = play.entry.clone();
        Callback::from(move |value: String| entry.set(AttrValue::from(value)))
    };
    let on_guess = {
        let play = play.clone();
        Callback::from(move |()| {
            let outcome = evaluate_entry(&play.session, *play.stats, &play.entry);
            apply_submission(&play, outcome);
        })
    };
    let on_restart = {
        let play = play.clone();
        Callback::from(move |()| {
            play.session
                .dispatch(SessionAction::Replace(fresh_session(Difficulty::Medium)));
            play.entry.set(AttrValue::from(""));
            play.message.set(opening_message());
        })
    };
    StableHandlers {
        on_entry,
        on_guess,
        on_restart,
    }
}

/// Stable track screen: engine state wired to the plain page.
#[function_component(StableScreen)]
pub fn stable_screen() -> Html {
    let play = use_play_state(Variant::Stable, Difficulty::Medium, opening_message());
    let handlers = build_handlers(&play);
    let session = &play.session;
    let hint = session
        .hint()
        .ok()
        .map(|quarter| AttrValue::from(hint_message(quarter)));

    html! {
        <StablePage
            message={(*play.message).clone()}
            status={session.status()}
            entry={(*play.entry).clone()}
            attempts={session.attempts()}
            max_attempts={session.profile().max_attempts}
            chips={chip_items(session)}
            hint={hint}
            stats={*play.stats}
            on_entry={handlers.on_entry}
            on_guess={handlers.on_guess}
            on_restart={handlers.on_restart}
        />
    }
}
