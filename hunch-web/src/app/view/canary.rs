//! The canary track: difficulty tiers, warmth captions, timer, sound cues
//! and the celebration overlay.

use hunch_game::{
    Difficulty, Direction, GuessError, GuessOutcome, Quarter, Session, StatsRecord, Variant,
    Warmth,
};
use yew::prelude::*;

use super::{chip_items, plural_es};
use crate::app::state::{PlayState, SessionAction, fresh_session, use_play_state};
use crate::audio::{self, Tone};
use crate::pages::canary::CanaryPage;
use crate::storage;
use crate::ticker::use_session_ticker;

const CELEBRATION_MS: i32 = 3_000;

fn opening_message(range: u16) -> AttrValue {
    AttrValue::from(format!(
        "🎯 I'm thinking of a number between 1 and {range}!"
    ))
}

fn invalid_message(range: u16) -> String {
    format!("❌ Please enter a valid number between 1 and {range}!")
}

fn duplicate_message() -> String {
    "🔄 You already guessed that number! Try a different one.".to_string()
}

const fn warmth_caption(warmth: Warmth) -> &'static str {
    match warmth {
        Warmth::Exact => "🎯",
        Warmth::VeryHot => "🔥 Very Hot!",
        Warmth::Hot => "♨️ Hot!",
        Warmth::Warm => "😊 Warm",
        Warmth::Cool => "😐 Cool",
        Warmth::Cold => "🥶 Cold!",
    }
}

fn outcome_message(outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Won {
            attempts,
            elapsed_secs,
        } => format!(
            "🎉 Incredible! You found it in {attempts} guess{} and {elapsed_secs}s!",
            plural_es(*attempts)
        ),
        GuessOutcome::Lost { target } => {
            format!("💀 Game over! The number was {target}. Better luck next time!")
        }
        GuessOutcome::Continue {
            direction,
            warmth,
            remaining,
            ..
        } => {
            let lead = match direction {
                Direction::TooLow => "📈 Too low!",
                Direction::TooHigh => "📉 Too high!",
            };
            format!(
                "{lead} {} {remaining} guess{} remaining.",
                warmth_caption(*warmth),
                plural_es(*remaining)
            )
        }
    }
}

fn hint_message(quarter: Quarter) -> String {
    let ordinal = match quarter.index {
        1 => "first",
        2 => "second",
        3 => "third",
        _ => "fourth",
    };
    format!(
        "🎯 The number is in the {ordinal} quarter ({}-{})",
        quarter.lo, quarter.hi
    )
}

fn outcome_tone(outcome: &GuessOutcome) -> Option<Tone> {
    match outcome {
        GuessOutcome::Won { .. } => Some(Tone::Success),
        GuessOutcome::Lost { .. } => Some(Tone::Error),
        GuessOutcome::Continue {
            hint_unlocked: true,
            ..
        } => Some(Tone::Hint),
        GuessOutcome::Continue { .. } => None,
    }
}

/// What one submitted entry does to the screen.
struct SubmitOutcome {
    session: Option<Session>,
    message: AttrValue,
    clear_entry: bool,
    tone: Option<Tone>,
    celebrate: bool,
    folded: Option<StatsRecord>,
}

fn evaluate_entry(session: &Session, stats: StatsRecord, raw: &str) -> SubmitOutcome {
    let range = session.profile().range;
    let Ok(value) = raw.trim().parse::<u16>() else {
        return SubmitOutcome {
            session: None,
            message: AttrValue::from(invalid_message(range)),
            clear_entry: false,
            tone: Some(Tone::Error),
            celebrate: false,
            folded: None,
        };
    };
    let mut next = session.clone();
    match next.guess(value) {
        Err(GuessError::Duplicate { .. }) => SubmitOutcome {
            session: None,
            message: AttrValue::from(duplicate_message()),
            clear_entry: false,
            tone: Some(Tone::Error),
            celebrate: false,
            folded: None,
        },
        Err(_) => SubmitOutcome {
            session: None,
            message: AttrValue::from(invalid_message(range)),
            clear_entry: false,
            tone: Some(Tone::Error),
            celebrate: false,
            folded: None,
        },
        Ok(outcome) => SubmitOutcome {
            tone: outcome_tone(&outcome),
            celebrate: matches!(outcome, GuessOutcome::Won { .. }),
            message: AttrValue::from(outcome_message(&outcome)),
            clear_entry: true,
            folded: next.result().map(|result| stats.record(result)),
            session: Some(next),
        },
    }
}

fn schedule_celebration_reset(celebrating: UseStateHandle<bool>) {
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            let _ = crate::dom::sleep_ms(CELEBRATION_MS).await;
            celebrating.set(false);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = celebrating;
    }
}

struct CanaryHandlers {
    on_entry: Callback<String>,
    on_guess: Callback<()>,
    on_restart: Callback<()>,
    on_difficulty: Callback<Difficulty>,
    on_toggle_sound: Callback<()>,
}

fn build_handlers(
    play: &PlayState,
    difficulty: &UseStateHandle<Difficulty>,
    sound_enabled: &UseStateHandle<bool>,
    celebrating: &UseStateHandle<bool>,
) -> CanaryHandlers {
    let on_entry = {
        let entry = play.entry.clone();
        Callback::from(move |value: String| entry.set(AttrValue::from(value)))
    };
    let on_guess = {
        let play = play.clone();
        let sound_enabled = sound_enabled.clone();
        let celebrating = celebrating.clone();
        Callback::from(move |()| {
            let outcome = evaluate_entry(&play.session, *play.stats, &play.entry);
            if *sound_enabled && let Some(tone) = outcome.tone {
                audio::play_tone(tone);
            }
            if outcome.celebrate {
                celebrating.set(true);
                schedule_celebration_reset(celebrating.clone());
            }
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
        })
    };
    let on_restart = {
        let play = play.clone();
        let difficulty = difficulty.clone();
        let celebrating = celebrating.clone();
        Callback::from(move |()| {
            restart(&play, *difficulty, &celebrating);
        })
    };
    let on_difficulty = {
        let play = play.clone();
        let difficulty = difficulty.clone();
        let celebrating = celebrating.clone();
        Callback::from(move |next: Difficulty| {
            difficulty.set(next);
            restart(&play, next, &celebrating);
        })
    };
    let on_toggle_sound = {
        let sound_enabled = sound_enabled.clone();
        Callback::from(move |()| sound_enabled.set(!*sound_enabled))
    };
    CanaryHandlers {
        on_entry,
        on_guess,
        on_restart,
        on_difficulty,
        on_toggle_sound,
    }
}

fn restart(play: &PlayState, difficulty: Difficulty, celebrating: &UseStateHandle<bool>) {
    play.session
        .dispatch(SessionAction::Replace(fresh_session(difficulty)));
    play.entry.set(AttrValue::from(""));
    play.message
        .set(opening_message(difficulty.profile().range));
    celebrating.set(false);
}

/// Canary track screen: engine state wired to the enhanced page.
#[function_component(CanaryScreen)]
pub fn canary_screen() -> Html {
    let difficulty = use_state(Difficulty::default);
    let sound_enabled = use_state(|| true);
    let celebrating = use_state(|| false);
    let play = use_play_state(
        Variant::Canary,
        *difficulty,
        opening_message(difficulty.profile().range),
    );
    use_session_ticker(&play.session);
    let handlers = build_handlers(&play, &difficulty, &sound_enabled, &celebrating);
    let session = &play.session;
    let hint = session
        .hint()
        .ok()
        .map(|quarter| AttrValue::from(hint_message(quarter)));

    html! {
        <CanaryPage
            difficulty={*difficulty}
            message={(*play.message).clone()}
            status={session.status()}
            entry={(*play.entry).clone()}
            attempts={session.attempts()}
            max_attempts={session.profile().max_attempts}
            range={session.profile().range}
            elapsed_secs={session.elapsed_secs()}
            sound_enabled={*sound_enabled}
            celebrating={*celebrating}
            chips={chip_items(session)}
            hint={hint}
            stats={*play.stats}
            on_entry={handlers.on_entry}
            on_guess={handlers.on_guess}
            on_restart={handlers.on_restart}
            on_difficulty={handlers.on_difficulty}
            on_toggle_sound={handlers.on_toggle_sound}
        />
    }
}
