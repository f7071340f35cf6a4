//! One-second play clock.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::app::state::{ActiveSession, SessionAction};

const TICK_MS: i32 = 1_000;

/// Advance the session clock once per second while the session is playing.
///
/// The interval is cleared when the session leaves play and on unmount. Ticks
/// go through the reducer dispatcher so they always reach the current
/// session, not the snapshot that was live when the interval was scheduled.
#[hook]
pub fn use_session_ticker(session: &UseReducerHandle<ActiveSession>) {
    let dispatcher = session.dispatcher();
    let running = session.is_playing();
    use_effect_with(running, move |&running| {
        let mut interval_id: Option<i32> = None;
        let mut stored_closure: Option<Closure<dyn FnMut()>> = None;
        if running && let Some(window) = web_sys::window() {
            let closure = Closure::wrap(Box::new(move || {
                dispatcher.dispatch(SessionAction::Tick);
            }) as Box<dyn FnMut()>);
            if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                TICK_MS,
            ) {
                interval_id = Some(id);
                stored_closure = Some(closure);
            }
        }
        move || {
            if let Some(id) = interval_id
                && let Some(win) = web_sys::window()
            {
                win.clear_interval_with_handle(id);
            }
            if let Some(closure) = stored_closure {
                drop(closure);
            }
        }
    });
}
