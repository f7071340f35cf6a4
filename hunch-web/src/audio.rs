//! WebAudio cues for the canary page.
//!
//! Short oscillator beeps with an exponential fade. Failures are logged and
//! swallowed; a muted or headless tab never blocks play.

/// Cue family played for a submission outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Rising arpeggio for a win.
    Success,
    /// Falling pair for a rejected or losing entry.
    Error,
    /// Single ping while the hint is unlocked.
    Hint,
}

impl Tone {
    /// `(frequency_hz, offset_secs, duration_secs)` steps of the cue.
    fn steps(self) -> &'static [(f32, f64, f64)] {
        match self {
            Self::Success => &[(523.25, 0.0, 0.2), (659.25, 0.1, 0.2), (783.99, 0.2, 0.3)],
            Self::Error => &[(220.0, 0.0, 0.3), (196.0, 0.1, 0.3)],
            Self::Hint => &[(440.0, 0.0, 0.2)],
        }
    }
}

/// Play `tone` through the browser audio stack.
pub fn play_tone(tone: Tone) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = try_play(tone) {
            log::warn!("audio cue failed: {}", crate::dom::js_error_message(&err));
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = tone;
    }
}

#[cfg(target_arch = "wasm32")]
fn try_play(tone: Tone) -> Result<(), wasm_bindgen::JsValue> {
    let ctx = web_sys::AudioContext::new()?;
    let now = ctx.current_time();
    for &(frequency, offset, duration) in tone.steps() {
        schedule_beep(&ctx, frequency, now + offset, duration)?;
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn schedule_beep(
    ctx: &web_sys::AudioContext,
    frequency: f32,
    start: f64,
    duration: f64,
) -> Result<(), wasm_bindgen::JsValue> {
    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;
    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    oscillator.frequency().set_value_at_time(frequency, start)?;
    gain.gain().set_value_at_time(0.1, start)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(0.01, start + duration)?;
    oscillator.start_with_when(start)?;
    oscillator.stop_with_when(start + duration)?;
    Ok(())
}
