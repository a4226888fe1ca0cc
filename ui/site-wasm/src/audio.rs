//! Tone playback through the Web Audio API.
//!
//! Each tone builds its own `AudioContext` and closes it once the tone has
//! played. Failures never reach the caller.

use crate::timer;
use tracing::debug;
use wasm_bindgen::JsValue;
use web_sys::AudioContext;
use yw_site_core::tone::{Tone, ToneSpec};
use yw_site_core::SiteError;

/// Extra time before the context is closed, past the tone's own duration.
const TEARDOWN_SLACK_MS: u32 = 50;

fn audio_err(e: JsValue) -> SiteError {
    SiteError::Audio(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

pub fn play(tone: Tone) {
    if let Err(e) = schedule(tone.spec()) {
        debug!("dropping {:?} tone: {}", tone, e);
    }
}

pub fn play_jump_tone() {
    play(Tone::Jump);
}

pub fn play_coin_tone() {
    play(Tone::Coin);
}

fn schedule(spec: ToneSpec) -> Result<(), SiteError> {
    let ctx = AudioContext::new().map_err(audio_err)?;
    let oscillator = ctx.create_oscillator().map_err(audio_err)?;
    let gain = ctx.create_gain().map_err(audio_err)?;

    oscillator.connect_with_audio_node(&gain).map_err(audio_err)?;
    gain.connect_with_audio_node(&ctx.destination()).map_err(audio_err)?;

    let now = ctx.current_time();
    let frequency = oscillator.frequency();
    frequency.set_value_at_time(spec.start_hz, now).map_err(audio_err)?;
    frequency
        .set_value_at_time(spec.end_hz, now + spec.step_at_s)
        .map_err(audio_err)?;

    let level = gain.gain();
    level.set_value_at_time(spec.start_gain, now).map_err(audio_err)?;
    level
        .exponential_ramp_to_value_at_time(spec.end_gain, now + spec.duration_s)
        .map_err(audio_err)?;

    oscillator.start_with_when(now).map_err(audio_err)?;
    oscillator
        .stop_with_when(now + spec.duration_s)
        .map_err(audio_err)?;

    let lifetime_ms = (spec.duration_s * 1000.0).ceil() as u32 + TEARDOWN_SLACK_MS;
    timer::after(lifetime_ms, move || {
        let _ = ctx.close();
    });
    Ok(())
}
