//! Button effects and easter eggs.

use crate::audio;
use crate::dom::{self, js_err};
use crate::notify;
use crate::state::Site;
use crate::timer;
use tracing::{debug, info};
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yw_site_core::easter_egg::{button_effects, particle_offsets, witty_reply};
use yw_site_core::{NotificationKind, SiteError};

const COIN_CSS: &str =
    "position: fixed; pointer-events: none; font-size: 24px; animation: coinFall 1s ease-out; z-index: 9999;";
const STAR_CSS: &str =
    "position: absolute; pointer-events: none; font-size: 20px; font-weight: 900; animation: marioJump 0.6s ease-out;";

/// Append a short-lived decorative glyph at a page position.
fn spawn_glyph(glyph: &str, left: f64, top: f64, css: &str, lifetime_ms: u32) -> Result<(), SiteError> {
    let body = dom::document()
        .body()
        .ok_or_else(|| SiteError::MissingElement("body".into()))?;
    let node = dom::create_element("div")?;
    node.set_attribute("style", &format!("left: {left}px; top: {top}px; {css}"))
        .map_err(js_err)?;
    dom::set_text(&node, glyph);
    body.append_child(&node).map_err(js_err)?;
    timer::after(lifetime_ms, move || node.remove());
    Ok(())
}

/// Any `.btn`: star and coin burst at the click point; the jump marker adds
/// the jump tone.
pub fn on_button(site: &Site, button: &Element, e: &MouseEvent) {
    let (x, y) = (f64::from(e.client_x()), f64::from(e.client_y()));
    let cfg = &site.config;
    let effects = button_effects(&dom::text(button), cfg.behaviour.jump_marker.as_deref());

    if effects.jump_tone {
        audio::play_jump_tone();
    }
    if effects.star {
        if let Err(err) = spawn_glyph(&cfg.copy.star_glyph, x, y, STAR_CSS, cfg.timings.star_lifetime_ms) {
            debug!("star skipped: {}", err);
        }
    }
    if !effects.coins {
        return;
    }

    audio::play_coin_tone();
    let offsets = particle_offsets(
        cfg.behaviour.particle_count,
        cfg.behaviour.particle_spread_px,
        js_sys::Math::random,
    );
    for dx in offsets {
        if let Err(err) = spawn_glyph(
            &cfg.copy.particle_glyph,
            x + dx,
            y,
            COIN_CSS,
            cfg.timings.particle_lifetime_ms,
        ) {
            debug!("particle skipped: {}", err);
        }
    }
}

/// Apply an inline style to `<body>` and put it back after the page effect.
fn page_effect(site: &Site, property: &'static str, value: &str) {
    let Some(body) = dom::document().body() else {
        return;
    };
    let _ = body.style().set_property(property, value);
    timer::after(site.config.timings.page_effect_ms, move || {
        let _ = body.style().set_property(property, "none");
    });
}

pub fn on_logo(site: &Site, _logo: &Element, _e: &MouseEvent) {
    if !site.with_mut(|s| s.logo.click()) {
        return;
    }
    info!("logo secret unlocked");
    notify::show(site, &site.config.copy.secret_unlocked, NotificationKind::Success);
    page_effect(site, "filter", "hue-rotate(90deg)");
}

pub fn on_keydown(site: &Site, e: &KeyboardEvent) {
    if !site.with_mut(|s| s.konami.feed(&e.code())) {
        return;
    }
    info!("konami code entered");
    notify::show(site, &site.config.copy.konami_unlocked, NotificationKind::Success);
    let animation = format!("rainbow {}ms linear", site.config.timings.page_effect_ms);
    page_effect(site, "animation", &animation);
}

/// Secondary/outline buttons with a known label get a witty reply.
pub fn on_witty(site: &Site, button: &Element, _e: &MouseEvent) {
    if let Some(reply) = witty_reply(&site.config.witty, &dom::text(button)) {
        notify::show(site, reply, NotificationKind::Info);
    }
}
