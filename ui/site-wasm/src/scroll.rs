//! Scroll effects, coalesced to one update per animation frame.

use crate::counter;
use crate::dom;
use crate::state::Site;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yw_site_core::scroll::{is_scrolled, should_reveal};

pub fn on_scroll(site: &Site) {
    if !site.with_mut(|s| s.scroll.request()) {
        return;
    }

    let site2 = site.clone();
    let frame = Closure::once_into_js(move |_ts: f64| {
        site2.with_mut(|s| s.scroll.complete());
        update(&site2);
    });
    if dom::window().request_animation_frame(frame.unchecked_ref()).is_err() {
        site.with_mut(|s| s.scroll.complete());
        update(site);
    }
}

/// Header style, reveal check and counter check for the current position.
pub fn update(site: &Site) {
    let behaviour = &site.config.behaviour;

    if let Some(header) = &site.els.header {
        let y = dom::window().scroll_y().unwrap_or(0.0);
        dom::toggle_class(header, "scrolled", is_scrolled(y, behaviour.scroll_threshold_px));
    }

    if behaviour.reveal_on_scroll {
        reveal(site);
    }

    counter::check(site);
}

fn reveal(site: &Site) {
    let viewport = dom::viewport_height();
    let offset = site.config.behaviour.reveal_offset_px;
    for el in &site.els.fade_ins {
        if dom::has_class(el, "visible") {
            continue;
        }
        if should_reveal(el.get_bounding_client_rect().top(), viewport, offset) {
            dom::add_class(el, "visible");
        }
    }
}
