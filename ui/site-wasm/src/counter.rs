//! Stat counter animation.
//!
//! The whole `.stat__number[data-count]` set starts counting the first time
//! any of them is on screen, and never again during this page's life.

use crate::dom;
use crate::state::Site;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yw_site_core::counter::{in_viewport, parse_target, CountUp};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub fn check(site: &Site) {
    let counters = &site.els.counters;
    if counters.is_empty() || site.with(|s| s.counters.has_fired()) {
        return;
    }

    let viewport = dom::viewport_height();
    let on_screen = counters.iter().any(|el| {
        let rect = el.get_bounding_client_rect();
        in_viewport(rect.top(), rect.bottom(), viewport)
    });
    if !on_screen || !site.with_mut(|s| s.counters.try_fire()) {
        return;
    }

    info!("starting {} stat counters", counters.len());
    let duration_ms = site.config.timings.counter_duration_ms;
    for el in counters {
        let target = parse_target(el.get_attribute("data-count").as_deref());
        animate(el.clone(), CountUp::new(target, duration_ms));
    }
}

fn now() -> f64 {
    dom::window()
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Ask for the next frame. On failure the counter is settled on its final
/// text and the callback released.
fn request_frame(f: &FrameCallback, el: &Element, count: &CountUp) {
    let scheduled = match f.borrow().as_ref() {
        Some(cb) => dom::window().request_animation_frame(cb.as_ref().unchecked_ref()),
        None => return,
    };
    if let Err(e) = scheduled {
        warn!("animation frame unavailable, settling counter: {}", dom::js_err(e));
        dom::set_text(el, &count.final_frame().text);
        release(f);
    }
}

/// Drop the frame callback on the next tick; it cannot drop itself mid-call.
fn release(f: &FrameCallback) {
    let f = f.clone();
    crate::timer::after(0, move || drop(f.borrow_mut().take()));
}

/// Rewrite `el` once per animation frame until the count-up is done.
fn animate(el: Element, count: CountUp) {
    let start = now();
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let first = el.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let frame = count.frame(ts - start);
        dom::set_text(&el, &frame.text);
        if frame.done {
            release(&f);
            return;
        }
        request_frame(&f, &el, &count);
    }) as Box<dyn FnMut(f64)>));

    request_frame(&g, &first, &count);
}
