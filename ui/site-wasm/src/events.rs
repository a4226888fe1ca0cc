//! Event binding.
//!
//! One listener per event type. Clicks are delegated from `document` and
//! routed through `CLICK_ROUTES` by `closest()` matching, in table order;
//! field events are delegated from the contact form.

use crate::dom;
use crate::form;
use crate::interactions;
use crate::nav;
use crate::notify;
use crate::scroll;
use crate::state::Site;
use crate::style;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yw_site_core::page::ReadyState;
use yw_site_core::SiteError;

/// Helper: attach an `Event` handler to a target for the page's lifetime.
macro_rules! listen {
    ($target:expr, $event:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::Event)>);
        $target
            .add_event_listener_with_callback($event, cb.as_ref().unchecked_ref())
            .map_err(dom::js_err)?;
        cb.forget();
    }};
}

type ClickHandler = fn(&Site, &Element, &MouseEvent);

/// Selector → handler. Every matching route runs for a single click.
const CLICK_ROUTES: &[(&str, ClickHandler)] = &[
    ("#nav-toggle", nav::on_toggle),
    (".nav__link", nav::on_link),
    (".nav__logo", interactions::on_logo),
    (".btn", interactions::on_button),
    (".btn--secondary, .btn--outline", interactions::on_witty),
    (".notification__close", notify::on_close),
];

fn dispatch_click(site: &Site, e: &MouseEvent) {
    let Some(target) = dom::event_element(e) else {
        return;
    };
    for (selector, handler) in CLICK_ROUTES {
        if let Some(matched) = dom::closest(&target, selector) {
            handler(site, &matched, e);
        }
    }
}

/// Bind all listeners. Call once after the document is parsed.
pub fn bind_events(site: &Site) -> Result<(), SiteError> {
    let document = dom::document();
    let window = dom::window();

    // ── Clicks ──
    {
        let site = site.clone();
        listen!(document, "click", move |e: web_sys::Event| {
            if let Some(mouse) = e.dyn_ref::<MouseEvent>() {
                dispatch_click(&site, mouse);
            }
        });
    }

    // ── Keys ──
    {
        let site = site.clone();
        listen!(document, "keydown", move |e: web_sys::Event| {
            if let Some(key) = e.dyn_ref::<KeyboardEvent>() {
                interactions::on_keydown(&site, key);
            }
        });
    }

    // ── Scroll / load ──
    {
        let site = site.clone();
        listen!(window, "scroll", move |_: web_sys::Event| {
            scroll::on_scroll(&site);
        });
    }
    if ReadyState::parse(&document.ready_state()).is_complete() {
        style::mark_loaded();
    } else {
        let site = site.clone();
        listen!(window, "load", move |_: web_sys::Event| {
            style::mark_loaded();
            scroll::update(&site);
        });
    }

    // ── Contact form ──
    if let Some(form_el) = &site.els.contact_form {
        {
            let site = site.clone();
            listen!(form_el, "submit", move |e: web_sys::Event| {
                form::on_submit(&site, &e);
            });
        }
        {
            let site = site.clone();
            listen!(form_el, "input", move |e: web_sys::Event| {
                form::on_field_input(&site, &e);
            });
        }
        {
            // blur does not bubble; capture it on the way down instead.
            let site = site.clone();
            let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
                form::on_field_blur(&site, &e);
            }) as Box<dyn FnMut(_)>);
            let opts = web_sys::AddEventListenerOptions::new();
            opts.set_capture(true);
            form_el
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "blur",
                    cb.as_ref().unchecked_ref(),
                    &opts,
                )
                .map_err(dom::js_err)?;
            cb.forget();
        }
    }

    Ok(())
}
