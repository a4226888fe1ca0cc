//! Yaam Wai site interactions, Rust + WASM.
//!
//! Attaches behaviour to the static marketing page: navigation, scroll
//! effects, stat counters, the contact form, toasts and easter eggs.
//! Platform-free logic lives in `yw-site-core`; this crate owns the DOM.

pub mod audio;
pub mod config;
pub mod counter;
pub mod dom;
pub mod events;
pub mod form;
pub mod interactions;
pub mod nav;
pub mod notify;
pub mod scroll;
pub mod state;
pub mod style;
pub mod timer;

use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yw_site_core::page::ReadyState;
use yw_site_core::SiteError;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    init_logging();

    let document = dom::document();
    if !ReadyState::parse(&document.ready_state()).awaits_dom() {
        return init().map_err(|e| JsValue::from_str(&e.to_string()));
    }

    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = init() {
            error!("site initialisation failed: {}", e);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .set_report_logs_in_timings(false)
            .build(),
    );
}

/// Main initialisation sequence.
fn init() -> Result<(), SiteError> {
    let config = config::load();
    info!("initialising site interactions ({:?})", config.variant);

    let site = state::Site::new(dom::Elements::bind(), config);

    if let Err(e) = style::inject_keyframes(&site) {
        warn!("keyframes not injected: {}", e);
    }
    style::insert_skip_link(&site);
    events::bind_events(&site)?;

    // Initial header / reveal / counter state for pages opened mid-scroll.
    scroll::update(&site);

    style::print_banner(&site);
    Ok(())
}
