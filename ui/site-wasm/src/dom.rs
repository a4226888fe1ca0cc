//! DOM element bindings.
//!
//! Collaborators from the page markup are resolved once at startup. Every one
//! of them is optional: a missing element switches its behaviour off instead
//! of failing initialisation.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement};
use yw_site_core::SiteError;

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

/// Convert a thrown JS value into the crate error.
pub fn js_err(e: JsValue) -> SiteError {
    SiteError::Dom(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

/// First match, or `None` for no match and for an invalid selector.
pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    collect(document().query_selector_all(selector))
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    collect(parent.query_selector_all(selector))
}

fn collect(list: Result<web_sys::NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    let mut v = Vec::new();
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            v.push(el);
        }
    }
    v
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn create_element(tag: &str) -> Result<Element, SiteError> {
    document().create_element(tag).map_err(js_err)
}

/// Set one inline style property. Non-HTML elements are ignored.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn set_styles(el: &Element, properties: &[(&str, &str)]) {
    for (property, value) in properties {
        set_style(el, property, value);
    }
}

/// The element an event was dispatched to, if it is an element.
pub fn event_element(e: &Event) -> Option<Element> {
    e.target()?.dyn_into::<Element>().ok()
}

/// Nearest ancestor-or-self matching `selector`.
pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn offset_top(el: &Element) -> f64 {
    el.dyn_ref::<HtmlElement>()
        .map(|h| f64::from(h.offset_top()))
        .unwrap_or(0.0)
}

pub fn offset_height(el: &Element) -> f64 {
    el.dyn_ref::<HtmlElement>()
        .map(|h| f64::from(h.offset_height()))
        .unwrap_or(0.0)
}

pub fn text(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

// ── Elements struct ──

/// Page collaborators used by the interaction layer.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone, Default)]
pub struct Elements {
    pub header: Option<Element>,
    pub nav_toggle: Option<Element>,
    pub nav_menu: Option<Element>,
    pub nav_logo: Option<Element>,
    pub contact_form: Option<HtmlFormElement>,
    pub counters: Vec<Element>,
    pub fade_ins: Vec<Element>,
}

impl Elements {
    /// Resolve DOM references. Call once the document has been parsed.
    pub fn bind() -> Elements {
        let els = Elements {
            header: by_id("header").or_else(|| query("header")).or_else(|| query(".header")),
            nav_toggle: by_id("nav-toggle"),
            nav_menu: by_id("nav-menu"),
            nav_logo: query(".nav__logo"),
            contact_form: by_id_typed::<HtmlFormElement>("contact-form"),
            counters: query_all(".stat__number[data-count]"),
            fade_ins: query_all(".fade-in"),
        };

        let missing: Vec<&str> = [
            ("header", els.header.is_none()),
            ("#nav-toggle", els.nav_toggle.is_none()),
            ("#nav-menu", els.nav_menu.is_none()),
            (".nav__logo", els.nav_logo.is_none()),
            ("#contact-form", els.contact_form.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();
        if !missing.is_empty() {
            tracing::debug!("page has no {}; related behaviour is off", missing.join(", "));
        }
        els
    }
}
