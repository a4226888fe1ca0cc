//! Contact form: inline field validation and the simulated submission.

use crate::audio;
use crate::dom::{self, js_err};
use crate::notify;
use crate::state::Site;
use crate::timer::BrowserDelay;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yw_site_core::submission::{is_submit_control, simulate_submission, SubmissionPlan, SubmitHost};
use yw_site_core::validation::{validate, FieldKind, FieldRules};
use yw_site_core::{NotificationKind, SiteError};

// ── Field validation ──

fn field_state(el: &Element) -> Option<(String, FieldRules)> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        let rules = FieldRules {
            required: input.required(),
            kind: FieldKind::from_input_type(&input.type_()),
        };
        return Some((input.value(), rules));
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        let rules = FieldRules {
            required: area.required(),
            kind: FieldKind::Text,
        };
        return Some((area.value(), rules));
    }
    None
}

/// Remove the inline error next to `field` and its `error` class.
fn clear_field_error(field: &Element) {
    if let Some(parent) = field.parent_element() {
        for existing in dom::query_all_within(&parent, ".field-error") {
            existing.remove();
        }
    }
    dom::remove_class(field, "error");
}

fn show_field_error(field: &Element, message: &str) -> Result<(), SiteError> {
    let parent = field
        .parent_element()
        .ok_or_else(|| SiteError::MissingElement("field parent".into()))?;
    dom::add_class(field, "error");

    let error = dom::create_element("div")?;
    error.set_class_name("field-error");
    dom::set_text(&error, message);
    dom::set_styles(
        &error,
        &[
            ("color", "#FF0000"),
            ("font-size", "12px"),
            ("margin-top", "4px"),
            ("font-weight", "bold"),
        ],
    );
    parent.append_child(&error).map_err(js_err)?;
    Ok(())
}

/// Blur (captured on the form): validate and render.
pub fn on_field_blur(site: &Site, e: &Event) {
    let Some(field) = dom::event_element(e) else {
        return;
    };
    let Some((value, rules)) = field_state(&field) else {
        return;
    };

    clear_field_error(&field);
    if let Err(err) = validate(&value, rules, &site.config.copy) {
        if let Err(e) = show_field_error(&field, err.message()) {
            debug!("could not render field error: {}", e);
        }
    }
}

/// Typing clears the error without re-validating.
pub fn on_field_input(_site: &Site, e: &Event) {
    if let Some(field) = dom::event_element(e) {
        if field_state(&field).is_some() {
            clear_field_error(&field);
        }
    }
}

// ── Submission ──

struct DomForm {
    site: Site,
    form: HtmlFormElement,
    button: Option<Element>,
}

impl DomForm {
    fn set_disabled(&self, disabled: bool) {
        let Some(button) = &self.button else {
            return;
        };
        if let Some(b) = button.dyn_ref::<HtmlButtonElement>() {
            b.set_disabled(disabled);
        } else if let Some(i) = button.dyn_ref::<HtmlInputElement>() {
            i.set_disabled(disabled);
        }
    }

    /// `<input type=submit>` shows its value; buttons show their text.
    fn set_label(&self, button: &Element, label: &str) {
        match button.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.set_value(label),
            None => dom::set_text(button, label),
        }
    }
}

impl SubmitHost for DomForm {
    fn submit_label(&self) -> String {
        match &self.button {
            Some(b) => match b.dyn_ref::<HtmlInputElement>() {
                Some(input) => input.value(),
                None => dom::text(b),
            },
            None => String::new(),
        }
    }

    fn set_busy(&self, busy: bool, label: &str) {
        self.set_disabled(busy);
        if let Some(button) = &self.button {
            dom::toggle_class(button, "loading", busy);
            self.set_label(button, label);
        }
    }

    fn play_feedback(&self) {
        audio::play_coin_tone();
    }

    fn announce_success(&self, message: &str) {
        notify::show(&self.site, message, NotificationKind::Success);
    }

    fn reset_fields(&self) {
        self.form.reset();
    }
}

/// First control in the form that would submit it.
fn submit_control(form: &HtmlFormElement) -> Option<Element> {
    dom::query_all_within(form, "button, input")
        .into_iter()
        .find(|el| is_submit_control(&el.tag_name(), el.get_attribute("type").as_deref()))
}

pub fn on_submit(site: &Site, e: &Event) {
    let Some(form) = site.els.contact_form.clone() else {
        return;
    };
    e.prevent_default();

    if !site.with_mut(|s| s.submission.try_begin()) {
        debug!("submission already in flight, ignoring");
        return;
    }

    let host = DomForm {
        site: site.clone(),
        button: submit_control(&form),
        form,
    };
    let plan = SubmissionPlan::from(site.config.as_ref());
    spawn_local(async move {
        simulate_submission(&host, &BrowserDelay, &plan).await;
        host.site.with_mut(|s| s.submission.finish());
    });
}
