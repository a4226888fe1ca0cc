//! One-time page chrome: injected keyframes, skip link, `loaded` marker and
//! the console banner.

use crate::dom::{self, js_err};
use crate::state::Site;
use tracing::debug;
use yw_site_core::{SiteError, SiteVariant};

const STYLE_ID: &str = "yw-site-keyframes";

const KEYFRAMES: &str = r#"
    @keyframes bounce {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-10px); }
    }

    @keyframes marioJump {
        0% { opacity: 1; transform: translateY(0) scale(1); }
        50% { opacity: 1; transform: translateY(-50px) scale(1.2); }
        100% { opacity: 0; transform: translateY(-100px) scale(0.5); }
    }

    @keyframes coinFall {
        0% { opacity: 1; transform: translateY(0) rotateZ(0deg) scale(1); }
        100% { opacity: 0; transform: translateY(60px) rotateZ(360deg) scale(0.5); }
    }

    @keyframes powerUpPulse {
        0%, 100% { transform: scale(1); }
        50% { transform: scale(1.1); }
    }

    @keyframes rainbow {
        0% { filter: hue-rotate(0deg); }
        100% { filter: hue-rotate(360deg); }
    }

    .skip-link { position: absolute; left: -9999px; top: 8px; z-index: 10001; }
    .skip-link:focus { left: 8px; }
"#;

const PULSE_RULES: &str = r#"
    .btn { animation: powerUpPulse 2s ease-in-out infinite; }
    .btn:hover { animation: none; }
"#;

/// Append the keyframe stylesheet to `<head>`, once.
pub fn inject_keyframes(site: &Site) -> Result<(), SiteError> {
    if dom::by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let head = dom::document()
        .head()
        .ok_or_else(|| SiteError::MissingElement("head".into()))?;

    let mut css = KEYFRAMES.to_string();
    if site.config.variant == SiteVariant::Adventure {
        css.push_str(PULSE_RULES);
    }

    let style = dom::create_element("style")?;
    style.set_id(STYLE_ID);
    dom::set_text(&style, &css);
    head.append_child(&style).map_err(js_err)?;
    Ok(())
}

/// Insert a skip link before everything else in `<body>`, pointing at the
/// page's main region. Pages without one, or with their own link, are left
/// untouched.
pub fn insert_skip_link(site: &Site) {
    if dom::query(".skip-link").is_some() {
        return;
    }
    let Some(main) = dom::by_id("main").or_else(|| dom::query("main")) else {
        debug!("no main region, skip link not inserted");
        return;
    };
    let Some(body) = dom::document().body() else {
        return;
    };
    if main.id().is_empty() {
        main.set_id("main");
    }

    let inserted = skip_link(&main.id(), &site.config.copy.skip_link_label).and_then(|link| {
        body.insert_before(&link, body.first_child().as_ref())
            .map(drop)
            .map_err(js_err)
    });
    if let Err(e) = inserted {
        debug!("skip link not inserted: {}", e);
    }
}

fn skip_link(target_id: &str, label: &str) -> Result<web_sys::Element, SiteError> {
    let link = dom::create_element("a")?;
    link.set_class_name("skip-link");
    link.set_attribute("href", &format!("#{target_id}")).map_err(js_err)?;
    dom::set_text(&link, label);
    Ok(link)
}

/// Called on window `load`.
pub fn mark_loaded() {
    if let Some(body) = dom::document().body() {
        dom::add_class(&body, "loaded");
    }
}

pub fn print_banner(site: &Site) {
    web_sys::console::log_1(&site.config.copy.banner.as_str().into());
}
