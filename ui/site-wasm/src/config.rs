//! Page-supplied configuration.
//!
//! `<body data-variant="classic">` picks a preset; an optional
//! `<script type="application/json" id="site-config">` overrides fields of it.

use crate::dom;
use tracing::{info, warn};
use yw_site_core::{SiteConfig, SiteVariant};

const CONFIG_SCRIPT_ID: &str = "site-config";

fn variant_from_body() -> SiteVariant {
    let Some(raw) = dom::document().body().and_then(|b| b.get_attribute("data-variant")) else {
        return SiteVariant::default();
    };
    SiteVariant::from_attr(&raw).unwrap_or_else(|| {
        warn!("unknown data-variant '{}', using default", raw);
        SiteVariant::default()
    })
}

/// Resolve the effective configuration. Never fails: a broken override is
/// reported and the preset is used as is.
pub fn load() -> SiteConfig {
    let fallback = variant_from_body();

    let raw = dom::by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
        .unwrap_or_default();
    if raw.trim().is_empty() {
        return SiteConfig::for_variant(fallback);
    }

    match SiteConfig::from_json(&raw, fallback) {
        Ok(config) => {
            info!("loaded #{} overrides for {:?}", CONFIG_SCRIPT_ID, config.variant);
            config
        }
        Err(e) => {
            warn!("ignoring #{}: {}", CONFIG_SCRIPT_ID, e);
            SiteConfig::for_variant(fallback)
        }
    }
}
