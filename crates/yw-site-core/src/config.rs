//! Site configuration.
//!
//! Two presets exist, one per flavour of the marketing page. A page may embed
//! a JSON document that overrides any field; it is layered over the preset
//! selected by its `variant` key (or by the caller's fallback).

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteVariant {
    /// Retro game flavour: jump tone on navigation, coin tone on submit.
    #[default]
    Adventure,
    /// Plain flavour: silent navigation, fade-in reveal on scroll.
    Classic,
}

impl SiteVariant {
    /// Parse the `data-variant` attribute value.
    pub fn from_attr(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "adventure" => Some(SiteVariant::Adventure),
            "classic" => Some(SiteVariant::Classic),
            _ => None,
        }
    }
}

/// User-facing strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteCopy {
    pub loading_label: String,
    pub submit_success: String,
    pub secret_unlocked: String,
    pub konami_unlocked: String,
    pub required_field: String,
    pub invalid_email: String,
    pub particle_glyph: String,
    pub star_glyph: String,
    pub skip_link_label: String,
    pub banner: String,
}

/// Durations, all in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    pub toast_slide_in_ms: u32,
    pub toast_auto_close_ms: u32,
    pub toast_transition_ms: u32,
    pub submit_delay_ms: u32,
    pub counter_duration_ms: u32,
    pub particle_lifetime_ms: u32,
    pub star_lifetime_ms: u32,
    pub page_effect_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            toast_slide_in_ms: 100,
            toast_auto_close_ms: 5_000,
            toast_transition_ms: 300,
            submit_delay_ms: 2_000,
            counter_duration_ms: 2_000,
            particle_lifetime_ms: 1_000,
            star_lifetime_ms: 600,
            page_effect_ms: 2_000,
        }
    }
}

/// Thresholds and per-variant switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Behaviour {
    pub scroll_threshold_px: f64,
    pub reveal_offset_px: f64,
    pub logo_click_threshold: u32,
    pub particle_count: u32,
    pub particle_spread_px: f64,
    pub jump_on_nav: bool,
    pub coin_on_submit: bool,
    pub reveal_on_scroll: bool,
    /// Substring marking an href as another page rather than an anchor.
    pub page_marker: String,
    /// Button text that triggers the jump tone and star burst.
    pub jump_marker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub variant: SiteVariant,
    pub copy: SiteCopy,
    pub timings: Timings,
    pub behaviour: Behaviour,
    /// Secondary/outline button label → message shown when clicked.
    pub witty: BTreeMap<String, String>,
}

const ADVENTURE_BANNER: &str = r#"
🍄 WELCOME TO THE YAAM WAI FRIENDSHIP KINGDOM! 🍄

   ╔═══════════════════════════════════════╗
   ║  LEVEL 1: MAKE A FRIEND               ║
   ║  LEVEL 2: HELP ANOTHER FRIEND         ║
   ║  LEVEL 3: BUILD YOUR SQUAD            ║
   ║  BOSS LEVEL: SAVE THE WORLD           ║
   ║                                       ║
   ║  STATUS: LEGENDARY ADVENTURE          ║
   ║  DIFFICULTY: MAXIMUM FUN              ║
   ╚═══════════════════════════════════════╝

"It's dangerous to go alone..." - But you don't have to!
Join Yaam Wai and find your forever squad.
"#;

const CLASSIC_BANNER: &str = "Yaam Wai: find your people. Curious how this page works? Say hi through the contact form.";

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(label, message)| (label.to_string(), message.to_string()))
        .collect()
}

impl SiteConfig {
    /// Built-in preset for a variant.
    pub fn for_variant(variant: SiteVariant) -> Self {
        match variant {
            SiteVariant::Adventure => Self {
                variant,
                copy: SiteCopy {
                    loading_label: "⏳ LOADING... ⏳".into(),
                    submit_success: "🎉 LEVEL COMPLETE! We got your message! 🎉".into(),
                    secret_unlocked: "🎮 SECRET LEVEL UNLOCKED! You're a Mario Legend! 🎮".into(),
                    konami_unlocked: "🍄 KONAMI CODE! 30 extra lives for the whole squad! 🍄".into(),
                    required_field: "⚠️ This power-up is needed!".into(),
                    invalid_email: "⚠️ Invalid castle address!".into(),
                    particle_glyph: "💰".into(),
                    star_glyph: "⭐".into(),
                    skip_link_label: "Skip to the first level".into(),
                    banner: ADVENTURE_BANNER.into(),
                },
                timings: Timings::default(),
                behaviour: Behaviour {
                    scroll_threshold_px: 100.0,
                    reveal_offset_px: 50.0,
                    logo_click_threshold: 5,
                    particle_count: 3,
                    particle_spread_px: 40.0,
                    jump_on_nav: true,
                    coin_on_submit: true,
                    reveal_on_scroll: false,
                    page_marker: ".html".into(),
                    jump_marker: Some("GOOOO".into()),
                },
                witty: table(&[
                    ("Learn More", "📜 The princess is in another castle, but the details are right here!"),
                    ("How It Works", "🔧 Like a warp pipe: hop in alone, pop out with friends!"),
                    ("Maybe Later", "🐢 No rush, player two. The castle will wait for you."),
                ]),
            },
            SiteVariant::Classic => Self {
                variant,
                copy: SiteCopy {
                    loading_label: "Sending...".into(),
                    submit_success: "Thank you! Your message has been sent.".into(),
                    secret_unlocked: "You found a secret! Thanks for exploring.".into(),
                    konami_unlocked: "Konami code unlocked. You clearly have excellent taste.".into(),
                    required_field: "This field is required".into(),
                    invalid_email: "Please enter a valid email address".into(),
                    particle_glyph: "✨".into(),
                    star_glyph: "⭐".into(),
                    skip_link_label: "Skip to main content".into(),
                    banner: CLASSIC_BANNER.into(),
                },
                timings: Timings::default(),
                behaviour: Behaviour {
                    scroll_threshold_px: 100.0,
                    reveal_offset_px: 50.0,
                    logo_click_threshold: 5,
                    particle_count: 3,
                    particle_spread_px: 40.0,
                    jump_on_nav: false,
                    coin_on_submit: false,
                    reveal_on_scroll: true,
                    page_marker: ".html".into(),
                    jump_marker: None,
                },
                witty: table(&[
                    ("Learn More", "Curiosity looks good on you."),
                    ("How It Works", "Short version: people meet, people help, friendships happen."),
                    ("Maybe Later", "We'll keep a seat warm for you."),
                ]),
            },
        }
    }

    /// Layer a JSON override document over a preset.
    ///
    /// The preset is chosen by the document's `variant` key, else `fallback`.
    /// Objects merge key by key; every other value replaces the preset's.
    pub fn from_json(raw: &str, fallback: SiteVariant) -> Result<Self> {
        let overlay: Value = serde_json::from_str(raw)?;
        let variant = match overlay.get("variant") {
            Some(v) => serde_json::from_value(v.clone())?,
            None => fallback,
        };

        let mut merged = serde_json::to_value(Self::for_variant(variant))?;
        merge(&mut merged, overlay);
        Ok(serde_json::from_value(merged)?)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::for_variant(SiteVariant::default())
    }
}

fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                merge(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_in_flavour_switches() {
        let adventure = SiteConfig::for_variant(SiteVariant::Adventure);
        let classic = SiteConfig::for_variant(SiteVariant::Classic);

        assert!(adventure.behaviour.jump_on_nav);
        assert!(adventure.behaviour.coin_on_submit);
        assert!(!adventure.behaviour.reveal_on_scroll);
        assert!(!classic.behaviour.jump_on_nav);
        assert!(classic.behaviour.reveal_on_scroll);
        assert_eq!(adventure.timings, classic.timings);
        assert_eq!(adventure.behaviour.logo_click_threshold, 5);
    }

    #[test]
    fn empty_overlay_yields_fallback_preset() {
        let cfg = SiteConfig::from_json("{}", SiteVariant::Classic).unwrap();
        assert_eq!(cfg, SiteConfig::for_variant(SiteVariant::Classic));
    }

    #[test]
    fn overlay_variant_key_beats_fallback() {
        let cfg = SiteConfig::from_json(r#"{"variant":"adventure"}"#, SiteVariant::Classic).unwrap();
        assert_eq!(cfg.variant, SiteVariant::Adventure);
        assert_eq!(cfg.copy.loading_label, "⏳ LOADING... ⏳");
    }

    #[test]
    fn nested_fields_merge_without_dropping_siblings() {
        let raw = r#"{
            "timings": {"submit_delay_ms": 500},
            "behaviour": {"jump_marker": null},
            "witty": {"Sign Me Up": "Welcome aboard!"}
        }"#;
        let cfg = SiteConfig::from_json(raw, SiteVariant::Adventure).unwrap();

        assert_eq!(cfg.timings.submit_delay_ms, 500);
        assert_eq!(cfg.timings.toast_auto_close_ms, 5_000);
        assert_eq!(cfg.behaviour.jump_marker, None);
        assert!(cfg.behaviour.jump_on_nav);
        assert_eq!(cfg.witty.get("Sign Me Up").map(String::as_str), Some("Welcome aboard!"));
        assert!(cfg.witty.contains_key("Learn More"));
    }

    #[test]
    fn malformed_documents_are_rejected() {
        assert!(SiteConfig::from_json("{not json", SiteVariant::Adventure).is_err());
        assert!(SiteConfig::from_json(r#"{"variant":"neon"}"#, SiteVariant::Adventure).is_err());
        assert!(SiteConfig::from_json(r#"{"timings":{"submit_delay_ms":"soon"}}"#, SiteVariant::Adventure).is_err());
        assert!(SiteConfig::from_json("[]", SiteVariant::Adventure).is_err());
    }

    #[test]
    fn variant_attribute_parsing() {
        assert_eq!(SiteVariant::from_attr(" Classic "), Some(SiteVariant::Classic));
        assert_eq!(SiteVariant::from_attr("adventure"), Some(SiteVariant::Adventure));
        assert_eq!(SiteVariant::from_attr("retro"), None);
    }
}
