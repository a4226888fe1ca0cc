//! Hidden interactions: logo clicks, the Konami code, witty button replies
//! and particle jitter.

use std::collections::BTreeMap;

/// `KeyboardEvent.code` values, in order.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoClicks {
    count: u32,
    threshold: u32,
}

impl LogoClicks {
    pub fn new(threshold: u32) -> Self {
        Self {
            count: 0,
            threshold: threshold.max(1),
        }
    }

    /// Count a click. Returns true on the click that reaches the threshold,
    /// after which the count starts over.
    pub fn click(&mut self) -> bool {
        self.count += 1;
        if self.count == self.threshold {
            self.count = 0;
            return true;
        }
        false
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KonamiDetector {
    cursor: usize,
}

impl KonamiDetector {
    /// Feed one key code. Any mismatch drops the cursor back to 0, including
    /// a key that would itself start the sequence.
    pub fn feed(&mut self, code: &str) -> bool {
        if KONAMI_SEQUENCE[self.cursor] != code {
            self.cursor = 0;
            return false;
        }
        self.cursor += 1;
        if self.cursor == KONAMI_SEQUENCE.len() {
            self.cursor = 0;
            return true;
        }
        false
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Exact lookup of a button's visible label (surrounding whitespace ignored).
pub fn witty_reply<'a>(table: &'a BTreeMap<String, String>, label: &str) -> Option<&'a str> {
    table.get(label.trim()).map(String::as_str)
}

/// Whether a button label asks for the jump tone.
pub fn has_jump_marker(label: &str, marker: Option<&str>) -> bool {
    matches!(marker, Some(m) if !m.is_empty() && label.contains(m))
}

/// What a `.btn` click produces. The star and coin burst are unconditional;
/// only the jump tone depends on the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEffects {
    pub jump_tone: bool,
    pub star: bool,
    pub coins: bool,
}

pub fn button_effects(label: &str, marker: Option<&str>) -> ButtonEffects {
    ButtonEffects {
        jump_tone: has_jump_marker(label, marker),
        star: true,
        coins: true,
    }
}

/// Horizontal offsets for a particle burst. `sample` yields values in [0, 1);
/// offsets fall in [-spread/2, spread/2).
pub fn particle_offsets(count: u32, spread_px: f64, mut sample: impl FnMut() -> f64) -> Vec<f64> {
    (0..count).map(|_| sample() * spread_px - spread_px / 2.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifth_click_unlocks_and_resets() {
        let mut logo = LogoClicks::new(5);
        let hits: Vec<bool> = (0..5).map(|_| logo.click()).collect();
        assert_eq!(hits, vec![false, false, false, false, true]);
        assert_eq!(logo.count(), 0);

        assert!(!logo.click());
        assert_eq!(logo.count(), 1);
    }

    #[test]
    fn ten_clicks_unlock_twice() {
        let mut logo = LogoClicks::new(5);
        assert_eq!((0..10).filter(|_| logo.click()).count(), 2);
    }

    #[test]
    fn full_sequence_fires_once() {
        let mut konami = KonamiDetector::default();
        let fired: Vec<bool> = KONAMI_SEQUENCE.iter().map(|k| konami.feed(k)).collect();
        assert_eq!(fired.iter().filter(|f| **f).count(), 1);
        assert!(*fired.last().unwrap());
        assert_eq!(konami.cursor(), 0);
    }

    #[test]
    fn wrong_final_key_requires_restart() {
        let mut konami = KonamiDetector::default();
        for key in &KONAMI_SEQUENCE[..9] {
            assert!(!konami.feed(key));
        }
        assert_eq!(konami.cursor(), 9);
        assert!(!konami.feed("KeyZ"));
        assert_eq!(konami.cursor(), 0);

        // The tail alone does not complete anything.
        assert!(!konami.feed("KeyA"));
        assert_eq!(konami.cursor(), 0);

        assert!(KONAMI_SEQUENCE.iter().map(|k| konami.feed(k)).any(|f| f));
    }

    #[test]
    fn repeated_first_key_resets() {
        let mut konami = KonamiDetector::default();
        konami.feed("ArrowUp");
        konami.feed("ArrowUp");
        assert!(!konami.feed("ArrowUp"));
        assert_eq!(konami.cursor(), 0);
    }

    #[test]
    fn witty_lookup_is_exact() {
        let table: BTreeMap<String, String> =
            [("Learn More".to_string(), "Curious!".to_string())].into_iter().collect();
        assert_eq!(witty_reply(&table, "  Learn More\n"), Some("Curious!"));
        assert_eq!(witty_reply(&table, "learn more"), None);
        assert_eq!(witty_reply(&table, "Learn More!"), None);
    }

    #[test]
    fn jump_marker_matching() {
        assert!(has_jump_marker("LET'S GOOOO!", Some("GOOOO")));
        assert!(!has_jump_marker("Go", Some("GOOOO")));
        assert!(!has_jump_marker("anything", Some("")));
        assert!(!has_jump_marker("GOOOO", None));
    }

    #[test]
    fn plain_button_gets_star_without_jump_tone() {
        let plain = button_effects("JOIN THE SQUAD", Some("GOOOO"));
        assert!(!plain.jump_tone);
        assert!(plain.star);
        assert!(plain.coins);

        let marked = button_effects("LET'S GOOOO!", Some("GOOOO"));
        assert!(marked.jump_tone && marked.star && marked.coins);

        let unmarked_variant = button_effects("Get started", None);
        assert!(!unmarked_variant.jump_tone);
        assert!(unmarked_variant.star);
    }

    #[test]
    fn particle_jitter_stays_in_band() {
        let samples = [0.0, 0.5, 0.999];
        let mut it = samples.iter().copied();
        let offsets = particle_offsets(3, 40.0, || it.next().unwrap_or(0.0));
        assert_eq!(offsets.len(), 3);
        assert_eq!(offsets[0], -20.0);
        assert_eq!(offsets[1], 0.0);
        assert!(offsets[2] < 20.0);
    }
}
