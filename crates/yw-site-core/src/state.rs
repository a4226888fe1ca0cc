//! Transient per-page state. One value per initialised site; nothing is
//! persisted.

use crate::config::SiteConfig;
use crate::counter::CounterTrigger;
use crate::easter_egg::{KonamiDetector, LogoClicks};
use crate::navigation::MenuState;
use crate::scroll::FrameThrottle;
use crate::submission::SubmissionGate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteState {
    pub menu: MenuState,
    pub logo: LogoClicks,
    pub konami: KonamiDetector,
    pub counters: CounterTrigger,
    pub scroll: FrameThrottle,
    pub submission: SubmissionGate,
}

impl SiteState {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            menu: MenuState::default(),
            logo: LogoClicks::new(config.behaviour.logo_click_threshold),
            konami: KonamiDetector::default(),
            counters: CounterTrigger::default(),
            scroll: FrameThrottle::default(),
            submission: SubmissionGate::default(),
        }
    }
}
