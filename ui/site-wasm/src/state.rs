//! Site handle.
//!
//! Owns the resolved elements, the configuration and the transient
//! `SiteState`. Cloned into every listener closure; clones share state.
//! WASM is single-threaded, so `Rc<RefCell<_>>` is enough. Never hold a
//! borrow across an `.await` or a call into another component.

use crate::dom::Elements;
use std::cell::RefCell;
use std::rc::Rc;
use yw_site_core::{SiteConfig, SiteState};

#[derive(Clone)]
pub struct Site {
    pub els: Elements,
    pub config: Rc<SiteConfig>,
    state: Rc<RefCell<SiteState>>,
}

impl Site {
    pub fn new(els: Elements, config: SiteConfig) -> Self {
        let state = SiteState::new(&config);
        Self {
            els,
            config: Rc::new(config),
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Run a closure with shared read access to the state.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SiteState) -> R,
    {
        f(&self.state.borrow())
    }

    /// Run a closure with mutable access to the state.
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SiteState) -> R,
    {
        f(&mut self.state.borrow_mut())
    }
}
