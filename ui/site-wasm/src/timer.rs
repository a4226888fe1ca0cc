//! Browser timers.

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use yw_site_core::timer::Delay;

/// `setTimeout`-backed delay for the core's async flows.
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    fn delay(&self, ms: u32) -> impl Future<Output = ()> {
        TimeoutFuture::new(ms)
    }
}

/// Fire-and-forget callback after `ms`. Not cancellable.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(ms, f).forget();
}
