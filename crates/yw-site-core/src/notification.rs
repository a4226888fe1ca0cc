//! Toast notifications.
//!
//! Only one toast is ever on screen: presenting a new one clears every
//! existing toast first, whatever its timers are doing. Timers are never
//! cancelled; a late dismissal of a toast that is already gone does nothing.

use crate::config::Timings;
use crate::error::Result;
use crate::timer::Delay;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
        }
    }

    /// Modifier class, e.g. `notification--success`.
    pub fn class_name(self) -> String {
        format!("notification notification--{}", self.as_str())
    }

    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Info => "#0051BA",
            NotificationKind::Success => "#00A651",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    pub slide_in_ms: u32,
    pub auto_close_ms: u32,
    pub transition_ms: u32,
}

impl From<&Timings> for ToastTimings {
    fn from(t: &Timings) -> Self {
        Self {
            slide_in_ms: t.toast_slide_in_ms,
            auto_close_ms: t.toast_auto_close_ms,
            transition_ms: t.toast_transition_ms,
        }
    }
}

/// The page surface that hosts toasts.
pub trait ToastHost {
    type Toast: Clone;

    /// Remove every toast currently in the document.
    fn clear_all(&self);
    /// Build and insert an off-screen toast.
    fn mount(&self, message: &str, kind: NotificationKind) -> Result<Self::Toast>;
    fn slide_in(&self, toast: &Self::Toast);
    fn slide_out(&self, toast: &Self::Toast);
    fn is_attached(&self, toast: &Self::Toast) -> bool;
    fn detach(&self, toast: &Self::Toast);
}

/// Replace whatever is showing with a fresh toast.
pub fn present<H: ToastHost>(host: &H, message: &str, kind: NotificationKind) -> Result<H::Toast> {
    host.clear_all();
    host.mount(message, kind)
}

/// Slide a freshly mounted toast into view after the configured pause.
pub async fn slide_in_later<H: ToastHost, D: Delay>(host: &H, delay: &D, toast: &H::Toast, timings: ToastTimings) {
    delay.delay(timings.slide_in_ms).await;
    host.slide_in(toast);
}

/// Animate a toast out and detach it once the transition has run.
pub async fn dismiss<H: ToastHost, D: Delay>(host: &H, delay: &D, toast: &H::Toast, timings: ToastTimings) {
    host.slide_out(toast);
    delay.delay(timings.transition_ms).await;
    if host.is_attached(toast) {
        host.detach(toast);
    }
}

/// Auto-close, scheduled for every toast regardless of manual dismissal.
pub async fn auto_dismiss<H: ToastHost, D: Delay>(host: &H, delay: &D, toast: &H::Toast, timings: ToastTimings) {
    delay.delay(timings.auto_close_ms).await;
    dismiss(host, delay, toast, timings).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::testing::RecordingDelay;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeToast {
        id: usize,
        message: String,
        kind: NotificationKind,
        on_screen: bool,
    }

    #[derive(Default)]
    struct FakeBody {
        toasts: RefCell<Vec<FakeToast>>,
        next_id: RefCell<usize>,
        detach_calls: RefCell<usize>,
    }

    impl FakeBody {
        fn find(&self, id: usize) -> Option<FakeToast> {
            self.toasts.borrow().iter().find(|t| t.id == id).cloned()
        }
    }

    impl ToastHost for FakeBody {
        type Toast = usize;

        fn clear_all(&self) {
            self.toasts.borrow_mut().clear();
        }

        fn mount(&self, message: &str, kind: NotificationKind) -> Result<usize> {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            self.toasts.borrow_mut().push(FakeToast {
                id: *next,
                message: message.to_string(),
                kind,
                on_screen: false,
            });
            Ok(*next)
        }

        fn slide_in(&self, toast: &usize) {
            if let Some(t) = self.toasts.borrow_mut().iter_mut().find(|t| t.id == *toast) {
                t.on_screen = true;
            }
        }

        fn slide_out(&self, toast: &usize) {
            if let Some(t) = self.toasts.borrow_mut().iter_mut().find(|t| t.id == *toast) {
                t.on_screen = false;
            }
        }

        fn is_attached(&self, toast: &usize) -> bool {
            self.find(*toast).is_some()
        }

        fn detach(&self, toast: &usize) {
            *self.detach_calls.borrow_mut() += 1;
            self.toasts.borrow_mut().retain(|t| t.id != *toast);
        }
    }

    fn timings() -> ToastTimings {
        ToastTimings::from(&Timings::default())
    }

    #[test]
    fn second_toast_replaces_first() {
        let body = FakeBody::default();
        present(&body, "first", NotificationKind::Info).unwrap();
        let second = present(&body, "second", NotificationKind::Success).unwrap();

        let toasts = body.toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, second);
        assert_eq!(toasts[0].message, "second");
        assert_eq!(toasts[0].kind, NotificationKind::Success);
    }

    #[tokio::test]
    async fn slide_in_waits_then_shows() {
        let body = FakeBody::default();
        let delay = RecordingDelay::default();
        let toast = present(&body, "hi", NotificationKind::Info).unwrap();
        assert!(!body.find(toast).unwrap().on_screen);

        slide_in_later(&body, &delay, &toast, timings()).await;

        assert!(body.find(toast).unwrap().on_screen);
        assert_eq!(*delay.requested.borrow(), vec![100]);
    }

    #[tokio::test]
    async fn dismiss_then_auto_close_detaches_once() {
        let body = FakeBody::default();
        let delay = RecordingDelay::default();
        let toast = present(&body, "bye", NotificationKind::Info).unwrap();

        dismiss(&body, &delay, &toast, timings()).await;
        assert!(!body.is_attached(&toast));

        auto_dismiss(&body, &delay, &toast, timings()).await;
        assert_eq!(*body.detach_calls.borrow(), 1);
        assert_eq!(*delay.requested.borrow(), vec![300, 5_000, 300]);
    }

    #[tokio::test]
    async fn stale_auto_close_leaves_newer_toast_alone() {
        let body = FakeBody::default();
        let delay = RecordingDelay::default();
        let old = present(&body, "old", NotificationKind::Info).unwrap();
        let new = present(&body, "new", NotificationKind::Info).unwrap();

        auto_dismiss(&body, &delay, &old, timings()).await;

        assert_eq!(body.toasts.borrow().len(), 1);
        assert!(body.is_attached(&new));
        assert_eq!(*body.detach_calls.borrow(), 0);
    }

    #[test]
    fn kind_styling() {
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
        assert_eq!(NotificationKind::Success.class_name(), "notification notification--success");
        assert_eq!(NotificationKind::Info.background(), "#0051BA");
    }
}
