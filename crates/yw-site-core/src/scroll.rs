//! Scroll-driven header style and reveal checks.

/// True once the page has scrolled strictly past `threshold_px`.
pub fn is_scrolled(offset_y: f64, threshold_px: f64) -> bool {
    offset_y > threshold_px
}

/// A `.fade-in` element becomes visible once its top edge rises above the
/// bottom of the viewport minus `offset_px`.
pub fn should_reveal(top: f64, viewport_height: f64, offset_px: f64) -> bool {
    top < viewport_height - offset_px
}

/// Coalesces bursts of scroll events into one update per animation frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Returns true when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback before running the update.
    pub fn complete(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0, 100.0));
        assert!(!is_scrolled(100.0, 100.0));
        assert!(is_scrolled(100.5, 100.0));
    }

    #[test]
    fn reveal_uses_bottom_offset() {
        assert!(should_reveal(600.0, 800.0, 50.0));
        assert!(!should_reveal(760.0, 800.0, 50.0));
        assert!(should_reveal(-300.0, 800.0, 50.0));
    }

    #[test]
    fn one_frame_per_burst() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());
        throttle.complete();
        assert!(throttle.request());
    }
}
