//! Stat counters: one eased count-up per page load.

use tracing::warn;

/// Exponential ease-out, `1 - 2^(-10t)`, pinned to exactly 1 at `t >= 1`.
pub fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t.max(0.0))
    }
}

/// Read a `data-count` annotation. Missing or unparseable values count to 0.
pub fn parse_target(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 0;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        warn!("non-numeric counter target '{}', defaulting to 0", raw);
        0
    })
}

/// Display text; targets of 100 or more carry a `+`.
pub fn format_count(value: u64, target: u64) -> String {
    if target >= 100 {
        format!("{value}+")
    } else {
        value.to_string()
    }
}

/// Vertical overlap test against the viewport.
pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountFrame {
    pub text: String,
    pub done: bool,
}

/// A single count-up from 0 to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: u64,
    duration_ms: f64,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: u32) -> Self {
        Self {
            target,
            duration_ms: f64::from(duration_ms),
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Value shown `elapsed_ms` after the animation started.
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        };
        if progress >= 1.0 {
            return self.target;
        }
        (self.target as f64 * ease_out_expo(progress)).floor() as u64
    }

    pub fn frame(&self, elapsed_ms: f64) -> CountFrame {
        CountFrame {
            text: format_count(self.value_at(elapsed_ms), self.target),
            done: elapsed_ms >= self.duration_ms,
        }
    }

    /// The settled frame, for when the animation cannot continue.
    pub fn final_frame(&self) -> CountFrame {
        CountFrame {
            text: format_count(self.target, self.target),
            done: true,
        }
    }
}

/// Raised once the counter set has started animating; never lowered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CounterTrigger {
    fired: bool,
}

impl CounterTrigger {
    /// Returns true exactly once.
    pub fn try_fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
