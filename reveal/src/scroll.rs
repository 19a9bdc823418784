//! Scroll-driven update coordination: throttle, frame gating, and resize debounce.
//!
//! DESIGN
//! ======
//! Scroll events pass through a time-based [`Throttle`] and then a
//! "frame requested" flag owned by [`ScrollCoordinator`], so a burst of events
//! produces at most one recompute per rendered frame. Resize events go through
//! a [`Debounce`] that re-arms a single engine timer on every event.
//!
//! All times are host milliseconds (`performance.now()` in the browser).

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{INDICATOR_FADE_DISTANCE_PX, NAVBAR_FADE_DISTANCE_PX, NAVBAR_MAX_ALPHA};
use crate::effect::{Effect, TimerId};

/// Admit at most one call per window; the first call in a window runs immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throttle {
    window_ms: f64,
    reopen_at: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(window_ms: u32) -> Self {
        Self { window_ms: f64::from(window_ms), reopen_at: None }
    }

    /// Returns true when the call at `now_ms` should run.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        if let Some(reopen_at) = self.reopen_at
            && now_ms < reopen_at
        {
            return false;
        }
        self.reopen_at = Some(now_ms + self.window_ms);
        true
    }
}

/// Trailing-edge debounce over a single re-armed timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debounce {
    wait_ms: u32,
    pending: Option<TimerId>,
}

impl Debounce {
    #[must_use]
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms, pending: None }
    }

    /// Replace any pending timer with `next`, measured from now.
    pub fn rearm(&mut self, next: TimerId) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(2);
        if let Some(previous) = self.pending.replace(next) {
            effects.push(Effect::CancelTimer { timer: previous });
        }
        effects.push(Effect::StartTimeout { timer: next, delay_ms: self.wait_ms });
        effects
    }

    /// True if `timer` is the live debounce timer; clears it.
    pub fn settle(&mut self, timer: TimerId) -> bool {
        if self.pending == Some(timer) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

/// Owns the cached scroll position and the per-frame gate.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollCoordinator {
    last_scroll_position: f64,
    frame_requested: bool,
    throttle: Throttle,
}

impl ScrollCoordinator {
    #[must_use]
    pub fn new(throttle_ms: u32) -> Self {
        Self { last_scroll_position: 0.0, frame_requested: false, throttle: Throttle::new(throttle_ms) }
    }

    /// Record a scroll event. Returns true when the host should request a frame.
    ///
    /// The position is kept even when the throttle drops the event, so the
    /// pending frame draws where the burst ended.
    pub fn on_scroll(&mut self, now_ms: f64, position: f64) -> bool {
        self.last_scroll_position = position;
        if !self.throttle.admit(now_ms) {
            return false;
        }
        self.request_frame()
    }

    /// Set the frame gate. Returns false if a frame is already pending.
    pub fn request_frame(&mut self) -> bool {
        if self.frame_requested {
            return false;
        }
        self.frame_requested = true;
        true
    }

    /// Record a position outside the throttle (e.g. after a resize).
    pub fn set_position(&mut self, position: f64) {
        self.last_scroll_position = position;
    }

    /// Consume the pending frame and return the position to render.
    pub fn flush(&mut self) -> f64 {
        self.frame_requested = false;
        self.last_scroll_position
    }

    #[must_use]
    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.last_scroll_position
    }
}

/// Navbar background for a scroll position.
#[must_use]
pub fn navbar_background(position: f64, dark: bool) -> String {
    let alpha = (position.max(0.0) / NAVBAR_FADE_DISTANCE_PX).min(1.0) * NAVBAR_MAX_ALPHA;
    let alpha = (alpha * 1000.0).round() / 1000.0;
    if dark {
        format!("rgba(15, 23, 42, {alpha})")
    } else {
        format!("rgba(255, 255, 255, {alpha})")
    }
}

/// Scroll indicator opacity for a scroll position.
#[must_use]
pub fn indicator_opacity(position: f64) -> f64 {
    (1.0 - position / INDICATOR_FADE_DISTANCE_PX).clamp(0.0, 1.0)
}
