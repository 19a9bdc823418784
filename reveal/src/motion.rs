//! Motion policy, visibility pausing, and the page intro sequence.
//!
//! The policy maps device signals (core count, reduced-motion preference)
//! onto CSS custom property overrides. The intro is expressed as timed style
//! steps so the engine can schedule them like any other effect.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Devices with fewer logical cores get shortened transitions.
pub const LOW_END_CORE_COUNT: u32 = 4;

/// Stylesheet injected when the user prefers reduced motion.
pub const REDUCED_MOTION_CSS: &str = "*, *::before, *::after {\n    animation-duration: 0.01ms !important;\n    animation-iteration-count: 1 !important;\n    transition-duration: 0.01ms !important;\n}\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionPolicy {
    pub reduced_motion: bool,
    pub low_end: bool,
}

impl MotionPolicy {
    /// Build a policy from `navigator.hardwareConcurrency` (if reported) and
    /// the `prefers-reduced-motion` media query.
    #[must_use]
    pub fn detect(hardware_concurrency: Option<u32>, prefers_reduced_motion: bool) -> Self {
        Self {
            reduced_motion: prefers_reduced_motion,
            low_end: hardware_concurrency.is_some_and(|cores| cores > 0 && cores < LOW_END_CORE_COUNT),
        }
    }

    /// CSS custom properties to set on the document element, in order.
    #[must_use]
    pub fn css_overrides(&self) -> Vec<(&'static str, &'static str)> {
        let mut vars = Vec::new();
        if self.low_end {
            vars.push(("--transition-normal", "0.15s ease"));
            vars.push(("--transition-slow", "0.25s ease"));
        }
        if self.reduced_motion {
            vars.push(("--transition-fast", "0s"));
            vars.push(("--transition-normal", "0s"));
            vars.push(("--transition-slow", "0s"));
        }
        vars
    }

    /// Stylesheet to inject, if any.
    #[must_use]
    pub fn stylesheet(&self) -> Option<&'static str> {
        self.reduced_motion.then_some(REDUCED_MOTION_CSS)
    }
}

/// `animation-play-state` for a page visibility.
#[must_use]
pub fn play_state(hidden: bool) -> &'static str {
    if hidden { "paused" } else { "running" }
}

/// Which element an intro step targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroTarget {
    HeroContent,
    Navbar,
}

/// One batch of style writes at a point in the intro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroStep {
    pub target: IntroTarget,
    pub at_ms: u32,
    pub styles: &'static [(&'static str, &'static str)],
}

pub const INTRO_STEPS: [IntroStep; 4] = [
    IntroStep {
        target: IntroTarget::HeroContent,
        at_ms: 0,
        styles: &[("opacity", "0"), ("transform", "translateY(50px)")],
    },
    IntroStep {
        target: IntroTarget::HeroContent,
        at_ms: 500,
        styles: &[
            ("transition", "all 1s cubic-bezier(0.25, 0.46, 0.45, 0.94)"),
            ("opacity", "1"),
            ("transform", "translateY(0)"),
        ],
    },
    IntroStep { target: IntroTarget::Navbar, at_ms: 0, styles: &[("transform", "translateY(-100%)")] },
    IntroStep {
        target: IntroTarget::Navbar,
        at_ms: 200,
        styles: &[
            ("transition", "transform 0.6s cubic-bezier(0.25, 0.46, 0.45, 0.94)"),
            ("transform", "translateY(0)"),
        ],
    },
];
