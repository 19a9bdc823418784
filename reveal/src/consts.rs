//! Shared constants for the reveal crate: marker names, class names, and default timings.

// ── Marker attributes ───────────────────────────────────────────

/// Animation kind marker (`fade-up`, `fade-right`, ...).
pub const ATTR_KIND: &str = "data-aos";

/// Trigger delay in milliseconds.
pub const ATTR_DELAY: &str = "data-aos-delay";

/// Per-element duration override for counters and progress bars.
pub const ATTR_DURATION: &str = "data-duration";

/// Counter target value.
pub const ATTR_TARGET: &str = "data-target";

/// Progress bar target width, e.g. `80%`.
pub const ATTR_WIDTH: &str = "data-width";

/// Parallax speed factor.
pub const ATTR_SPEED: &str = "data-speed";

/// Lazy image source.
pub const ATTR_LAZY_SRC: &str = "data-src";

/// Lazy background image.
pub const ATTR_LAZY_BG: &str = "data-bg";

/// Every attribute a host must copy into an [`crate::descriptor::ElementSnapshot`].
pub const MARKER_ATTRIBUTES: [&str; 8] = [
    ATTR_KIND,
    ATTR_DELAY,
    ATTR_DURATION,
    ATTR_TARGET,
    ATTR_WIDTH,
    ATTR_SPEED,
    ATTR_LAZY_SRC,
    ATTR_LAZY_BG,
];

// ── Marker classes ──────────────────────────────────────────────

pub const CLASS_COUNTER: &str = "counter";
pub const CLASS_PROGRESS: &str = "skill-progress";
pub const CLASS_STAGGER: &str = "stagger-children";
pub const CLASS_PARALLAX: &str = "parallax-element";
pub const CLASS_HERO: &str = "hero";

// ── Output classes ──────────────────────────────────────────────

/// Added to every registered `data-aos` element.
pub const CLASS_AOS_ELEMENT: &str = "aos-element";

/// Added when the trigger fires.
pub const CLASS_ANIMATED: &str = "aos-animate";

pub const CLASS_SCROLL_REVEAL: &str = "scroll-reveal";
pub const CLASS_REVEALED: &str = "revealed";
pub const CLASS_LOADED: &str = "loaded";

// ── Selectors ───────────────────────────────────────────────────

pub const SELECTOR_ANIMATE: &str = "[data-aos], .stagger-children, .counter, .skill-progress";
pub const SELECTOR_SECTION: &str = "section";
pub const SELECTOR_TEXT_REVEAL: &str = ".text-reveal";
pub const SELECTOR_LAZY: &str = "[data-src], [data-bg]";
pub const SELECTOR_STAT: &str = ".stat h3";
pub const SELECTOR_PROGRESS: &str = ".skill-progress";
pub const SELECTOR_PARALLAX: &str = ".parallax-element";
pub const SELECTOR_FLOATING_SHAPE: &str = ".floating-shapes .shape";
pub const SELECTOR_MORPH: &str = ".morphing-shape";
pub const SELECTOR_NAVBAR: &str = "#navbar";
pub const SELECTOR_SCROLL_INDICATOR: &str = ".scroll-indicator";

// ── Timing defaults (milliseconds) ──────────────────────────────

pub const DEFAULT_COUNTER_DURATION_MS: u32 = 2000;

/// One counter step; roughly 60 steps per second.
pub const DEFAULT_COUNTER_STEP_MS: u32 = 16;

pub const DEFAULT_PROGRESS_DURATION_MS: u32 = 1500;
pub const DEFAULT_PROGRESS_PRE_DELAY_MS: u32 = 100;
pub const DEFAULT_STAGGER_DELAY_MS: u32 = 100;
pub const DEFAULT_SCROLL_THROTTLE_MS: u32 = 16;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;
pub const DEFAULT_MORPH_INTERVAL_MS: u32 = 500;

// ── Observation defaults ────────────────────────────────────────

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const DEFAULT_SECTION_THRESHOLD: f64 = 0.15;
pub const DEFAULT_SECTION_ROOT_MARGIN: &str = "0px 0px -100px 0px";

pub const DEFAULT_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

// ── Parallax ────────────────────────────────────────────────────

/// Sampled speed range for shapes without an explicit `data-speed`.
pub const PARALLAX_SPEED_MIN: f64 = 0.2;
pub const PARALLAX_SPEED_MAX: f64 = 0.7;

/// Speed used when `data-speed` is present but unparsable.
pub const PARALLAX_FALLBACK_SPEED: f64 = 0.5;

// ── Scroll chrome ───────────────────────────────────────────────

/// Scroll distance over which the navbar reaches full opacity.
pub const NAVBAR_FADE_DISTANCE_PX: f64 = 100.0;

/// Maximum navbar background alpha.
pub const NAVBAR_MAX_ALPHA: f64 = 0.9;

/// Scroll distance over which the scroll indicator fades out.
pub const INDICATOR_FADE_DISTANCE_PX: f64 = 300.0;
