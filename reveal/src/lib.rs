//! Scroll-reveal animation engine for static marketing pages.
//!
//! The crate is browser-free: a host (the `folio` wasm crate, or a test
//! harness) snapshots DOM elements, forwards intersection, timer, scroll,
//! resize, and pointer events, and applies the [`effect::Effect`]s that
//! [`engine::RevealCore`] hands back. Every timing decision lives here so it
//! can be exercised against a simulated clock.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::RevealCore`]: watch registry, triggers, timer dispatch |
//! | [`effect`] | Element/timer handles and the effect vocabulary |
//! | [`descriptor`] | Element snapshots, animation kinds, per-element parameters |
//! | [`counter`] | Numeric ramp state machine |
//! | [`progress`] | Progress bar width and transition helpers |
//! | [`stagger`] | Child cascade offsets and split-text glyphs |
//! | [`scroll`] | Throttle, frame gate, resize debounce, navbar fade |
//! | [`parallax`] | Per-element speed factors and offsets |
//! | [`morph`] | Hover-driven border-radius morphing |
//! | [`hover`] | Declarative hover presets |
//! | [`lazy`] | Deferred image and background loading |
//! | [`motion`] | Reduced-motion policy, visibility pausing, page intro |
//! | [`config`] | JSON-backed tunables |
//! | [`consts`] | Attribute names, selectors, default timings |

pub mod config;
pub mod consts;
pub mod counter;
pub mod descriptor;
pub mod effect;
pub mod engine;
pub mod hover;
pub mod lazy;
pub mod morph;
pub mod motion;
pub mod parallax;
pub mod progress;
pub mod scroll;
pub mod stagger;

pub use config::{ConfigError, RevealConfig};
pub use descriptor::{AnimationKind, Descriptor, ElementSnapshot};
pub use effect::{Effect, ElementId, Glyph, TimerId, WatchGroup};
pub use engine::{ObserveOptions, RevealCore};
