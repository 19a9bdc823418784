//! Reveal engine: watch registration, one-shot triggers, and timer dispatch.
//!
//! [`RevealCore`] owns every piece of animation state and never touches the
//! browser. The host feeds it element snapshots, intersection notifications,
//! timer callbacks, scroll positions, and pointer events; every call returns
//! the [`Effect`]s to apply. That keeps the whole dispatcher testable with a
//! simulated clock.
//!
//! LIFECYCLE
//! =========
//! register → `Observe` → intersect → `Unobserve` + trigger timer (delay) →
//! animated class + kind handler → optional follow-up timers. A (element,
//! group) pair that has fired is remembered and never observed again.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::RevealConfig;
use crate::consts::{
    ATTR_DELAY, ATTR_KIND, ATTR_SPEED, ATTR_TARGET, CLASS_ANIMATED, CLASS_AOS_ELEMENT, CLASS_COUNTER, CLASS_HERO,
    CLASS_PARALLAX, CLASS_REVEALED, CLASS_SCROLL_REVEAL,
};
use crate::counter::CounterAnimation;
use crate::descriptor::{AnimationKind, Descriptor, ElementSnapshot};
use crate::effect::{Effect, ElementId, TimerId, WatchGroup};
use crate::lazy;
use crate::morph::{Morpher, random_border_radius};
use crate::motion::{INTRO_STEPS, IntroTarget};
use crate::parallax::{ParallaxLayer, parse_speed, sample_speed};
use crate::progress::transition_directive;
use crate::scroll::{Debounce, ScrollCoordinator, indicator_opacity, navbar_background};
use crate::stagger::{VISIBLE_STYLES, child_offset_ms, split_glyphs};

/// Intersection options for one watch group.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub root_margin: String,
}

/// Work parked behind an engine timer.
#[derive(Debug, Clone)]
enum Pending {
    /// Delayed trigger for an animate-group element.
    Trigger { id: ElementId, descriptor: Descriptor },
    /// Repeating counter step.
    CounterTick { id: ElementId, counter: CounterAnimation, elapsed_ms: f64 },
    /// One-shot width write after the progress pre-delay.
    ProgressWidth { id: ElementId, width: String },
    StaggerChild { id: ElementId, index: usize },
    ApplyStyles { id: ElementId, styles: &'static [(&'static str, &'static str)] },
    ResizeSettled,
    MorphTick { id: ElementId },
}

/// Kind handler: runs after the animated class is applied.
type Handler = fn(&mut RevealCore, ElementId, &Descriptor, &mut Vec<Effect>);

/// Kind → handler lookup. Adding a kind means adding one arm here.
fn handler_for(kind: &AnimationKind) -> Handler {
    match kind {
        AnimationKind::Counter => RevealCore::start_counter,
        AnimationKind::ProgressBar => RevealCore::start_progress,
        AnimationKind::StaggerContainer => RevealCore::start_stagger,
        AnimationKind::FadeUp
        | AnimationKind::FadeRight
        | AnimationKind::FadeLeft
        | AnimationKind::Zoom
        | AnimationKind::Custom(_) => RevealCore::finish_declarative,
    }
}

/// Browser-free dispatcher state.
pub struct RevealCore {
    config: RevealConfig,
    watches: HashSet<(ElementId, WatchGroup)>,
    fired: HashSet<(ElementId, WatchGroup)>,
    glyph_counts: HashMap<ElementId, usize>,
    pending: HashMap<TimerId, Pending>,
    next_timer: u64,
    parallax: ParallaxLayer,
    scroll: ScrollCoordinator,
    resize: Debounce,
    morph: Morpher,
    navbar: Option<ElementId>,
    indicator: Option<ElementId>,
    rng: SmallRng,
}

impl Default for RevealCore {
    fn default() -> Self {
        Self::new(RevealConfig::default(), 0)
    }
}

impl RevealCore {
    /// Create an engine. `seed` drives parallax speed sampling and morph shapes.
    #[must_use]
    pub fn new(config: RevealConfig, seed: u64) -> Self {
        Self {
            scroll: ScrollCoordinator::new(config.scroll_throttle_ms),
            resize: Debounce::new(config.resize_debounce_ms),
            morph: Morpher::new(config.morph_interval_ms),
            config,
            watches: HashSet::new(),
            fired: HashSet::new(),
            glyph_counts: HashMap::new(),
            pending: HashMap::new(),
            next_timer: 0,
            parallax: ParallaxLayer::new(),
            navbar: None,
            indicator: None,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Observer options the host should use for `group`.
    #[must_use]
    pub fn observe_options(&self, group: WatchGroup) -> ObserveOptions {
        match group {
            WatchGroup::Animate => {
                ObserveOptions { threshold: self.config.threshold, root_margin: self.config.root_margin.clone() }
            }
            WatchGroup::Section => ObserveOptions {
                threshold: self.config.section_threshold,
                root_margin: self.config.section_root_margin.clone(),
            },
            WatchGroup::Text | WatchGroup::Lazy => ObserveOptions { threshold: 0.0, root_margin: "0px".to_owned() },
        }
    }

    // --- Preparation passes ---

    /// Turn a stat heading like `"150+"` into a counter starting at zero.
    #[must_use]
    pub fn prepare_stat_counter(id: ElementId, snapshot: &ElementSnapshot) -> Vec<Effect> {
        let digits: String = snapshot.text.chars().filter(char::is_ascii_digit).collect();
        let Ok(number) = digits.parse::<u64>() else {
            return Vec::new();
        };
        if number == 0 {
            return Vec::new();
        }
        vec![
            Effect::add_class(id, CLASS_COUNTER),
            Effect::SetAttribute { id, name: ATTR_TARGET, value: number.to_string() },
            Effect::SetText { id, text: "0".to_owned() },
        ]
    }

    /// Collapse a progress bar and give it a delayed fade-right marker.
    #[must_use]
    pub fn prepare_progress_bar(id: ElementId) -> Vec<Effect> {
        vec![
            Effect::style(id, "width", "0%"),
            Effect::SetAttribute { id, name: ATTR_KIND, value: "fade-right".to_owned() },
            Effect::SetAttribute { id, name: ATTR_DELAY, value: "200".to_owned() },
        ]
    }

    // --- Registration ---

    /// Start watching an animation-marked element. Unmarked elements are ignored.
    pub fn register(&mut self, id: ElementId, snapshot: &ElementSnapshot) -> Vec<Effect> {
        let key = (id, WatchGroup::Animate);
        if !snapshot.is_animation_target() || self.watches.contains(&key) || self.fired.contains(&key) {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if let Some(marker) = snapshot.attr(ATTR_KIND) {
            effects.push(Effect::add_class(id, CLASS_AOS_ELEMENT));
            let marker = marker.trim();
            if !marker.is_empty() {
                effects.push(Effect::add_class(id, format!("aos-{marker}")));
            }
        }
        effects.extend(self.watch(id, WatchGroup::Animate));
        effects
    }

    /// Watch a page section for a whole-section reveal. The hero is skipped.
    pub fn register_section(&mut self, id: ElementId, snapshot: &ElementSnapshot) -> Vec<Effect> {
        if snapshot.tag != "SECTION" || snapshot.has_class(CLASS_HERO) {
            return Vec::new();
        }
        let mut effects = vec![Effect::add_class(id, CLASS_SCROLL_REVEAL)];
        effects.extend(self.watch(id, WatchGroup::Section));
        effects
    }

    /// Split an element's text into glyph spans and watch it.
    pub fn register_text_reveal(&mut self, id: ElementId, snapshot: &ElementSnapshot) -> Vec<Effect> {
        if self.glyph_counts.contains_key(&id) {
            return Vec::new();
        }
        let glyphs = split_glyphs(&snapshot.text);
        self.glyph_counts.insert(id, glyphs.len());
        let mut effects = vec![Effect::SplitText { id, glyphs }];
        effects.extend(self.watch(id, WatchGroup::Text));
        effects
    }

    /// Watch an element carrying deferred media.
    pub fn register_lazy(&mut self, id: ElementId) -> Vec<Effect> {
        self.watch(id, WatchGroup::Lazy)
    }

    /// Add a parallax element. A missing `data-speed` is sampled and written back.
    pub fn register_parallax(&mut self, id: ElementId, snapshot: &ElementSnapshot) -> Vec<Effect> {
        if let Some(raw) = snapshot.attr(ATTR_SPEED) {
            self.parallax.insert(id, parse_speed(raw));
            return Vec::new();
        }
        let speed = sample_speed(&mut self.rng);
        self.parallax.insert(id, speed);
        vec![
            Effect::add_class(id, CLASS_PARALLAX),
            Effect::SetAttribute { id, name: ATTR_SPEED, value: format!("{speed:.3}") },
        ]
    }

    pub fn register_navbar(&mut self, id: ElementId) {
        self.navbar = Some(id);
    }

    pub fn register_scroll_indicator(&mut self, id: ElementId) {
        self.indicator = Some(id);
    }

    /// Schedule the page intro for whichever targets exist.
    pub fn intro(&mut self, hero: Option<ElementId>, navbar: Option<ElementId>) -> Vec<Effect> {
        let mut effects = Vec::new();
        for step in INTRO_STEPS {
            let target = match step.target {
                IntroTarget::HeroContent => hero,
                IntroTarget::Navbar => navbar,
            };
            let Some(id) = target else {
                continue;
            };
            if step.at_ms == 0 {
                effects.extend(step.styles.iter().map(|&(property, value)| Effect::style(id, property, value)));
            } else {
                let timer = self.schedule(Pending::ApplyStyles { id, styles: step.styles });
                effects.push(Effect::StartTimeout { timer, delay_ms: step.at_ms });
            }
        }
        effects
    }

    fn watch(&mut self, id: ElementId, group: WatchGroup) -> Vec<Effect> {
        let key = (id, group);
        if self.fired.contains(&key) || !self.watches.insert(key) {
            return Vec::new();
        }
        log::debug!("reveal: watching {id:?} in {group:?}");
        vec![Effect::Observe { id, group }]
    }

    // --- Intersection ---

    /// An observed element became visible. Fires at most once per (element, group).
    pub fn on_intersect(&mut self, id: ElementId, group: WatchGroup, snapshot: &ElementSnapshot) -> Vec<Effect> {
        let key = (id, group);
        if !self.watches.contains(&key) {
            if !self.fired.contains(&key) {
                log::warn!("reveal: intersection for unwatched {id:?} in {group:?}");
            }
            return Vec::new();
        }

        let mut effects = match group {
            WatchGroup::Animate => {
                let descriptor = Descriptor::read(snapshot);
                let delay_ms = descriptor.delay_ms;
                log::debug!("reveal: trigger {id:?} as {} after {delay_ms}ms", descriptor.kind.as_str());
                let timer = self.schedule(Pending::Trigger { id, descriptor });
                vec![Effect::StartTimeout { timer, delay_ms }]
            }
            WatchGroup::Section => vec![Effect::add_class(id, CLASS_REVEALED)],
            WatchGroup::Text => {
                let count = self.glyph_counts.get(&id).copied().unwrap_or(0);
                (0..count)
                    .flat_map(|index| {
                        VISIBLE_STYLES.into_iter().map(move |(property, value)| Effect::SetChildStyle {
                            id,
                            index,
                            property,
                            value: value.to_owned(),
                        })
                    })
                    .collect()
            }
            WatchGroup::Lazy => {
                let loaded = lazy::load_effects(id, snapshot);
                if loaded.is_empty() {
                    // Nothing to load yet; keep watching.
                    return Vec::new();
                }
                loaded
            }
        };

        self.watches.remove(&key);
        self.fired.insert(key);
        effects.push(Effect::Unobserve { id, group });
        effects
    }

    // --- Timers ---

    /// A timer the engine started has elapsed. Unknown or cancelled timers are ignored.
    pub fn on_timer(&mut self, timer: TimerId) -> Vec<Effect> {
        let Some(pending) = self.pending.remove(&timer) else {
            return Vec::new();
        };
        let mut effects = Vec::new();
        match pending {
            Pending::Trigger { id, descriptor } => {
                effects.push(Effect::add_class(id, CLASS_ANIMATED));
                let handler = handler_for(&descriptor.kind);
                handler(self, id, &descriptor, &mut effects);
            }
            Pending::CounterTick { id, mut counter, elapsed_ms } => {
                let elapsed_ms = elapsed_ms + f64::from(counter.step_ms());
                let frame = counter.step(elapsed_ms);
                effects.push(Effect::SetText { id, text: frame.display.to_string() });
                if frame.done {
                    effects.push(Effect::CancelTimer { timer });
                } else {
                    self.pending.insert(timer, Pending::CounterTick { id, counter, elapsed_ms });
                }
            }
            Pending::ProgressWidth { id, width } => {
                effects.push(Effect::style(id, "width", width));
            }
            Pending::StaggerChild { id, index } => {
                effects.extend(VISIBLE_STYLES.into_iter().map(|(property, value)| Effect::SetChildStyle {
                    id,
                    index,
                    property,
                    value: value.to_owned(),
                }));
            }
            Pending::ApplyStyles { id, styles } => {
                effects.extend(styles.iter().map(|&(property, value)| Effect::style(id, property, value)));
            }
            Pending::ResizeSettled => {
                if self.resize.settle(timer) {
                    effects.extend(self.parallax.reset());
                    if self.scroll.request_frame() {
                        effects.push(Effect::RequestFrame);
                    }
                }
            }
            Pending::MorphTick { id } => {
                if self.morph.owner(timer) == Some(id) {
                    effects.push(Effect::style(id, "border-radius", random_border_radius(&mut self.rng)));
                    self.pending.insert(timer, Pending::MorphTick { id });
                } else {
                    effects.push(Effect::CancelTimer { timer });
                }
            }
        }
        effects
    }

    fn schedule(&mut self, pending: Pending) -> TimerId {
        self.next_timer += 1;
        let timer = TimerId(self.next_timer);
        self.pending.insert(timer, pending);
        timer
    }

    // --- Kind handlers ---

    fn start_counter(&mut self, id: ElementId, descriptor: &Descriptor, effects: &mut Vec<Effect>) {
        let duration_ms = descriptor.duration_ms.unwrap_or(self.config.counter_duration_ms);
        let counter = CounterAnimation::new(
            descriptor.start_value,
            descriptor.target_value,
            duration_ms,
            self.config.counter_step_ms,
        );
        let interval_ms = counter.step_ms();
        let timer = self.schedule(Pending::CounterTick { id, counter, elapsed_ms: 0.0 });
        effects.push(Effect::StartInterval { timer, interval_ms });
    }

    fn start_progress(&mut self, id: ElementId, descriptor: &Descriptor, effects: &mut Vec<Effect>) {
        let duration_ms = descriptor.duration_ms.unwrap_or(self.config.progress_duration_ms);
        effects.push(Effect::style(id, "transition", transition_directive(duration_ms, &self.config.easing)));
        let timer = self.schedule(Pending::ProgressWidth { id, width: descriptor.target_width.clone() });
        effects.push(Effect::StartTimeout { timer, delay_ms: self.config.progress_pre_delay_ms });
    }

    fn start_stagger(&mut self, id: ElementId, descriptor: &Descriptor, effects: &mut Vec<Effect>) {
        for index in 0..descriptor.child_count {
            let delay_ms = child_offset_ms(index, self.config.stagger_delay_ms);
            let timer = self.schedule(Pending::StaggerChild { id, index });
            effects.push(Effect::StartTimeout { timer, delay_ms });
        }
    }

    /// Fade, zoom, and custom kinds are pure stylesheet transitions.
    #[allow(clippy::unused_self)]
    fn finish_declarative(&mut self, _id: ElementId, _descriptor: &Descriptor, _effects: &mut Vec<Effect>) {}

    // --- Scroll / resize ---

    /// Record a scroll event at host time `now_ms`.
    pub fn on_scroll(&mut self, now_ms: f64, position: f64) -> Vec<Effect> {
        if self.scroll.on_scroll(now_ms, position) {
            vec![Effect::RequestFrame]
        } else {
            Vec::new()
        }
    }

    /// Run the requested frame: parallax offsets, navbar background, indicator opacity.
    pub fn flush(&mut self, dark: bool) -> Vec<Effect> {
        let position = self.scroll.flush();
        let mut effects = self.parallax.offsets(position);
        if let Some(id) = self.navbar {
            effects.push(Effect::style(id, "background-color", navbar_background(position, dark)));
        }
        if let Some(id) = self.indicator {
            let opacity = (indicator_opacity(position) * 1000.0).round() / 1000.0;
            effects.push(Effect::style(id, "opacity", opacity.to_string()));
        }
        effects
    }

    /// Record a resize event; the recompute runs once the burst settles.
    pub fn on_resize(&mut self, position: f64) -> Vec<Effect> {
        self.scroll.set_position(position);
        let timer = self.schedule(Pending::ResizeSettled);
        let effects = self.resize.rearm(timer);
        for effect in &effects {
            if let Effect::CancelTimer { timer } = effect {
                self.pending.remove(timer);
            }
        }
        effects
    }

    // --- Hover morph ---

    pub fn on_pointer_enter(&mut self, id: ElementId) -> Vec<Effect> {
        if self.morph.is_active(id) {
            return Vec::new();
        }
        let timer = self.schedule(Pending::MorphTick { id });
        self.morph.enter(id, timer)
    }

    pub fn on_pointer_leave(&mut self, id: ElementId) -> Vec<Effect> {
        let effects = self.morph.leave(id);
        for effect in &effects {
            if let Effect::CancelTimer { timer } = effect {
                self.pending.remove(timer);
            }
        }
        effects
    }

    // --- Queries ---

    #[must_use]
    pub fn is_watched(&self, id: ElementId, group: WatchGroup) -> bool {
        self.watches.contains(&(id, group))
    }

    #[must_use]
    pub fn has_fired(&self, id: ElementId, group: WatchGroup) -> bool {
        self.fired.contains(&(id, group))
    }

    /// Timers the engine still expects callbacks for.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn parallax(&self) -> &ParallaxLayer {
        &self.parallax
    }
}
