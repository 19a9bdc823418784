use std::collections::HashMap;

use super::*;

// =============================================================================
// Simulated host
// =============================================================================

#[derive(Debug, Default)]
struct FakeElement {
    snapshot: ElementSnapshot,
    styles: HashMap<&'static str, String>,
    child_styles: HashMap<(usize, &'static str), String>,
    glyphs: usize,
    observed: HashSet<WatchGroup>,
}

struct Timer {
    id: TimerId,
    due: f64,
    seq: u64,
    interval: Option<f64>,
}

/// Applies engine effects to fake elements against a virtual clock.
struct Sim {
    core: RevealCore,
    now: f64,
    seq: u64,
    timers: Vec<Timer>,
    elements: HashMap<ElementId, FakeElement>,
    log: Vec<(f64, Effect)>,
    frames: usize,
}

impl Sim {
    fn new() -> Self {
        Self::with_config(RevealConfig::default())
    }

    fn with_config(config: RevealConfig) -> Self {
        Self {
            core: RevealCore::new(config, 7),
            now: 0.0,
            seq: 0,
            timers: Vec::new(),
            elements: HashMap::new(),
            log: Vec::new(),
            frames: 0,
        }
    }

    fn insert(&mut self, id: u32, snapshot: ElementSnapshot) -> ElementId {
        let id = ElementId(id);
        self.elements.insert(id, FakeElement { snapshot, ..FakeElement::default() });
        id
    }

    fn add(&mut self, id: u32, snapshot: ElementSnapshot) -> ElementId {
        let id = self.insert(id, snapshot);
        let snapshot = self.snapshot(id);
        let effects = self.core.register(id, &snapshot);
        self.apply(effects);
        id
    }

    fn snapshot(&self, id: ElementId) -> ElementSnapshot {
        self.elements[&id].snapshot.clone()
    }

    fn el(&self, id: ElementId) -> &FakeElement {
        &self.elements[&id]
    }

    fn intersect(&mut self, id: ElementId, group: WatchGroup) -> usize {
        let snapshot = self.snapshot(id);
        let effects = self.core.on_intersect(id, group, &snapshot);
        let count = effects.len();
        self.apply(effects);
        count
    }

    fn frame(&mut self, dark: bool) {
        let effects = self.core.flush(dark);
        self.apply(effects);
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.log.push((self.now, effect.clone()));
            match effect {
                Effect::AddClass { id, class } => {
                    let el = self.elements.get_mut(&id).unwrap();
                    if !el.snapshot.has_class(&class) {
                        el.snapshot.classes.push(class);
                    }
                }
                Effect::SetStyle { id, property, value } => {
                    self.elements.get_mut(&id).unwrap().styles.insert(property, value);
                }
                Effect::SetChildStyle { id, index, property, value } => {
                    self.elements.get_mut(&id).unwrap().child_styles.insert((index, property), value);
                }
                Effect::SetText { id, text } => {
                    self.elements.get_mut(&id).unwrap().snapshot.text = text;
                }
                Effect::SetAttribute { id, name, value } => {
                    self.elements.get_mut(&id).unwrap().snapshot.attributes.insert(name.to_owned(), value);
                }
                Effect::SplitText { id, glyphs } => {
                    self.elements.get_mut(&id).unwrap().glyphs = glyphs.len();
                }
                Effect::Observe { id, group } => {
                    assert!(self.elements.get_mut(&id).unwrap().observed.insert(group), "observed twice");
                }
                Effect::Unobserve { id, group } => {
                    self.elements.get_mut(&id).unwrap().observed.remove(&group);
                }
                Effect::StartTimeout { timer, delay_ms } => self.start(timer, f64::from(delay_ms), None),
                Effect::StartInterval { timer, interval_ms } => {
                    let interval = f64::from(interval_ms);
                    self.start(timer, interval, Some(interval));
                }
                Effect::CancelTimer { timer } => self.timers.retain(|t| t.id != timer),
                Effect::RequestFrame => self.frames += 1,
            }
        }
    }

    fn start(&mut self, id: TimerId, after: f64, interval: Option<f64>) {
        self.seq += 1;
        self.timers.push(Timer { id, due: self.now + after, seq: self.seq, interval });
    }

    /// Advance the clock, firing due timers in order.
    fn advance(&mut self, ms: f64) {
        let until = self.now + ms;
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due <= until)
                .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)))
                .map(|(index, _)| index);
            let Some(index) = next else {
                break;
            };
            self.now = self.timers[index].due;
            let id = self.timers[index].id;
            if let Some(interval) = self.timers[index].interval {
                self.seq += 1;
                self.timers[index].due += interval;
                self.timers[index].seq = self.seq;
            } else {
                self.timers.remove(index);
            }
            let effects = self.core.on_timer(id);
            self.apply(effects);
        }
        self.now = until;
    }

    fn texts(&self, id: ElementId) -> Vec<(f64, String)> {
        self.log
            .iter()
            .filter_map(|(at, e)| match e {
                Effect::SetText { id: target, text } if *target == id => Some((*at, text.clone())),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&Effect) -> bool) -> usize {
        self.log.iter().filter(|(_, e)| pred(e)).count()
    }
}

fn counter(text: &str, target: &str) -> ElementSnapshot {
    ElementSnapshot::new("span").with_class("counter").with_text(text).with_attr("data-target", target)
}

// =============================================================================
// Counter
// =============================================================================

#[test]
fn counter_reaches_target_exactly_at_duration() {
    let mut sim = Sim::new();
    let id = sim.add(1, counter("0", "250"));
    sim.intersect(id, WatchGroup::Animate);
    sim.advance(0.0);
    assert!(sim.el(id).snapshot.has_class("aos-animate"));

    sim.advance(1999.0);
    assert_ne!(sim.el(id).snapshot.text, "250");
    sim.advance(1.0);
    assert_eq!(sim.el(id).snapshot.text, "250");

    let texts = sim.texts(id);
    assert_eq!(texts.last().unwrap(), &(2000.0, "250".to_owned()));
    assert!(texts.iter().all(|(_, t)| t.parse::<i64>().unwrap() <= 250));
    assert!(sim.timers.is_empty());
    assert_eq!(sim.core.pending_timers(), 0);
}

#[test]
fn counter_with_fractional_increment_never_overshoots() {
    let config = RevealConfig { counter_duration_ms: 100, ..RevealConfig::default() };
    let mut sim = Sim::with_config(config);
    let id = sim.add(1, counter("0", "7"));
    sim.intersect(id, WatchGroup::Animate);
    sim.advance(500.0);

    let values: Vec<i64> = sim.texts(id).iter().map(|(_, t)| t.parse().unwrap()).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert!(values.iter().all(|v| *v <= 7));
    assert_eq!(values.last(), Some(&7));
    assert!(sim.timers.is_empty());
}

#[test]
fn descending_counter_stops_at_target() {
    let mut sim = Sim::new();
    let id = sim.add(1, counter("100", "0"));
    sim.intersect(id, WatchGroup::Animate);
    sim.advance(3000.0);

    let values: Vec<i64> = sim.texts(id).iter().map(|(_, t)| t.parse().unwrap()).collect();
    assert!(values.iter().all(|v| *v >= 0));
    assert_eq!(values.last(), Some(&0));
}

#[test]
fn counter_duration_attribute_overrides_config() {
    let mut sim = Sim::new();
    let id = sim.add(1, counter("0", "10").with_attr("data-duration", "160"));
    sim.intersect(id, WatchGroup::Animate);
    sim.advance(160.0);
    assert_eq!(sim.el(id).snapshot.text, "10");
    assert!(sim.timers.is_empty());
}

#[test]
fn garbage_target_falls_back_to_text() {
    let mut sim = Sim::new();
    let id = sim.add(1, counter("42", "lots"));
    sim.intersect(id, WatchGroup::Animate);
    sim.advance(100.0);
    assert_eq!(sim.el(id).snapshot.text, "42");
    assert!(sim.timers.is_empty());
}

// =============================================================================
// Trigger lifecycle
// =============================================================================

#[test]
fn trigger_fires_once_across_reintersection() {
    let mut sim = Sim::new();
    let id = sim.add(1, ElementSnapshot::new("div").with_attr("data-aos", "fade-up"));
    assert!(sim.el(id).snapshot.has_class("aos-element"));
    assert!(sim.el(id).snapshot.has_class("aos-fade-up"));
    assert!(sim.core.is_watched(id, WatchGroup::Animate));

    sim.intersect(id, WatchGroup::Animate);
    assert!(sim.el(id).observed.is_empty());
    assert_eq!(sim.intersect(id, WatchGroup::Animate), 0);

    let snapshot = sim.snapshot(id);
    assert!(sim.core.register(id, &snapshot).is_empty());
    sim.advance(1000.0);

    let animated = sim.count(|e| matches!(e, Effect::AddClass { class, .. } if class == "aos-animate"));
    assert_eq!(animated, 1);
    assert!(sim.core.has_fired(id, WatchGroup::Animate));
}

#[test]
fn registering_twice_observes_once() {
    let mut sim = Sim::new();
    let id = sim.add(1, ElementSnapshot::new("div").with_attr("data-aos", "zoom"));
    let snapshot = sim.snapshot(id);
    assert!(sim.core.register(id, &snapshot).is_empty());
}

#[test]
fn delay_is_honored() {
    let mut sim = Sim::new();
    let id = sim.add(1, ElementSnapshot::new("div").with_attr("data-aos", "fade-left").with_attr("data-aos-delay", "300"));
    sim.intersect(id, WatchGroup::Animate);
    sim.advance(299.0);
    assert!(!sim.el(id).snapshot.has_class("aos-animate"));
    sim.advance(1.0);
    assert!(sim.el(id).snapshot.has_class("aos-animate"));
}

#[test]
fn garbage_delay_means_immediate() {
    let mut sim = Sim::new();
    let id = sim.add(1, ElementSnapshot::new("div").with_attr("data-aos", "").with_attr("data-aos-delay", "soon"));
    sim.intersect(id, WatchGroup::Animate);
    sim.advance(0.0);
    assert!(sim.el(id).snapshot.has_class("aos-animate"));
}

#[test]
fn unmarked_element_is_not_observed() {
    let mut sim = Sim::new();
    let id = sim.add(1, ElementSnapshot::new("div").with_class("card"));
    assert!(sim.el(id).observed.is_empty());
    assert!(!sim.core.is_watched(id, WatchGroup::Animate));
    assert_eq!(sim.intersect(id, WatchGroup::Animate), 0);
}

#[test]
fn unknown_timer_is_ignored() {
    let mut core = RevealCore::default();
    assert!(core.on_timer(TimerId(99)).is_empty());
}

// =============================================================================
// Stagger / progress
// =============================================================================

#[test]
fn stagger_children_appear_in_order() {
    let mut sim = Sim::new();
    let id = sim.add(1, ElementSnapshot::new("div").with_class("stagger-children").with_children(4));
    sim.intersect(id, WatchGroup::Animate);
    sim.advance(1000.0);

    for index in 0..4 {
        assert_eq!(sim.el(id).child_styles[&(index, "opacity")], "1");
        let shown_at = sim
            .log
            .iter()
            .find(|(_, e)| matches!(e, Effect::SetChildStyle { index: i, property: "opacity", .. } if *i == index))
            .map(|(at, _)| *at)
            .unwrap();
        #[allow(clippy::cast_precision_loss)]
        let expected = index as f64 * 100.0;
        assert!(shown_at >= expected);
    }
}

#[test]
fn progress_bar_widens_once_after_pre_delay() {
    let mut sim = Sim::new();
    let id = sim.add(1, ElementSnapshot::new("div").with_class("skill-progress").with_attr("data-width", "80"));
    sim.intersect(id, WatchGroup::Animate);
    sim.advance(0.0);
    assert_eq!(
        sim.el(id).styles["transition"],
        "width 1500ms cubic-bezier(0.25, 0.46, 0.45, 0.94)"
    );
    assert!(!sim.el(id).styles.contains_key("width"));

    sim.advance(99.0);
    assert!(!sim.el(id).styles.contains_key("width"));
    sim.advance(1.0);
    assert_eq!(sim.el(id).styles["width"], "80%");

    sim.advance(5000.0);
    assert_eq!(sim.count(|e| matches!(e, Effect::SetStyle { property: "width", .. })), 1);
}

#[test]
fn prepared_progress_bar_collapses_and_waits() {
    let mut sim = Sim::new();
    let id = sim.insert(1, ElementSnapshot::new("div").with_class("skill-progress").with_attr("data-width", "65%"));
    let effects = RevealCore::prepare_progress_bar(id);
    sim.apply(effects);
    assert_eq!(sim.el(id).styles["width"], "0%");
    assert_eq!(sim.el(id).snapshot.attr("data-aos-delay"), Some("200"));

    let snapshot = sim.snapshot(id);
    let effects = sim.core.register(id, &snapshot);
    sim.apply(effects);
    sim.intersect(id, WatchGroup::Animate);
    sim.advance(299.0);
    assert_eq!(sim.el(id).styles["width"], "0%");
    sim.advance(1.0);
    assert_eq!(sim.el(id).styles["width"], "65%");
}

#[test]
fn stat_heading_becomes_counter() {
    let snap = ElementSnapshot::new("h3").with_text("150+");
    let effects = RevealCore::prepare_stat_counter(ElementId(1), &snap);
    assert_eq!(
        effects,
        vec![
            Effect::add_class(ElementId(1), "counter"),
            Effect::SetAttribute { id: ElementId(1), name: "data-target", value: "150".to_owned() },
            Effect::SetText { id: ElementId(1), text: "0".to_owned() },
        ]
    );
    assert!(RevealCore::prepare_stat_counter(ElementId(2), &ElementSnapshot::new("h3").with_text("N/A")).is_empty());
}

// =============================================================================
// Scroll / resize
// =============================================================================

#[test]
fn scroll_burst_requests_one_frame() {
    let mut sim = Sim::new();
    for i in 0..50 {
        let effects = sim.core.on_scroll(f64::from(i) * 0.3, f64::from(i));
        sim.apply(effects);
    }
    assert_eq!(sim.frames, 1);
}

#[test]
fn pending_frame_blocks_second_request() {
    let mut core = RevealCore::default();
    assert_eq!(core.on_scroll(0.0, 10.0), vec![Effect::RequestFrame]);
    assert!(core.on_scroll(20.0, 30.0).is_empty());
    core.flush(false);
    assert_eq!(core.on_scroll(40.0, 50.0), vec![Effect::RequestFrame]);
    assert!(core.on_scroll(45.0, 60.0).is_empty());
}

#[test]
fn frame_draws_position_where_the_burst_ended() {
    let mut sim = Sim::new();
    let nav = sim.insert(1, ElementSnapshot::new("nav"));
    sim.core.register_navbar(nav);

    assert_eq!(sim.core.on_scroll(0.0, 0.0), vec![Effect::RequestFrame]);
    assert!(sim.core.on_scroll(10.0, 500.0).is_empty());
    sim.frame(false);
    assert_eq!(sim.el(nav).styles["background-color"], "rgba(255, 255, 255, 0.9)");
}

#[test]
fn resize_burst_settles_once() {
    let mut sim = Sim::new();
    let layer = sim.insert(1, ElementSnapshot::new("div").with_attr("data-speed", "0.5"));
    let snapshot = sim.snapshot(layer);
    let effects = sim.core.register_parallax(layer, &snapshot);
    sim.apply(effects);

    for _ in 0..10 {
        let effects = sim.core.on_resize(120.0);
        sim.apply(effects);
        sim.advance(50.0);
    }
    // Last resize at t=450.
    assert_eq!(sim.frames, 0);
    sim.advance(199.0);
    assert_eq!(sim.frames, 0);
    sim.advance(1.0);
    assert_eq!(sim.frames, 1);
    assert_eq!(sim.el(layer).styles["transform"], "");

    sim.frame(false);
    assert_eq!(sim.el(layer).styles["transform"], "translateY(-60px)");
    sim.advance(1000.0);
    assert_eq!(sim.frames, 1);
    assert_eq!(sim.core.pending_timers(), 0);
}

#[test]
fn flush_moves_layers_and_fades_chrome() {
    let mut sim = Sim::new();
    let nav = sim.insert(1, ElementSnapshot::new("nav"));
    let indicator = sim.insert(2, ElementSnapshot::new("div"));
    let layer = sim.insert(3, ElementSnapshot::new("div").with_attr("data-speed", "abc"));
    sim.core.register_navbar(nav);
    sim.core.register_scroll_indicator(indicator);
    let snapshot = sim.snapshot(layer);
    let effects = sim.core.register_parallax(layer, &snapshot);
    sim.apply(effects);

    let effects = sim.core.on_scroll(0.0, 50.0);
    sim.apply(effects);
    sim.frame(false);
    assert_eq!(sim.el(layer).styles["transform"], "translateY(-25px)");
    assert_eq!(sim.el(nav).styles["background-color"], "rgba(255, 255, 255, 0.45)");
    assert_eq!(sim.el(indicator).styles["opacity"], "0.833");

    let effects = sim.core.on_scroll(100.0, 400.0);
    sim.apply(effects);
    sim.frame(true);
    assert_eq!(sim.el(nav).styles["background-color"], "rgba(15, 23, 42, 0.9)");
    assert_eq!(sim.el(indicator).styles["opacity"], "0");
}

#[test]
fn parallax_without_speed_gets_sampled_speed() {
    let mut sim = Sim::new();
    let id = sim.insert(1, ElementSnapshot::new("div").with_class("shape"));
    let snapshot = sim.snapshot(id);
    let effects = sim.core.register_parallax(id, &snapshot);
    sim.apply(effects);

    assert!(sim.el(id).snapshot.has_class("parallax-element"));
    let written: f64 = sim.el(id).snapshot.attr("data-speed").unwrap().parse().unwrap();
    assert!((0.2..=0.7).contains(&written));
    let stored = sim.core.parallax().speed(id).unwrap();
    assert!((0.2..0.7).contains(&stored));
}

// =============================================================================
// Sections, text, lazy
// =============================================================================

#[test]
fn sections_reveal_but_hero_is_skipped() {
    let mut sim = Sim::new();
    let hero = sim.insert(1, ElementSnapshot::new("section").with_class("hero"));
    let about = sim.insert(2, ElementSnapshot::new("section"));
    let div = sim.insert(3, ElementSnapshot::new("div"));
    for id in [hero, about, div] {
        let snapshot = sim.snapshot(id);
        let effects = sim.core.register_section(id, &snapshot);
        sim.apply(effects);
    }
    assert!(sim.el(hero).observed.is_empty());
    assert!(sim.el(div).observed.is_empty());
    assert!(sim.el(about).snapshot.has_class("scroll-reveal"));

    sim.intersect(about, WatchGroup::Section);
    assert!(sim.el(about).snapshot.has_class("revealed"));
    assert!(sim.el(about).observed.is_empty());
}

#[test]
fn text_reveal_shows_every_glyph() {
    let mut sim = Sim::new();
    let id = sim.insert(1, ElementSnapshot::new("h2").with_text("Hi you"));
    let snapshot = sim.snapshot(id);
    let effects = sim.core.register_text_reveal(id, &snapshot);
    sim.apply(effects);
    assert_eq!(sim.el(id).glyphs, 6);
    assert!(sim.core.register_text_reveal(id, &snapshot).is_empty());

    sim.intersect(id, WatchGroup::Text);
    for index in 0..6 {
        assert_eq!(sim.el(id).child_styles[&(index, "opacity")], "1");
        assert_eq!(sim.el(id).child_styles[&(index, "transform")], "translateY(0)");
    }
    assert!(sim.core.has_fired(id, WatchGroup::Text));
}

#[test]
fn lazy_element_without_source_stays_observed() {
    let mut sim = Sim::new();
    let id = sim.insert(1, ElementSnapshot::new("img"));
    let effects = sim.core.register_lazy(id);
    sim.apply(effects);

    assert_eq!(sim.intersect(id, WatchGroup::Lazy), 0);
    assert!(sim.core.is_watched(id, WatchGroup::Lazy));

    sim.elements.get_mut(&id).unwrap().snapshot.attributes.insert("data-src".to_owned(), "/a.webp".to_owned());
    sim.intersect(id, WatchGroup::Lazy);
    assert_eq!(sim.el(id).snapshot.attr("src"), Some("/a.webp"));
    assert!(sim.el(id).snapshot.has_class("loaded"));
    assert!(!sim.core.is_watched(id, WatchGroup::Lazy));
}

// =============================================================================
// Morph / intro / options
// =============================================================================

#[test]
fn morph_runs_while_hovered() {
    let mut sim = Sim::new();
    let id = sim.insert(1, ElementSnapshot::new("div").with_class("morphing-shape"));
    let effects = sim.core.on_pointer_enter(id);
    sim.apply(effects);
    assert!(sim.core.on_pointer_enter(id).is_empty());

    sim.advance(1000.0);
    let radius = |e: &Effect| matches!(e, Effect::SetStyle { property: "border-radius", value, .. } if !value.is_empty());
    assert_eq!(sim.count(radius), 2);

    let effects = sim.core.on_pointer_leave(id);
    sim.apply(effects);
    assert_eq!(sim.el(id).styles["border-radius"], "");
    sim.advance(1000.0);
    assert_eq!(sim.count(radius), 2);
    assert!(sim.timers.is_empty());
    assert_eq!(sim.core.pending_timers(), 0);
}

#[test]
fn intro_slides_in_navbar_then_hero() {
    let mut sim = Sim::new();
    let hero = sim.insert(1, ElementSnapshot::new("div"));
    let nav = sim.insert(2, ElementSnapshot::new("nav"));
    let effects = sim.core.intro(Some(hero), Some(nav));
    sim.apply(effects);
    assert_eq!(sim.el(hero).styles["opacity"], "0");
    assert_eq!(sim.el(nav).styles["transform"], "translateY(-100%)");

    sim.advance(200.0);
    assert_eq!(sim.el(nav).styles["transform"], "translateY(0)");
    assert_eq!(sim.el(hero).styles["opacity"], "0");
    sim.advance(300.0);
    assert_eq!(sim.el(hero).styles["opacity"], "1");
}

#[test]
fn intro_skips_missing_targets() {
    let mut core = RevealCore::default();
    assert!(core.intro(None, None).is_empty());
}

#[test]
fn observe_options_follow_config() {
    let core = RevealCore::default();
    assert_eq!(
        core.observe_options(WatchGroup::Animate),
        ObserveOptions { threshold: 0.1, root_margin: "0px 0px -50px 0px".to_owned() }
    );
    assert_eq!(
        core.observe_options(WatchGroup::Section),
        ObserveOptions { threshold: 0.15, root_margin: "0px 0px -100px 0px".to_owned() }
    );
    assert_eq!(core.observe_options(WatchGroup::Lazy).threshold, 0.0);
}
