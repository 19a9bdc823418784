//! Browser host for [`RevealCore`].
//!
//! Owns the live DOM elements, one `IntersectionObserver` per watch group,
//! and the gloo timers backing engine timers. Every browser event is turned
//! into one engine call, and the returned effects are applied here.
//!
//! Elements are tagged with `data-reveal-id` when first seen, so an observer
//! entry can be mapped back to its [`ElementId`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use reveal::consts::{
    SELECTOR_ANIMATE, SELECTOR_FLOATING_SHAPE, SELECTOR_LAZY, SELECTOR_MORPH, SELECTOR_NAVBAR, SELECTOR_PARALLAX,
    SELECTOR_PROGRESS, SELECTOR_SCROLL_INDICATOR, SELECTOR_SECTION, SELECTOR_STAT, SELECTOR_TEXT_REVEAL,
};
use reveal::hover::HOVER_PRESETS;
use reveal::stagger::{HIDDEN_GLYPH_STYLES, glyph_transition};
use reveal::{Effect, ElementId, Glyph, RevealConfig, RevealCore, TimerId, WatchGroup};

use super::dom;

const ID_ATTR: &str = "data-reveal-id";

enum Timer {
    Once(Timeout),
    Every(Interval),
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct Inner {
    core: RevealCore,
    elements: Vec<Element>,
    observers: HashMap<WatchGroup, (IntersectionObserver, ObserverCallback)>,
    timers: HashMap<TimerId, Timer>,
    /// Closures of finished or cancelled timers. Dropped on the next event,
    /// never while their own callback is on the stack.
    retired: Vec<Closure<dyn FnMut()>>,
}

#[derive(Clone)]
pub struct RevealHost {
    inner: Rc<RefCell<Inner>>,
}

impl RevealHost {
    pub fn new(config: RevealConfig, seed: u64) -> Self {
        let inner = Inner {
            core: RevealCore::new(config, seed),
            elements: Vec::new(),
            observers: HashMap::new(),
            timers: HashMap::new(),
            retired: Vec::new(),
        };
        Self { inner: Rc::new(RefCell::new(inner)) }
    }

    /// Run the preparation passes, then register every watched element.
    pub fn scan(&self) {
        for el in dom::query_all(SELECTOR_STAT) {
            self.with_element(&el, RevealCore::prepare_stat_counter);
        }
        for el in dom::query_all(SELECTOR_PROGRESS) {
            self.with_element(&el, |id, _| RevealCore::prepare_progress_bar(id));
        }

        for el in dom::query_all(SELECTOR_ANIMATE) {
            self.with_core(&el, RevealCore::register);
        }
        for el in dom::query_all(SELECTOR_SECTION) {
            self.with_core(&el, RevealCore::register_section);
        }
        for el in dom::query_all(SELECTOR_TEXT_REVEAL) {
            self.with_core(&el, RevealCore::register_text_reveal);
        }
        for el in dom::query_all(SELECTOR_LAZY) {
            self.with_core(&el, |core, id, _| core.register_lazy(id));
        }

        let mut layers = dom::query_all(SELECTOR_PARALLAX);
        if layers.is_empty() {
            layers = dom::query_all(SELECTOR_FLOATING_SHAPE);
        }
        for el in layers {
            self.with_core(&el, RevealCore::register_parallax);
        }

        if let Some(el) = dom::query(SELECTOR_NAVBAR) {
            let id = self.intern(&el);
            self.inner.borrow_mut().core.register_navbar(id);
        }
        if let Some(el) = dom::query(SELECTOR_SCROLL_INDICATOR) {
            let id = self.intern(&el);
            self.inner.borrow_mut().core.register_scroll_indicator(id);
        }

        let count = self.inner.borrow().elements.len();
        log::info!("reveal: scanned {count} elements");
    }

    /// Slide in the navbar and hero content.
    pub fn intro(&self) {
        let hero = dom::query(".hero-content").map(|el| self.intern(&el));
        let navbar = dom::query(SELECTOR_NAVBAR).map(|el| self.intern(&el));
        self.dispatch(|core| core.intro(hero, navbar));
    }

    /// Scroll, resize, morph, and hover listeners.
    pub fn listen(&self) {
        let Ok(window) = dom::window() else {
            return;
        };

        let host = self.clone();
        dom::listen(&window, "scroll", move |_| {
            let (now, y) = clock_and_scroll();
            host.dispatch(|core| core.on_scroll(now, y));
        });
        let host = self.clone();
        dom::listen(&window, "resize", move |_| {
            let (_, y) = clock_and_scroll();
            host.dispatch(|core| core.on_resize(y));
        });

        for el in dom::query_all(SELECTOR_MORPH) {
            let id = self.intern(&el);
            let host = self.clone();
            dom::listen(&el, "mouseenter", move |_| host.dispatch(|core| core.on_pointer_enter(id)));
            let host = self.clone();
            dom::listen(&el, "mouseleave", move |_| host.dispatch(|core| core.on_pointer_leave(id)));
        }

        for preset in HOVER_PRESETS {
            for el in dom::query_all(preset.selector) {
                if !preset.applies_to(&dom::snapshot(&el)) {
                    continue;
                }
                let target = el.clone();
                dom::listen(&el, "mouseenter", move |_| dom::set_styles(&target, preset.enter));
                let target = el.clone();
                dom::listen(&el, "mouseleave", move |_| dom::set_styles(&target, preset.leave));
            }
        }
    }

    fn intern(&self, el: &Element) -> ElementId {
        if let Some(id) = el.get_attribute(ID_ATTR).and_then(|raw| raw.parse().ok()) {
            return ElementId(id);
        }
        let mut inner = self.inner.borrow_mut();
        let id = ElementId(u32::try_from(inner.elements.len()).unwrap_or(u32::MAX));
        dom::set_attr(el, ID_ATTR, &id.0.to_string());
        inner.elements.push(el.clone());
        id
    }

    fn with_element(&self, el: &Element, f: impl FnOnce(ElementId, &reveal::ElementSnapshot) -> Vec<Effect>) {
        let id = self.intern(el);
        let snapshot = dom::snapshot(el);
        let effects = f(id, &snapshot);
        self.apply(effects);
    }

    fn with_core(
        &self,
        el: &Element,
        f: impl FnOnce(&mut RevealCore, ElementId, &reveal::ElementSnapshot) -> Vec<Effect>,
    ) {
        let id = self.intern(el);
        let snapshot = dom::snapshot(el);
        self.dispatch(|core| f(core, id, &snapshot));
    }

    /// Call into the engine and apply what it returns.
    fn dispatch(&self, f: impl FnOnce(&mut RevealCore) -> Vec<Effect>) {
        self.inner.borrow_mut().retired.clear();
        self.run(f);
    }

    fn run(&self, f: impl FnOnce(&mut RevealCore) -> Vec<Effect>) {
        let effects = f(&mut self.inner.borrow_mut().core);
        self.apply(effects);
    }

    /// Runs inside the timer's own callback, so its closure is retired, not dropped.
    fn on_timer(&self, timer: TimerId) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.retired.clear();
            if matches!(inner.timers.get(&timer), Some(Timer::Once(_))) {
                if let Some(Timer::Once(handle)) = inner.timers.remove(&timer) {
                    inner.retired.push(handle.cancel());
                }
            }
        }
        self.run(|core| core.on_timer(timer));
    }

    fn on_entries(&self, group: WatchGroup, entries: &js_sys::Array) {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let el = entry.target();
            let Some(id) = el.get_attribute(ID_ATTR).and_then(|raw| raw.parse().ok()).map(ElementId) else {
                continue;
            };
            let snapshot = dom::snapshot(&el);
            self.dispatch(|core| core.on_intersect(id, group, &snapshot));
        }
    }

    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.apply_one(effect);
        }
    }

    fn element(&self, id: ElementId) -> Option<Element> {
        self.inner.borrow().elements.get(id.0 as usize).cloned()
    }

    fn apply_one(&self, effect: Effect) {
        match effect {
            Effect::AddClass { id, class } => self.on_element(id, |el| dom::add_class(el, &class)),
            Effect::SetStyle { id, property, value } => self.on_element(id, |el| dom::set_style(el, property, &value)),
            Effect::SetChildStyle { id, index, property, value } => self.on_element(id, |el| {
                let child = u32::try_from(index).ok().and_then(|i| el.children().item(i));
                if let Some(child) = child {
                    dom::set_style(&child, property, &value);
                }
            }),
            Effect::SetText { id, text } => self.on_element(id, |el| dom::set_text(el, &text)),
            Effect::SetAttribute { id, name, value } => self.on_element(id, |el| dom::set_attr(el, name, &value)),
            Effect::SplitText { id, glyphs } => self.on_element(id, |el| split_text(el, &glyphs)),
            Effect::Observe { id, group } => {
                if let (Some(el), Some(observer)) = (self.element(id), self.observer(group)) {
                    observer.observe(&el);
                }
            }
            Effect::Unobserve { id, group } => {
                if let (Some(el), Some(observer)) = (self.element(id), self.observer(group)) {
                    observer.unobserve(&el);
                }
            }
            Effect::StartTimeout { timer, delay_ms } => {
                let weak = self.weak();
                let handle = Timeout::new(delay_ms, move || fire(&weak, timer));
                self.inner.borrow_mut().timers.insert(timer, Timer::Once(handle));
            }
            Effect::StartInterval { timer, interval_ms } => {
                let weak = self.weak();
                let handle = Interval::new(interval_ms, move || fire(&weak, timer));
                self.inner.borrow_mut().timers.insert(timer, Timer::Every(handle));
            }
            Effect::CancelTimer { timer } => {
                let mut inner = self.inner.borrow_mut();
                let closure = match inner.timers.remove(&timer) {
                    Some(Timer::Once(handle)) => Some(handle.cancel()),
                    Some(Timer::Every(handle)) => Some(handle.cancel()),
                    None => None,
                };
                inner.retired.extend(closure);
            }
            Effect::RequestFrame => self.request_frame(),
        }
    }

    fn on_element(&self, id: ElementId, f: impl FnOnce(&Element)) {
        match self.element(id) {
            Some(el) => f(&el),
            None => log::warn!("reveal: effect for unknown element {id:?}"),
        }
    }

    fn weak(&self) -> Weak<RefCell<Inner>> {
        Rc::downgrade(&self.inner)
    }

    /// The shared observer for `group`, created on first use.
    fn observer(&self, group: WatchGroup) -> Option<IntersectionObserver> {
        if let Some((observer, _)) = self.inner.borrow().observers.get(&group) {
            return Some(observer.clone());
        }

        let options = self.inner.borrow().core.observe_options(group);
        let init = IntersectionObserverInit::new();
        init.set_threshold(&options.threshold.into());
        init.set_root_margin(&options.root_margin);

        let weak = self.weak();
        let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            if let Some(inner) = weak.upgrade() {
                RevealHost { inner }.on_entries(group, &entries);
            }
        });
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("reveal: observer for {group:?} unavailable: {}", dom::DomError::from(err));
                return None;
            }
        };
        log::debug!("reveal: observer for {group:?} at {} / {}", options.threshold, options.root_margin);
        self.inner.borrow_mut().observers.insert(group, (observer.clone(), callback));
        Some(observer)
    }

    fn request_frame(&self) {
        let Ok(window) = dom::window() else {
            return;
        };
        let weak = self.weak();
        let callback = Closure::once_into_js(move |_ts: f64| {
            if let Some(inner) = weak.upgrade() {
                let dark = is_dark();
                RevealHost { inner }.dispatch(|core| core.flush(dark));
            }
        });
        dom::warn_on_err("request frame", window.request_animation_frame(callback.unchecked_ref()));
    }
}

fn fire(weak: &Weak<RefCell<Inner>>, timer: TimerId) {
    if let Some(inner) = weak.upgrade() {
        RevealHost { inner }.on_timer(timer);
    }
}

fn split_text(el: &Element, glyphs: &[Glyph]) {
    let Ok(document) = dom::document() else {
        return;
    };
    el.set_text_content(Some(""));
    for glyph in glyphs {
        let span = match document.create_element("span") {
            Ok(span) => span,
            Err(err) => {
                log::warn!("reveal: cannot create glyph span: {}", dom::DomError::from(err));
                return;
            }
        };
        dom::set_text(&span, &glyph.text);
        dom::set_style(&span, "display", "inline-block");
        dom::set_styles(&span, &HIDDEN_GLYPH_STYLES);
        dom::set_style(&span, "transition", &glyph_transition(glyph));
        dom::warn_on_err("append glyph", el.append_child(&span));
    }
}

/// `performance.now()` and `scrollY`.
fn clock_and_scroll() -> (f64, f64) {
    let Ok(window) = dom::window() else {
        return (0.0, 0.0);
    };
    let now = window.performance().map_or_else(js_sys::Date::now, |p| p.now());
    (now, window.scroll_y().unwrap_or(0.0))
}

fn is_dark() -> bool {
    dom::body().is_ok_and(|body| body.get_attribute("data-theme").as_deref() == Some("dark"))
}
