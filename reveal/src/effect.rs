//! Effects returned by the engine for the host to apply.
//!
//! The engine never touches the DOM, the clock, or the browser observer API.
//! Each call into [`crate::engine::RevealCore`] returns a list of [`Effect`]s
//! that the host applies in order: style and class writes go to the element
//! addressed by [`ElementId`], timer effects go to the host's timer primitive
//! keyed by [`TimerId`], and observe effects go to the intersection observer
//! for the given [`WatchGroup`].

/// Host-assigned handle for a DOM element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Engine-assigned handle for a scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Which observer an element is watched by.
///
/// Groups with identical observation options share one observer on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatchGroup {
    /// `data-aos` elements, counters, progress bars, and stagger containers.
    Animate,
    /// Page sections revealed as a whole.
    Section,
    /// Split-text reveals.
    Text,
    /// Lazily loaded images and backgrounds.
    Lazy,
}

/// One character span produced by a text split.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Text content of the span (spaces become non-breaking spaces).
    pub text: String,
    /// Transition delay in seconds before this span animates in.
    pub delay_secs: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    AddClass { id: ElementId, class: String },
    /// Set an inline style property. An empty value clears the property.
    SetStyle { id: ElementId, property: &'static str, value: String },
    /// Set an inline style property on the `index`-th element child.
    SetChildStyle { id: ElementId, index: usize, property: &'static str, value: String },
    SetText { id: ElementId, text: String },
    SetAttribute { id: ElementId, name: &'static str, value: String },
    /// Replace the element's content with one hidden span per glyph.
    SplitText { id: ElementId, glyphs: Vec<Glyph> },
    Observe { id: ElementId, group: WatchGroup },
    Unobserve { id: ElementId, group: WatchGroup },
    /// Call back into the engine once after `delay_ms`.
    StartTimeout { timer: TimerId, delay_ms: u32 },
    /// Call back into the engine every `interval_ms` until cancelled.
    StartInterval { timer: TimerId, interval_ms: u32 },
    CancelTimer { timer: TimerId },
    /// Ask for one animation frame, then call `flush`.
    RequestFrame,
}

impl Effect {
    pub(crate) fn add_class(id: ElementId, class: impl Into<String>) -> Self {
        Self::AddClass { id, class: class.into() }
    }

    pub(crate) fn style(id: ElementId, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle { id, property, value: value.into() }
    }
}
