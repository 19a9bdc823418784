//! Element snapshots, animation kinds, and the watched-element descriptor.
//!
//! A host reads an [`ElementSnapshot`] off a live DOM node (tag, classes, the
//! marker attributes listed in [`crate::consts::MARKER_ATTRIBUTES`], text, and
//! element child count). Everything the engine knows about an element comes
//! from a snapshot; [`Descriptor::read`] turns one into typed animation
//! parameters, substituting defaults for anything missing or unparsable.

#[cfg(test)]
#[path = "descriptor_test.rs"]
mod descriptor_test;

use std::collections::HashMap;

use crate::consts::{
    ATTR_DELAY, ATTR_DURATION, ATTR_KIND, ATTR_TARGET, ATTR_WIDTH, CLASS_COUNTER, CLASS_PROGRESS, CLASS_STAGGER,
};
use crate::progress::normalize_width;

/// Point-in-time view of a DOM element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementSnapshot {
    /// Upper-case tag name as reported by the DOM (`IMG`, `SECTION`, ...).
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: HashMap<String, String>,
    pub text: String,
    pub child_count: usize,
}

impl ElementSnapshot {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self { tag: tag.to_ascii_uppercase(), ..Self::default() }
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_owned());
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        text.clone_into(&mut self.text);
        self
    }

    #[must_use]
    pub fn with_children(mut self, count: usize) -> Self {
        self.child_count = count;
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether the element carries any animation marker.
    #[must_use]
    pub fn is_animation_target(&self) -> bool {
        self.attr(ATTR_KIND).is_some()
            || self.has_class(CLASS_COUNTER)
            || self.has_class(CLASS_PROGRESS)
            || self.has_class(CLASS_STAGGER)
    }
}

/// What happens when an element's trigger fires.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnimationKind {
    #[default]
    FadeUp,
    FadeRight,
    FadeLeft,
    Zoom,
    /// Numeric ramp of the element's text.
    Counter,
    /// Width transition to the target percentage.
    ProgressBar,
    /// Cascading reveal of the element's children.
    StaggerContainer,
    /// Any other marker value; styling is left to the stylesheet.
    Custom(String),
}

impl AnimationKind {
    /// Parse the `data-aos` marker value. Absent or blank means fade-up.
    #[must_use]
    pub fn from_marker(raw: Option<&str>) -> Self {
        match raw.map(str::trim).unwrap_or_default() {
            "" | "fade-up" => Self::FadeUp,
            "fade-right" => Self::FadeRight,
            "fade-left" => Self::FadeLeft,
            "zoom" | "zoom-in" => Self::Zoom,
            "counter" => Self::Counter,
            "progress-bar" => Self::ProgressBar,
            "stagger" | "stagger-container" => Self::StaggerContainer,
            other => Self::Custom(other.to_owned()),
        }
    }

    /// Resolve the kind for an element. Marker classes win over `data-aos`,
    /// in the order counter, progress bar, stagger container.
    #[must_use]
    pub fn resolve(snapshot: &ElementSnapshot) -> Self {
        if snapshot.has_class(CLASS_COUNTER) {
            Self::Counter
        } else if snapshot.has_class(CLASS_PROGRESS) {
            Self::ProgressBar
        } else if snapshot.has_class(CLASS_STAGGER) {
            Self::StaggerContainer
        } else {
            Self::from_marker(snapshot.attr(ATTR_KIND))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::FadeUp => "fade-up",
            Self::FadeRight => "fade-right",
            Self::FadeLeft => "fade-left",
            Self::Zoom => "zoom",
            Self::Counter => "counter",
            Self::ProgressBar => "progress-bar",
            Self::StaggerContainer => "stagger-container",
            Self::Custom(name) => name,
        }
    }
}

/// Typed animation parameters for one element, read at trigger time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub kind: AnimationKind,
    pub delay_ms: u32,
    /// `data-duration` override, when present and positive.
    pub duration_ms: Option<u32>,
    /// Counter starting value, from the element's current text.
    pub start_value: i64,
    /// Counter target, from `data-target` or else the element's text.
    pub target_value: i64,
    /// Progress bar width, always ending in `%`.
    pub target_width: String,
    /// Element children to cascade for stagger containers.
    pub child_count: usize,
}

impl Descriptor {
    #[must_use]
    pub fn read(snapshot: &ElementSnapshot) -> Self {
        let start_value = parse_leading_int(&snapshot.text).unwrap_or(0);
        let target_value = snapshot
            .attr(ATTR_TARGET)
            .and_then(parse_leading_int)
            .unwrap_or(start_value);
        let delay_ms = snapshot
            .attr(ATTR_DELAY)
            .and_then(parse_leading_int)
            .map_or(0, clamp_ms);
        let duration_ms = snapshot
            .attr(ATTR_DURATION)
            .and_then(parse_leading_int)
            .filter(|ms| *ms > 0)
            .map(clamp_ms);

        Self {
            kind: AnimationKind::resolve(snapshot),
            delay_ms,
            duration_ms,
            start_value,
            target_value,
            target_width: normalize_width(snapshot.attr(ATTR_WIDTH)),
            child_count: snapshot.child_count,
        }
    }
}

/// Parse an integer prefix the way HTML attribute values are usually read:
/// leading whitespace, an optional sign, then digits. Trailing text is ignored.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let Ok(magnitude) = rest[..digits_end].parse::<i64>() else {
        return None;
    };
    Some(if negative { -magnitude } else { magnitude })
}

fn clamp_ms(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
