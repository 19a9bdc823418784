//! Static hover lift presets for cards, buttons, and links.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

use crate::descriptor::ElementSnapshot;

/// Enter/leave inline styles for one family of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverPreset {
    pub selector: &'static str,
    pub enter: &'static [(&'static str, &'static str)],
    pub leave: &'static [(&'static str, &'static str)],
    /// Elements with this class are left alone.
    pub skip_class: Option<&'static str>,
}

impl HoverPreset {
    /// Whether the preset applies to a concrete element.
    #[must_use]
    pub fn applies_to(&self, snapshot: &ElementSnapshot) -> bool {
        self.skip_class.is_none_or(|class| !snapshot.has_class(class))
    }
}

pub const HOVER_PRESETS: [HoverPreset; 4] = [
    HoverPreset {
        selector: ".service-card, .project-card, .course-card, .testimonial-card",
        enter: &[
            ("transform", "translateY(-10px) scale(1.02)"),
            ("transition", "all 0.3s cubic-bezier(0.25, 0.46, 0.45, 0.94)"),
        ],
        leave: &[("transform", "translateY(0) scale(1)")],
        skip_class: None,
    },
    HoverPreset {
        selector: ".btn",
        enter: &[("transform", "translateY(-2px)"), ("box-shadow", "0 8px 25px rgba(99, 102, 241, 0.4)")],
        leave: &[("transform", "translateY(0)"), ("box-shadow", "")],
        skip_class: Some("btn-outline"),
    },
    HoverPreset {
        selector: ".social-links a, .social-link",
        enter: &[("transform", "translateY(-3px) scale(1.1)"), ("transition", "all 0.3s ease")],
        leave: &[("transform", "translateY(0) scale(1)")],
        skip_class: None,
    },
    HoverPreset {
        selector: ".nav-link",
        enter: &[("transform", "translateY(-2px)"), ("transition", "all 0.2s ease")],
        leave: &[("transform", "translateY(0)")],
        skip_class: None,
    },
];
