//! Mobile navigation menu and navbar chrome.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Navbar gains the `scrolled` class past this offset.
pub const SCROLLED_OFFSET_PX: f64 = 100.0;

/// Inline style for each of the hamburger's three bars.
pub type BarPose = [(&'static str, &'static str); 3];

pub const BARS_OPEN: BarPose = [
    ("transform", "rotate(45deg) translate(5px, 5px)"),
    ("opacity", "0"),
    ("transform", "rotate(-45deg) translate(7px, -6px)"),
];

pub const BARS_CLOSED: BarPose = [("transform", "none"), ("opacity", "1"), ("transform", "none")];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger click. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Nav link click or history navigation. Returns true if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    #[must_use]
    pub fn bars(self) -> BarPose {
        if self.open { BARS_OPEN } else { BARS_CLOSED }
    }
}

#[must_use]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_OFFSET_PX
}

/// Selector for an in-page anchor's target, or `None` for a bare `#` or an
/// external link.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}
