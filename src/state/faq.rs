//! FAQ accordion: at most one item open.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Start with the item the markup already shows open.
    #[must_use]
    pub fn with_open(open: Option<usize>) -> Self {
        Self { open }
    }

    /// Question `index` clicked. Closes everything, then opens `index`
    /// unless it was the open one. Returns the item left open.
    pub fn click(&mut self, index: usize) -> Option<usize> {
        self.open = if self.open == Some(index) { None } else { Some(index) };
        self.open
    }

    #[must_use]
    pub fn open(self) -> Option<usize> {
        self.open
    }
}
