//! Hover-driven shape morphing.
//!
//! Pointer-enter starts a repeating timer that writes a random border radius;
//! pointer-leave cancels it and clears the radius. This is the only effect
//! that owns a cancelable timer tied to pointer state.

#[cfg(test)]
#[path = "morph_test.rs"]
mod morph_test;

use std::collections::HashMap;

use rand::Rng;

use crate::effect::{Effect, ElementId, TimerId};

/// Border-radius percentages are drawn from `MIN..MAX`.
const RADIUS_MIN_PCT: u32 = 25;
const RADIUS_MAX_PCT: u32 = 75;

/// Tracks the live morph timer per hovered element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Morpher {
    active: HashMap<ElementId, TimerId>,
    interval_ms: u32,
}

impl Morpher {
    #[must_use]
    pub fn new(interval_ms: u32) -> Self {
        Self { active: HashMap::new(), interval_ms }
    }

    /// Start morphing `id` on `timer`. No-op if already morphing.
    pub fn enter(&mut self, id: ElementId, timer: TimerId) -> Vec<Effect> {
        if self.active.contains_key(&id) {
            return Vec::new();
        }
        self.active.insert(id, timer);
        vec![Effect::StartInterval { timer, interval_ms: self.interval_ms }]
    }

    /// Stop morphing `id`.
    pub fn leave(&mut self, id: ElementId) -> Vec<Effect> {
        let Some(timer) = self.active.remove(&id) else {
            return Vec::new();
        };
        vec![Effect::CancelTimer { timer }, Effect::style(id, "border-radius", "")]
    }

    #[must_use]
    pub fn is_active(&self, id: ElementId) -> bool {
        self.active.contains_key(&id)
    }

    /// The element a live morph timer belongs to.
    #[must_use]
    pub fn owner(&self, timer: TimerId) -> Option<ElementId> {
        self.active.iter().find(|(_, t)| **t == timer).map(|(id, _)| *id)
    }
}

/// Eight random percentages in elliptical border-radius form.
pub fn random_border_radius<R: Rng + ?Sized>(rng: &mut R) -> String {
    let v: Vec<u32> = (0..8).map(|_| rng.random_range(RADIUS_MIN_PCT..RADIUS_MAX_PCT)).collect();
    format!(
        "{}% {}% {}% {}% / {}% {}% {}% {}%",
        v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7]
    )
}
