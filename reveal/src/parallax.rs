//! Parallax layer: per-element speed factors and scroll-derived offsets.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use rand::Rng;

use crate::consts::{PARALLAX_FALLBACK_SPEED, PARALLAX_SPEED_MAX, PARALLAX_SPEED_MIN};
use crate::effect::{Effect, ElementId};

/// Elements moved vertically against the scroll direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParallaxLayer {
    elements: Vec<(ElementId, f64)>,
}

impl ParallaxLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with an already-resolved speed. Re-adding replaces the speed.
    pub fn insert(&mut self, id: ElementId, speed: f64) {
        if let Some(entry) = self.elements.iter_mut().find(|(existing, _)| *existing == id) {
            entry.1 = speed;
        } else {
            self.elements.push((id, speed));
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn speed(&self, id: ElementId) -> Option<f64> {
        self.elements.iter().find(|(existing, _)| *existing == id).map(|(_, speed)| *speed)
    }

    /// Transform writes for a scroll position.
    #[must_use]
    pub fn offsets(&self, position: f64) -> Vec<Effect> {
        self.elements
            .iter()
            .map(|(id, speed)| Effect::style(*id, "transform", translate_y(offset(position, *speed))))
            .collect()
    }

    /// Clear every transform (used before recomputing after a resize).
    #[must_use]
    pub fn reset(&self) -> Vec<Effect> {
        self.elements.iter().map(|(id, _)| Effect::style(*id, "transform", "")).collect()
    }
}

/// Resolve a `data-speed` attribute. Unparsable values use the fallback speed.
#[must_use]
pub fn parse_speed(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(speed) if speed.is_finite() && speed.abs() > f64::EPSILON => speed,
        _ => PARALLAX_FALLBACK_SPEED,
    }
}

/// Sample a speed for an element that declares none.
pub fn sample_speed<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(PARALLAX_SPEED_MIN..PARALLAX_SPEED_MAX)
}

/// Vertical offset for a scroll position and speed.
#[must_use]
pub fn offset(position: f64, speed: f64) -> f64 {
    -(position * speed)
}

fn translate_y(px: f64) -> String {
    let px = (px * 100.0).round() / 100.0;
    // Avoid "-0px".
    let px = if px.abs() < f64::EPSILON { 0.0 } else { px };
    format!("translateY({px}px)")
}
