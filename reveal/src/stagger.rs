//! Stagger timing for cascading child reveals and split-text glyphs.

#[cfg(test)]
#[path = "stagger_test.rs"]
mod stagger_test;

use crate::effect::Glyph;

/// Per-glyph transition delay for split text, in seconds.
pub const GLYPH_DELAY_SECS: f64 = 0.05;

/// Initial style of a glyph span before its reveal.
pub const HIDDEN_GLYPH_STYLES: [(&str, &str); 2] = [("opacity", "0"), ("transform", "translateY(20px)")];

/// Style written to a revealed stagger child or glyph.
pub const VISIBLE_STYLES: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// Delay before child `index` becomes visible.
#[must_use]
pub fn child_offset_ms(index: usize, stagger_delay_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_delay_ms)
}

/// Split text into one glyph per character with increasing delays.
///
/// Spaces become non-breaking spaces so the spans keep their width.
#[must_use]
pub fn split_glyphs(text: &str) -> Vec<Glyph> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| {
            let text = if ch == ' ' { '\u{a0}'.to_string() } else { ch.to_string() };
            #[allow(clippy::cast_precision_loss)]
            let delay_secs = index as f64 * GLYPH_DELAY_SECS;
            Glyph { text, delay_secs }
        })
        .collect()
}

/// CSS `transition` for one glyph.
#[must_use]
pub fn glyph_transition(glyph: &Glyph) -> String {
    format!("all 0.3s ease {}s", format_secs(glyph.delay_secs))
}

fn format_secs(secs: f64) -> String {
    let rounded = (secs * 1000.0).round() / 1000.0;
    format!("{rounded}")
}
