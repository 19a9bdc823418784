//! Typing hero: types a phrase, holds, deletes it, moves to the next.
//!
//! Positions count characters, so multi-byte phrases never split a code point.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::config::TypingConfig;

/// Text to show now and how long to wait before the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub next_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    shown: usize,
    deleting: bool,
    type_ms: u32,
    delete_ms: u32,
    hold_ms: u32,
    next_ms: u32,
}

impl Typewriter {
    /// Build from config. Blank phrases are dropped; `None` if none remain.
    #[must_use]
    pub fn new(config: &TypingConfig) -> Option<Self> {
        let phrases: Vec<Vec<char>> = config
            .phrases
            .iter()
            .filter(|p| !p.trim().is_empty())
            .map(|p| p.chars().collect())
            .collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            phrase: 0,
            shown: 0,
            deleting: false,
            type_ms: config.type_ms,
            delete_ms: config.delete_ms,
            hold_ms: config.hold_ms,
            next_ms: config.next_ms,
        })
    }

    /// Advance one character.
    pub fn tick(&mut self) -> TypingFrame {
        let len = self.phrases[self.phrase].len();
        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
        } else {
            self.shown = (self.shown + 1).min(len);
        }
        let text: String = self.phrases[self.phrase][..self.shown].iter().collect();

        let next_ms = if !self.deleting && self.shown == len {
            self.deleting = true;
            self.hold_ms
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            self.next_ms
        } else if self.deleting {
            self.delete_ms
        } else {
            self.type_ms
        };
        TypingFrame { text, next_ms }
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }
}
