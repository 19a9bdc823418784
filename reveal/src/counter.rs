//! Counter ramp state machine.
//!
//! A counter moves from its start value to its target in fixed steps of
//! `step_ms`, spread over `duration_ms`. [`CounterAnimation::step`] is the
//! single authority for the displayed value: it takes the elapsed time since
//! the ramp started and returns the text to show, so the host timer only has
//! to report how much time has passed.
//!
//! INVARIANTS
//! ==========
//! - The displayed value never passes the target.
//! - Once the target is reached the state is `Completed` and stays there.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Lifecycle of a counter ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterState {
    /// Created, no step taken yet.
    #[default]
    Scheduled,
    /// At least one step taken, target not yet reached.
    Running,
    /// Target reached; the repeating timer should stop.
    Completed,
}

/// Output of one counter step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    /// Value to display (floored).
    pub display: i64,
    /// True when this frame reached the target.
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    start: i64,
    target: i64,
    step_ms: u32,
    /// Value added per step: `(target - start) / (duration / step)`.
    increment: f64,
    /// Whole or fractional number of steps in the full duration.
    total_steps: f64,
    state: CounterState,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(start: i64, target: i64, duration_ms: u32, step_ms: u32) -> Self {
        let step_ms = step_ms.max(1);
        let steps = f64::from(duration_ms) / f64::from(step_ms);
        #[allow(clippy::cast_precision_loss)]
        let span = (target - start) as f64;
        let increment = if steps > 0.0 { span / steps } else { span };
        Self { start, target, step_ms, increment, total_steps: steps, state: CounterState::Scheduled }
    }

    #[must_use]
    pub fn state(&self) -> CounterState {
        self.state
    }

    #[must_use]
    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Advance to `elapsed_ms` since the ramp started and return the frame to display.
    ///
    /// Only whole steps count: the value after `n` steps is `start + n * increment`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn step(&mut self, elapsed_ms: f64) -> CounterFrame {
        if self.state == CounterState::Completed || self.start == self.target {
            self.state = CounterState::Completed;
            return CounterFrame { display: self.target, done: true };
        }

        let steps = (elapsed_ms.max(0.0) / f64::from(self.step_ms)).floor();
        let current = self.start as f64 + steps * self.increment;
        let crossed = if self.target >= self.start {
            current >= self.target as f64
        } else {
            current <= self.target as f64
        };

        if crossed || steps >= self.total_steps {
            self.state = CounterState::Completed;
            return CounterFrame { display: self.target, done: true };
        }

        self.state = CounterState::Running;
        let floored = current.floor() as i64;
        let display = if self.target >= self.start {
            floored.min(self.target)
        } else {
            floored.max(self.target)
        };
        CounterFrame { display, done: false }
    }
}
