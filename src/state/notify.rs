//! Toast notifications.
//!
//! One toast is visible at a time. Each toast gets a fresh id, and the timed
//! dismissal only touches the toast it was scheduled for, so a newer toast
//! is never removed by an older toast's timer.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Parse a kind name; unknown names are `Info`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Font Awesome icon class.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
            Self::Warning => "fa-exclamation-triangle",
            Self::Info => "fa-info-circle",
        }
    }

    /// Class list for the toast container.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    /// Plain text; the host inserts it as a text node.
    pub message: String,
}

/// Where the current toast is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Shown,
    Leaving,
}

#[derive(Debug)]
struct Current<R> {
    toast: Toast,
    phase: ToastPhase,
    attached: Option<R>,
}

/// Tracks the one visible toast and whatever the host attached to it.
///
/// Attached resources of a replaced or removed toast are parked in a
/// release list; the host drops them at a point where none of their
/// callbacks can be running.
#[derive(Debug)]
pub struct Toaster<R = ()> {
    current: Option<Current<R>>,
    released: Vec<R>,
}

impl<R> Default for Toaster<R> {
    fn default() -> Self {
        Self { current: None, released: Vec::new() }
    }
}

impl<R> Toaster<R> {
    /// Show a toast. Returns it with the id of the toast it replaces, if any.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> (Toast, Option<Uuid>) {
        let toast = Toast { id: Uuid::new_v4(), kind, message: message.into() };
        let next = Current { toast: toast.clone(), phase: ToastPhase::Shown, attached: None };
        let replaced = self.current.replace(next).map(|old| {
            self.released.extend(old.attached);
            old.toast.id
        });
        (toast, replaced)
    }

    /// Attach a host resource to toast `id`. A stale id sends it straight
    /// to the release list. Returns true if it was attached.
    pub fn attach(&mut self, id: Uuid, resource: R) -> bool {
        match &mut self.current {
            Some(current) if current.toast.id == id => {
                self.released.extend(current.attached.replace(resource));
                true
            }
            _ => {
                self.released.push(resource);
                false
            }
        }
    }

    /// Resource attached to toast `id`, if it is still current.
    pub fn attached_mut(&mut self, id: Uuid) -> Option<&mut R> {
        self.current.as_mut().filter(|current| current.toast.id == id)?.attached.as_mut()
    }

    /// Auto-dismiss timer fired for `id`. True if the exit animation should start.
    pub fn begin_exit(&mut self, id: Uuid) -> bool {
        match &mut self.current {
            Some(current) if current.toast.id == id && current.phase == ToastPhase::Shown => {
                current.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Remove toast `id` (exit finished or close clicked). True if it was current.
    pub fn remove(&mut self, id: Uuid) -> bool {
        if !self.current.as_ref().is_some_and(|current| current.toast.id == id) {
            return false;
        }
        if let Some(current) = self.current.take() {
            self.released.extend(current.attached);
        }
        true
    }

    /// Resources waiting to be dropped.
    #[must_use]
    pub fn released(&self) -> &[R] {
        &self.released
    }

    pub fn take_released(&mut self) -> Vec<R> {
        std::mem::take(&mut self.released)
    }

    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref().map(|current| &current.toast)
    }

    #[must_use]
    pub fn phase(&self) -> Option<ToastPhase> {
        self.current.as_ref().map(|current| current.phase)
    }
}
