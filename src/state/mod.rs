//! Page behaviour state, kept free of DOM types.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module models one interactive widget as a small state machine whose
//! outputs (class toggles, text, timings, messages) the `hydrate` host applies.
//! Keeping them browser-free lets the rules be tested natively.

pub mod contact;
pub mod cookie;
pub mod faq;
pub mod nav;
pub mod notify;
pub mod payment;
pub mod projects;
pub mod theme;
pub mod typing;
