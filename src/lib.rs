//! # folio
//!
//! Client-side interactivity for a static portfolio site, compiled to
//! WebAssembly. The scroll-reveal machinery lives in the browser-free
//! [`reveal`] crate; this crate holds the page behaviours (theme, navigation,
//! typing hero, project filter, contact form, simulated payment, FAQ, cookie
//! banner, toasts) as plain state types, and a `hydrate`-gated host that wires
//! them to the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | [`config::SiteConfig`], read from the page's JSON island |
//! | [`state`] | Browser-free page behaviour state machines |
//! | [`util`] | Storage helpers shared by the host |
//! | `host` | DOM wiring, observers, timers (`hydrate` only) |

pub mod config;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod host;

/// WebAssembly entry point: runs once when the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    host::boot();
}
