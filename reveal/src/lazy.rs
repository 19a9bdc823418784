//! Lazy media: swap in `data-src` / `data-bg` once an element is visible.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

use crate::consts::{ATTR_LAZY_BG, ATTR_LAZY_SRC, CLASS_LOADED};
use crate::descriptor::ElementSnapshot;
use crate::effect::{Effect, ElementId};

/// Effects that load an element's deferred media. Empty when nothing applies.
#[must_use]
pub fn load_effects(id: ElementId, snapshot: &ElementSnapshot) -> Vec<Effect> {
    let mut effects = Vec::new();
    if snapshot.tag == "IMG"
        && let Some(src) = snapshot.attr(ATTR_LAZY_SRC).filter(|s| !s.is_empty())
    {
        effects.push(Effect::SetAttribute { id, name: "src", value: src.to_owned() });
    }
    if let Some(bg) = snapshot.attr(ATTR_LAZY_BG).filter(|s| !s.is_empty()) {
        effects.push(Effect::style(id, "background-image", format!("url({})", css_url(bg))));
    }
    if !effects.is_empty() {
        effects.push(Effect::add_class(id, CLASS_LOADED));
    }
    effects
}

/// Quote a URL for use inside `url(...)`.
fn css_url(raw: &str) -> String {
    format!("\"{}\"", raw.replace('\\', "\\\\").replace('"', "\\\""))
}
