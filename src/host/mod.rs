//! Browser host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here touches `web_sys`. [`boot`] reads the config island,
//! sets up logging, applies the motion policy, then hands the page to the
//! reveal host and the page behaviours. All listeners and timers live for
//! the life of the page.

pub mod dom;
pub mod globals;
pub mod page;
pub mod reveal_host;
pub mod toast;

use reveal::motion::{self, MotionPolicy};
use web_sys::Event;

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};

use self::page::Page;
use self::reveal_host::RevealHost;

pub fn boot() {
    console_error_panic_hook::set_once();

    let (config, config_error) = load_config();
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }
    if let Some(err) = config_error {
        log::warn!("config: {err}; using defaults");
    }

    apply_motion_policy();
    pause_when_hidden();

    let host = RevealHost::new(config.reveal.clone(), seed());
    host.scan();
    host.listen();
    host.intro();

    let page = Page::new(config);
    page.init();
    globals::install(&page);
    log::info!("folio: booted");
}

fn load_config() -> (SiteConfig, Option<crate::config::SiteConfigError>) {
    let Some(raw) = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return (SiteConfig::default(), None);
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn apply_motion_policy() {
    let Ok(window) = dom::window() else {
        return;
    };
    let cores = window.navigator().hardware_concurrency();
    let cores = (cores >= 1.0).then_some(cores as u32);
    let reduced = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());
    let policy = MotionPolicy::detect(cores, reduced);
    log::debug!("motion: {policy:?}");

    if let Some(root) = dom::document().ok().and_then(|doc| doc.document_element()) {
        for (property, value) in policy.css_overrides() {
            dom::set_style(&root, property, value);
        }
    }
    if let Some(css) = policy.stylesheet() {
        inject_stylesheet(css);
    }
}

fn inject_stylesheet(css: &str) {
    let Ok(document) = dom::document() else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };
    match document.create_element("style") {
        Ok(style) => {
            dom::set_text(&style, css);
            dom::warn_on_err("inject stylesheet", head.append_child(&style));
        }
        Err(err) => log::warn!("motion: cannot create stylesheet: {}", dom::DomError::from(err)),
    }
}

fn pause_when_hidden() {
    let Ok(document) = dom::document() else {
        return;
    };
    let doc = document.clone();
    dom::listen(&document, "visibilitychange", move |_: Event| {
        let state = motion::play_state(doc.hidden());
        for el in dom::query_all("*") {
            dom::set_style(&el, "animation-play-state", state);
        }
    });
}

fn seed() -> u64 {
    js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits()
}
