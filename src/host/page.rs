//! Page behaviour wiring.
//!
//! Connects the state types in [`crate::state`] to the DOM: theme switch,
//! navigation, typing hero, project filter, contact form, FAQ, cookie
//! banner, loading screen, and the payment page.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::config::SiteConfig;
use crate::state::contact::{self, FieldInput, Validator};
use crate::state::cookie;
use crate::state::faq::Accordion;
use crate::state::nav::{self, NavMenu};
use crate::state::notify::ToastKind;
use crate::state::payment::{self, Checkout, CourseSelection};
use crate::state::projects::{FILTER_ALL, ProjectFilter};
use crate::state::theme::Theme;
use crate::state::typing::Typewriter;
use crate::util::storage::{self, Area};

use super::dom;
use super::toast::Toasts;

/// Page-wide state shared by listeners and the global functions.
pub struct Page {
    pub config: SiteConfig,
    pub toasts: Toasts,
    nav: RefCell<NavMenu>,
    projects: RefCell<ProjectFilter>,
    pub checkout: RefCell<Checkout>,
}

impl Page {
    pub fn new(config: SiteConfig) -> Rc<Self> {
        let toasts = Toasts::new(config.toast_ms, config.toast_exit_ms);
        Rc::new(Self {
            config,
            toasts,
            nav: RefCell::new(NavMenu::default()),
            projects: RefCell::new(ProjectFilter::default()),
            checkout: RefCell::new(Checkout::default()),
        })
    }

    /// Wire every widget present on the current page.
    pub fn init(self: &Rc<Self>) {
        self.init_theme();
        self.init_navigation();
        self.init_typing();
        self.init_contact_form();
        self.init_projects();
        self.init_faq();
        self.init_cookie_banner();
        self.hide_loading_screen();
        if on_payment_page() {
            self.init_payment();
        }
    }

    pub fn notify(&self, kind: ToastKind, message: &str) {
        self.toasts.show(kind, message);
    }

    fn hide_loading_screen(&self) {
        let Some(screen) = dom::by_id("loading-screen") else {
            return;
        };
        let remove_ms = self.config.loading_remove_ms;
        Timeout::new(self.config.loading_hide_ms, move || {
            dom::add_class(&screen, "hidden");
            Timeout::new(remove_ms, move || dom::set_style(&screen, "display", "none")).forget();
        })
        .forget();
    }

    // --- Theme ---

    fn init_theme(&self) {
        let key = self.config.storage.theme.clone();
        let theme = Theme::from_stored(storage::load(Area::Local, &key).as_deref());
        apply_theme(theme);

        let Some(switch) = dom::by_id("theme-switch").and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        switch.set_checked(theme.is_dark());
        let input = switch.clone();
        dom::listen(&switch, "change", move |_| {
            let theme = Theme::from_switch(input.checked());
            apply_theme(theme);
            storage::save(Area::Local, &key, theme.as_str());
        });
    }

    // --- Navigation ---

    fn init_navigation(self: &Rc<Self>) {
        let hamburger = dom::by_id("hamburger");
        let menu = dom::by_id("nav-menu");

        if let (Some(button), Some(_)) = (&hamburger, &menu) {
            let page = Rc::clone(self);
            dom::listen(button, "click", move |_| {
                page.nav.borrow_mut().toggle();
                page.render_nav();
            });
        }

        for link in dom::query_all(".nav-link") {
            let page = Rc::clone(self);
            dom::listen(&link, "click", move |_| page.close_nav());
        }

        if let Ok(window) = dom::window() {
            let page = Rc::clone(self);
            dom::listen(&window, "popstate", move |_| page.close_nav());

            if let Some(navbar) = dom::by_id("navbar") {
                dom::listen(&window, "scroll", move |_| {
                    let y = dom::window().ok().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    dom::set_class(&navbar, "scrolled", nav::navbar_scrolled(y));
                });
            }
        }

        for anchor in dom::query_all("a[href^=\"#\"]") {
            let link = anchor.clone();
            dom::listen(&anchor, "click", move |event: Event| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                let Some(target) = nav::anchor_target(&href).and_then(dom::query) else {
                    return;
                };
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            });
        }
    }

    fn close_nav(&self) {
        if self.nav.borrow_mut().close() {
            self.render_nav();
        }
    }

    fn render_nav(&self) {
        let menu = *self.nav.borrow();
        for id in ["nav-menu", "hamburger"] {
            if let Some(el) = dom::by_id(id) {
                dom::set_class(&el, "active", menu.is_open());
            }
        }
        if let Some(hamburger) = dom::by_id("hamburger") {
            for (bar, (property, value)) in dom::query_within(&hamburger, "span").iter().zip(menu.bars()) {
                dom::set_style(bar, property, value);
            }
        }
    }

    // --- Typing hero ---

    fn init_typing(&self) {
        let Some(el) = dom::by_id("typing-text") else {
            return;
        };
        let Some(writer) = Typewriter::new(&self.config.typing) else {
            log::warn!("typing: no phrases configured");
            return;
        };
        type_next(el, Rc::new(RefCell::new(writer)));
    }

    // --- Project filter ---

    fn init_projects(self: &Rc<Self>) {
        let buttons = Rc::new(dom::query_all(".filter-btn"));
        let cards = Rc::new(dom::query_all(".project-card"));
        for button in buttons.iter() {
            let page = Rc::clone(self);
            let buttons = Rc::clone(&buttons);
            let cards = Rc::clone(&cards);
            let clicked = button.clone();
            dom::listen(button, "click", move |_| {
                let filter = clicked.get_attribute("data-filter").unwrap_or_else(|| FILTER_ALL.to_owned());
                for other in buttons.iter() {
                    dom::remove_class(other, "active");
                }
                dom::add_class(&clicked, "active");
                page.filter_projects(&filter, &cards);
            });
        }
    }

    fn filter_projects(self: &Rc<Self>, filter: &str, cards: &Rc<Vec<Element>>) {
        let categories: Vec<Option<String>> = cards.iter().map(|card| card.get_attribute("data-category")).collect();
        let borrowed: Vec<Option<&str>> = categories.iter().map(Option::as_deref).collect();
        let plan = self.projects.borrow_mut().apply(filter, &borrowed);

        for &index in &plan.show {
            dom::remove_class(&cards[index], "hidden");
            dom::set_style(&cards[index], "display", "block");
        }
        for &index in &plan.hide {
            dom::add_class(&cards[index], "hidden");
        }

        let page = Rc::clone(self);
        let cards = Rc::clone(cards);
        Timeout::new(self.config.filter_hide_ms, move || {
            if !page.projects.borrow().is_current(plan.generation) {
                return;
            }
            for &index in &plan.hide {
                dom::set_style(&cards[index], "display", "none");
            }
        })
        .forget();
    }

    // --- Contact form ---

    fn init_contact_form(self: &Rc<Self>) {
        let Some(form) = dom::by_id("contact-form") else {
            return;
        };
        let validator = match Validator::new() {
            Ok(validator) => Rc::new(validator),
            Err(err) => {
                log::warn!("contact: validation unavailable: {err}");
                return;
            }
        };

        for control in dom::query_within(&form, "input, textarea, select") {
            let field = control.clone();
            let rules = Rc::clone(&validator);
            dom::listen(&control, "blur", move |_| {
                validate_control(&rules, &field);
            });
            let field = control.clone();
            dom::listen(&control, "input", move |_| clear_field_error(&field));
        }

        let page = Rc::clone(self);
        let target = form.clone();
        dom::listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            page.submit_contact(&validator, &target);
        });
    }

    fn submit_contact(&self, validator: &Validator, form: &Element) {
        let mut valid = true;
        for control in dom::query_within(form, "input[required], textarea[required]") {
            valid &= validate_control(validator, &control);
        }
        if !valid {
            self.notify(ToastKind::Error, contact::SUBMIT_INVALID);
            return;
        }

        let Some(button) = dom::query_within(form, "button[type=\"submit\"]")
            .into_iter()
            .next()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        else {
            return;
        };
        let original = button.inner_html();
        dom::set_text(&button, contact::SENDING_LABEL);
        button.set_disabled(true);

        let toasts = self.toasts.clone();
        let form = form.clone();
        Timeout::new(self.config.contact_submit_ms, move || {
            toasts.show(ToastKind::Success, contact::SUBMIT_SENT);
            if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
                form.reset();
            }
            button.set_inner_html(&original);
            button.set_disabled(false);
        })
        .forget();
    }

    // --- FAQ ---

    fn init_faq(&self) {
        let items = Rc::new(dom::query_all(".faq-item"));
        let open = items.iter().position(|item| item.class_list().contains("active"));
        let accordion = Rc::new(RefCell::new(Accordion::with_open(open)));

        for (index, item) in items.iter().enumerate() {
            let Some(question) = dom::query_within(item, ".faq-question").into_iter().next() else {
                continue;
            };
            let items = Rc::clone(&items);
            let accordion = Rc::clone(&accordion);
            dom::listen(&question, "click", move |_| {
                let open = accordion.borrow_mut().click(index);
                for (i, item) in items.iter().enumerate() {
                    dom::set_class(item, "active", open == Some(i));
                }
            });
        }
    }

    // --- Cookie banner ---

    fn init_cookie_banner(&self) {
        let Some(banner) = dom::by_id("cookie-banner") else {
            return;
        };
        let stored = storage::load(Area::Local, &self.config.storage.cookie_consent);
        if !cookie::should_show(stored.as_deref()) {
            return;
        }
        Timeout::new(self.config.cookie_banner_delay_ms, move || dom::add_class(&banner, "show")).forget();
    }

    pub fn accept_cookies(&self) {
        storage::save(Area::Local, &self.config.storage.cookie_consent, cookie::CONSENT_ACCEPTED);
        if let Some(banner) = dom::by_id("cookie-banner") {
            dom::remove_class(&banner, "show");
        }
        self.notify(ToastKind::Success, cookie::SAVED_MESSAGE);
    }

    pub fn manage_cookies(&self) {
        self.notify(ToastKind::Info, cookie::MANAGE_MESSAGE);
        self.accept_cookies();
    }

    // --- Payment page ---

    fn init_payment(self: &Rc<Self>) {
        let selection: Option<CourseSelection> =
            storage::load_json(Area::Session, &self.config.storage.selected_course);
        if let Some(selection) = &selection {
            if let Some(title) = dom::by_id("course-title") {
                dom::set_text(&title, &selection.name);
            }
            if let (Some(subtotal), Some(total)) = (dom::by_id("subtotal"), dom::by_id("total-amount")) {
                dom::set_text(&subtotal, &selection.price_label());
                dom::set_text(&total, &selection.price_label());
            }
        }
        *self.checkout.borrow_mut() = Checkout::new(selection);

        let options = Rc::new(dom::query_all(".payment-option"));
        for (index, option) in options.iter().enumerate() {
            let Some(header) = dom::query_within(option, ".payment-header").into_iter().next() else {
                continue;
            };
            let page = Rc::clone(self);
            let options = Rc::clone(&options);
            dom::listen(&header, "click", move |_| {
                page.checkout.borrow_mut().select_option(index);
                for (i, option) in options.iter().enumerate() {
                    dom::set_class(option, "active", i == index);
                }
            });
        }

        for button in dom::query_all(".upi-app-btn") {
            let page = Rc::clone(self);
            dom::listen(&button, "click", move |_| page.open_upi_app());
        }

        if let Ok(window) = dom::window() {
            let page = Rc::clone(self);
            dom::listen(&window, "click", move |event: Event| {
                let Some(modal) = dom::by_id("payment-modal") else {
                    return;
                };
                if event.target().is_some_and(|target| js_sys::Object::is(&target, &modal)) {
                    page.close_modal();
                }
            });
        }
    }

    fn open_upi_app(&self) {
        let amount = payment::amount(self.checkout.borrow().selection.as_ref(), self.config.default_price);
        let url = payment::upi_url(&self.config.upi_id, amount);
        if let Ok(window) = dom::window() {
            dom::warn_on_err("open upi app", window.location().set_href(&url));
        }
        let toasts = self.toasts.clone();
        Timeout::new(self.config.upi_hint_ms, move || toasts.show(ToastKind::Info, payment::UPI_HINT)).forget();
    }

    pub fn close_modal(&self) {
        if let Some(modal) = dom::by_id("payment-modal") {
            dom::remove_class(&modal, "show");
            if let Ok(body) = dom::body() {
                dom::set_style(&body, "overflow", "auto");
            }
        }
    }

    pub fn show_payment_success(&self) {
        if let Some(modal) = dom::by_id("payment-modal") {
            dom::add_class(&modal, "show");
            if let Ok(body) = dom::body() {
                dom::set_style(&body, "overflow", "hidden");
            }
        }
    }
}

fn apply_theme(theme: Theme) {
    let Ok(body) = dom::body() else {
        return;
    };
    match theme.body_attribute() {
        Some(value) => dom::set_attr(&body, "data-theme", value),
        None => dom::warn_on_err("clear theme", body.remove_attribute("data-theme")),
    }
}

fn type_next(el: Element, writer: Rc<RefCell<Typewriter>>) {
    let frame = writer.borrow_mut().tick();
    dom::set_text(&el, &frame.text);
    Timeout::new(frame.next_ms, move || type_next(el, writer)).forget();
}

fn on_payment_page() -> bool {
    dom::window()
        .ok()
        .and_then(|w| w.location().pathname().ok())
        .is_some_and(|path| path.contains(payment::PAYMENT_PAGE))
}

/// Current value of an input, textarea, or select.
fn control_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Validate one control and render the outcome. Returns true when valid.
fn validate_control(validator: &Validator, el: &Element) -> bool {
    let name = el.get_attribute("name").unwrap_or_default();
    let value = control_value(el);
    clear_field_error(el);
    let field = FieldInput { name: &name, value: &value, required: el.has_attribute("required") };
    match validator.validate(&field) {
        Ok(()) => true,
        Err(err) => {
            if let Some(slot) = dom::by_id(&contact::error_slot_id(&name)) {
                dom::set_text(&slot, &err.to_string());
            }
            dom::add_class(el, "error");
            false
        }
    }
}

fn clear_field_error(el: &Element) {
    let name = el.get_attribute("name").unwrap_or_default();
    if let Some(slot) = dom::by_id(&contact::error_slot_id(&name)) {
        dom::set_text(&slot, "");
    }
    dom::remove_class(el, "error");
}
