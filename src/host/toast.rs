//! Toast rendering.
//!
//! [`Toaster`] decides which toast is current and owns the DOM handles of
//! the visible one; this module only builds and removes them. Messages go
//! in as text nodes.
//!
//! A toast's close listener and timers are dropped on the next `show`, never
//! from inside their own callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event};

use crate::state::notify::{Toast, ToastKind, Toaster};

use super::dom::{self, DomError};

const TOAST_CSS: &str = "position: fixed; top: 100px; right: 20px; background: var(--bg-primary); \
     border: 1px solid var(--border-color); border-radius: var(--radius-lg); padding: var(--spacing-md); \
     box-shadow: 0 10px 30px var(--shadow-light); z-index: var(--z-tooltip); max-width: 400px; \
     backdrop-filter: blur(10px); animation: slideInRight 0.3s ease;";

const EXIT_ANIMATION: &str = "slideOutRight 0.3s ease";

/// DOM handles of one rendered toast.
struct Shown {
    element: Element,
    on_close: Option<Closure<dyn FnMut(Event)>>,
    timer: Option<Timeout>,
}

#[derive(Default)]
struct Shelf {
    toaster: Toaster<Shown>,
    /// Timers that already fired, kept until the next `show`.
    spent: Vec<Timeout>,
}

/// Shows at most one toast at a time.
#[derive(Clone)]
pub struct Toasts {
    shelf: Rc<RefCell<Shelf>>,
    visible_ms: u32,
    exit_ms: u32,
}

impl Toasts {
    pub fn new(visible_ms: u32, exit_ms: u32) -> Self {
        Self { shelf: Rc::new(RefCell::new(Shelf::default())), visible_ms, exit_ms }
    }

    pub fn show(&self, kind: ToastKind, message: &str) {
        let (toast, released, spent) = {
            let mut shelf = self.shelf.borrow_mut();
            let (toast, _) = shelf.toaster.show(kind, message);
            let released = shelf.toaster.take_released();
            (toast, released, std::mem::take(&mut shelf.spent))
        };
        for old in &released {
            old.element.remove();
        }
        drop(released);
        drop(spent);

        let element = match render(&toast) {
            Ok(element) => element,
            Err(err) => {
                log::warn!("toast: cannot render `{}`: {err}", toast.message);
                return;
            }
        };

        let id = toast.id;
        let on_close = dom::query_within(&element, ".notification-close").into_iter().next().map(|close| {
            let toasts = self.clone();
            dom::listen_owned(&close, "click", move |_| toasts.remove(id))
        });
        let toasts = self.clone();
        let timer = Timeout::new(self.visible_ms, move || toasts.begin_exit(id));

        let shown = Shown { element, on_close, timer: Some(timer) };
        self.shelf.borrow_mut().toaster.attach(id, shown);
    }

    /// Runs inside the visible timer's callback, so that timer is parked.
    fn begin_exit(&self, id: Uuid) {
        let toasts = self.clone();
        let next = Timeout::new(self.exit_ms, move || toasts.remove(id));

        let mut shelf = self.shelf.borrow_mut();
        if !shelf.toaster.begin_exit(id) {
            return;
        }
        let Shelf { toaster, spent } = &mut *shelf;
        if let Some(shown) = toaster.attached_mut(id) {
            dom::set_style(&shown.element, "animation", EXIT_ANIMATION);
            spent.extend(shown.timer.replace(next));
        }
    }

    /// Detach the element now; its closures go to the release list.
    fn remove(&self, id: Uuid) {
        let mut shelf = self.shelf.borrow_mut();
        if !shelf.toaster.remove(id) {
            return;
        }
        for shown in shelf.toaster.released() {
            shown.element.remove();
        }
    }
}

fn render(toast: &Toast) -> Result<Element, DomError> {
    let document = dom::document()?;
    let root = create(&document, "div", &toast.kind.class_name())?;
    dom::set_attr(&root, "style", TOAST_CSS);

    let content = create(&document, "div", "notification-content")?;
    let icon = create(&document, "i", &format!("fas {}", toast.kind.icon()))?;
    let text = document.create_element("span")?;
    dom::set_text(&text, &toast.message);
    let close = create(&document, "button", "notification-close")?;
    let close_icon = create(&document, "i", "fas fa-times")?;
    close.append_child(&close_icon)?;

    content.append_child(&icon)?;
    content.append_child(&text)?;
    content.append_child(&close)?;
    root.append_child(&content)?;
    dom::body()?.append_child(&root)?;
    Ok(root)
}

fn create(document: &Document, tag: &str, class: &str) -> Result<Element, DomError> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    Ok(el)
}
