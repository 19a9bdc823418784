//! Functions the markup calls from inline `onclick` / `onchange` handlers.
//!
//! Each one is a closure installed as a property of `window`, so the names
//! must match the HTML exactly.

use std::rc::Rc;

use js_sys::{Function, Reflect};
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, FileReader, HtmlInputElement};

use crate::state::notify::ToastKind;
use crate::state::payment::{self, CourseSelection};
use crate::util::storage::{self, Area};

use super::dom::{self, DomError};
use super::page::Page;

/// Install every global on `window`.
pub fn install(page: &Rc<Page>) {
    let page = Rc::clone(page);
    let Ok(window) = dom::window() else {
        return;
    };

    let p = Rc::clone(&page);
    export(&window, "buyNow", Closure::<dyn FnMut(JsValue, JsValue, JsValue)>::new(move |id, name, price| {
        buy_now(&p, &id, &name, &price);
    }));

    let p = Rc::clone(&page);
    export(&window, "copyUPIId", Closure::<dyn FnMut()>::new(move || copy_upi_id(&p)));

    let p = Rc::clone(&page);
    export(&window, "handleFileUpload", Closure::<dyn FnMut(Event)>::new(move |event| handle_file_upload(&p, &event)));

    let p = Rc::clone(&page);
    export(&window, "openRazorpay", Closure::<dyn FnMut()>::new(move || {
        let paise = payment::amount_paise(p.checkout.borrow().selection.as_ref(), p.config.default_price);
        log::info!("payment: gateway checkout requested for {paise} paise");
        p.notify(ToastKind::Info, payment::GATEWAY_DEMO);
    }));

    let p = Rc::clone(&page);
    export(&window, "completePayment", Closure::<dyn FnMut()>::new(move || {
        let result = p.checkout.borrow().complete();
        match result {
            Ok(()) => p.show_payment_success(),
            Err(err) => p.notify(ToastKind::Error, &err.to_string()),
        }
    }));

    let p = Rc::clone(&page);
    export(&window, "closeModal", Closure::<dyn FnMut()>::new(move || p.close_modal()));

    let p = Rc::clone(&page);
    export(&window, "acceptCookies", Closure::<dyn FnMut()>::new(move || p.accept_cookies()));

    export(&window, "manageCookies", Closure::<dyn FnMut()>::new(move || page.manage_cookies()));
}

fn export<F: ?Sized + WasmClosure>(window: &web_sys::Window, name: &str, closure: Closure<F>) {
    dom::warn_on_err(name, Reflect::set(window, &JsValue::from_str(name), closure.as_ref()));
    closure.forget();
}

fn buy_now(page: &Page, id: &JsValue, name: &JsValue, price: &JsValue) {
    let price = price
        .as_f64()
        .or_else(|| price.as_string().and_then(|raw| raw.trim().parse().ok()))
        .unwrap_or(page.config.default_price);
    let selection = CourseSelection {
        id: id.as_string().unwrap_or_default(),
        name: name.as_string().unwrap_or_default(),
        price,
        timestamp: js_sys::Date::now(),
    };
    log::info!("payment: selected course `{}` at {}", selection.id, selection.price_label());
    storage::save_json(Area::Session, &page.config.storage.selected_course, &selection);

    if let Ok(window) = dom::window() {
        dom::warn_on_err("open payment page", window.location().set_href(payment::PAYMENT_PAGE));
    }
}

fn copy_upi_id(page: &Page) {
    let value = dom::query(".upi-id-input input")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map_or_else(|| page.config.upi_id.clone(), |input| input.value());
    match write_clipboard(&value) {
        Ok(()) => page.notify(ToastKind::Success, payment::UPI_COPIED),
        Err(err) => log::warn!("payment: clipboard unavailable: {err}"),
    }
}

/// `navigator.clipboard.writeText(text)`; the returned promise is not awaited.
fn write_clipboard(text: &str) -> Result<(), DomError> {
    let navigator = dom::window()?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?;
    let write = write.dyn_into::<Function>().map_err(DomError::from)?;
    write.call1(&clipboard, &JsValue::from_str(text))?;
    Ok(())
}

fn handle_file_upload(page: &Rc<Page>, event: &Event) {
    let Some(file) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
    else {
        return;
    };

    let accepted = page.checkout.borrow_mut().upload(&file.type_());
    if let Err(err) = accepted {
        page.notify(ToastKind::Error, &err.to_string());
        return;
    }

    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(err) => {
            log::warn!("payment: cannot read upload: {}", DomError::from(err));
            return;
        }
    };
    let done = reader.clone();
    let p = Rc::clone(page);
    dom::listen(&reader, "load", move |_| {
        if let Some(url) = done.result().ok().and_then(|result| result.as_string()) {
            show_preview(&url);
        }
        p.notify(ToastKind::Success, payment::UPLOAD_OK);
    });
    dom::warn_on_err("read upload", reader.read_as_data_url(&file));
}

fn show_preview(url: &str) {
    let Some(preview) = dom::by_id("upload-preview") else {
        return;
    };
    let image = match dom::document().and_then(|doc| doc.create_element("img").map_err(DomError::from)) {
        Ok(image) => image,
        Err(err) => {
            log::warn!("payment: cannot build preview: {err}");
            return;
        }
    };
    dom::set_attr(&image, "src", url);
    dom::set_attr(&image, "alt", "Payment Screenshot");
    dom::set_style(&image, "max-width", "100%");
    preview.set_text_content(None);
    dom::warn_on_err("show preview", preview.append_child(&image));
    dom::set_style(&preview, "display", "block");
}
