//! Required-field validation gate for `.needs-validation` forms.
//!
//! Uses the browser's built-in constraint check; a failing form never leaves
//! the page, and either way the form gains `was-validated` so the page's
//! validation styling becomes visible.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlFormElement};

/// Bind every opted-in form on the page.
pub fn bind_all(document: &Document) {
    super::for_each_element(document, "form.needs-validation", |el| {
        let Ok(form) = el.dyn_into::<HtmlFormElement>() else {
            return;
        };
        let target = form.clone();
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if !target.check_validity() {
                event.prevent_default();
                event.stop_propagation();
            }
            let _ = target.class_list().add_1("was-validated");
        });
        let _ = form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref());
        handler.forget();
    });
}
