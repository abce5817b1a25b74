//! Confirmation gate for `.confirm-delete` controls.
//!
//! A declined prompt suppresses the default action and nothing else; that is
//! expected user intent, not a failure.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

const CONFIRM_MESSAGE: &str =
    "Are you sure you want to delete this? This action cannot be undone.";

/// Bind every delete control on the page.
pub fn bind_all(document: &Document) {
    super::for_each_element(document, ".confirm-delete", |el| {
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(CONFIRM_MESSAGE).ok())
                .unwrap_or(false);
            if !confirmed {
                event.prevent_default();
            }
        });
        let _ = el.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        handler.forget();
    });
}
