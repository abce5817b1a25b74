//! Auto-grow for `textarea.auto-resize` elements.
//!
//! On every input the height resets to `auto` and is re-measured to the
//! content's scroll height, so the textarea grows without ever showing an
//! internal scrollbar. The same resize runs once at bind time to size
//! pre-filled content.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlTextAreaElement};

/// Bind every auto-resize textarea on the page.
pub fn bind_all(document: &Document) {
    super::for_each_element(document, "textarea.auto-resize", |el| {
        let Ok(textarea) = el.dyn_into::<HtmlTextAreaElement>() else {
            return;
        };
        let target = textarea.clone();
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            resize(&target);
        });
        let _ =
            textarea.add_event_listener_with_callback("input", handler.as_ref().unchecked_ref());
        handler.forget();

        resize(&textarea);
    });
}

fn resize(textarea: &HtmlTextAreaElement) {
    let style = textarea.style();
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &format!("{}px", textarea.scroll_height()));
}
