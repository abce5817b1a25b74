//! Page bootstrap: logger and panic hook setup, DOM-ready gate, and one
//! binding pass over every widget.
//!
//! Control flow is entirely event-driven from here on: each binder attaches
//! its listeners once and nothing polls afterwards. Binders share no state
//! except the persisted theme flag behind its settings store.

/// WASM entry point, invoked by the module loader.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    on_dom_ready(init);
}

/// Run `f` once the document is parsed. The module may load before or after
/// `DOMContentLoaded` depending on how the script tag is emitted.
#[cfg(feature = "web")]
fn on_dom_ready(f: fn()) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let handler = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::Event)>::new(
            move |_: web_sys::Event| f(),
        );
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", handler.as_ref().unchecked_ref());
        handler.forget();
    } else {
        f();
    }
}

/// Single binding pass over the page. Widgets whose elements are absent
/// no-op, so any subset of them may be present on a given page.
#[cfg(feature = "web")]
fn init() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    log::debug!("binding page widgets");

    crate::util::vendor::prism_init_line_numbers();
    crate::util::vendor::init_overlays(&document);

    crate::widgets::comment_form::bind_all(&document);
    crate::widgets::preview::bind_all(&document);
    crate::widgets::theme_toggle::bind(&document);
    crate::widgets::validation::bind_all(&document);
    crate::widgets::autosize::bind_all(&document);
    crate::widgets::confirm_delete::bind_all(&document);
    crate::widgets::nav_links::bind_all(&document);
    crate::widgets::fade_in::bind_all(&document);
}
