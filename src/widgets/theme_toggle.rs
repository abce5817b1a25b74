//! Dark-mode toggle: navbar button, body class, icon swap, persisted flag.
//!
//! The toggle button is injected into `.navbar-nav` when the page does not
//! already carry one, matching the markup the original pages expect. The
//! persisted preference is read once at bind time and re-applied so the
//! visual state survives reloads without a click.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element};

use crate::state::settings::LocalStore;
use crate::state::theme;

const TOGGLE_ID: &str = "dark-mode-toggle";

/// Bind the theme toggle, injecting it into the navbar first if needed.
/// No-op on pages without a navbar or toggle.
pub fn bind(document: &Document) {
    ensure_toggle(document);
    let Some(toggle_el) = document.get_element_by_id(TOGGLE_ID) else {
        return;
    };

    let store = LocalStore;
    let dark = theme::read_preference(&store);
    if dark {
        apply(document, &toggle_el, true);
    }

    let state = Rc::new(Cell::new(dark));
    let doc = document.clone();
    let el = toggle_el.clone();
    let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        let next = theme::toggle(&store, state.get());
        state.set(next);
        apply(&doc, &el, next);
    });
    let _ =
        toggle_el.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
    handler.forget();
}

/// Inject the toggle button into the navbar when the page lacks one.
fn ensure_toggle(document: &Document) {
    if document.get_element_by_id(TOGGLE_ID).is_some() {
        return;
    }
    let Ok(Some(navbar)) = document.query_selector(".navbar-nav") else {
        return;
    };
    let Ok(item) = document.create_element("li") else {
        return;
    };
    item.set_class_name("nav-item");
    item.set_inner_html(concat!(
        "<button id=\"dark-mode-toggle\" class=\"btn nav-link\">",
        "<i class=\"bi bi-moon\"></i>",
        "</button>",
    ));
    let _ = navbar.append_child(&item);
}

/// Sync the body class and indicator icon with the flag.
fn apply(document: &Document, toggle_el: &Element, dark: bool) {
    if let Some(body) = document.body() {
        let classes = body.class_list();
        let _ = if dark {
            classes.add_1("dark-mode")
        } else {
            classes.remove_1("dark-mode")
        };
    }
    if let Ok(Some(icon)) = toggle_el.query_selector("i") {
        let classes = icon.class_list();
        if dark {
            let _ = classes.remove_1("bi-moon");
            let _ = classes.add_1("bi-sun");
        } else {
            let _ = classes.remove_1("bi-sun");
            let _ = classes.add_1("bi-moon");
        }
    }
}
