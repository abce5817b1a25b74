//! Marks the nav link matching the current page path as active.

use web_sys::Document;

use crate::util::nav;

/// Compare each nav link against `location.pathname` once at load.
pub fn bind_all(document: &Document) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    super::for_each_element(document, ".navbar-nav .nav-link", |el| {
        if nav::is_active(el.get_attribute("href").as_deref(), &path) {
            let _ = el.class_list().add_1("active");
        }
    });
}
