//! Fade-in reveal: marks `.fade-in` elements visible at load. The transition
//! itself is defined in the page stylesheet.

use web_sys::Document;

/// Add `show` to every fade-in element.
pub fn bind_all(document: &Document) {
    super::for_each_element(document, ".fade-in", |el| {
        let _ = el.class_list().add_1("show");
    });
}
