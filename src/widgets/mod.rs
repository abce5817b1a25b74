//! DOM binders, one per page widget.
//!
//! DESIGN
//! ======
//! Each binder discovers its elements once during page initialization, builds
//! a typed binding, and attaches listeners to exactly those elements; handlers
//! never re-query the page by structural guesswork. Every binder is a silent
//! no-op on pages where its elements are absent.
//!
//! The whole module tree is browser-only; the logic the binders delegate to
//! lives in `state`, `render`, and `util`, which compile and test natively.

#[cfg(feature = "web")]
pub mod autosize;
#[cfg(feature = "web")]
pub mod comment_form;
#[cfg(feature = "web")]
pub mod confirm_delete;
#[cfg(feature = "web")]
pub mod fade_in;
#[cfg(feature = "web")]
pub mod nav_links;
#[cfg(feature = "web")]
pub mod preview;
#[cfg(feature = "web")]
pub mod theme_toggle;
#[cfg(feature = "web")]
pub mod validation;

/// Run `f` for every element matching `selector`. Invalid selectors and empty
/// result sets are silent no-ops.
#[cfg(feature = "web")]
pub(crate) fn for_each_element(
    document: &web_sys::Document,
    selector: &str,
    mut f: impl FnMut(web_sys::Element),
) {
    use wasm_bindgen::JsCast;

    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            f(el);
        }
    }
}
