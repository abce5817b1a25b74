//! Bridges to vendor scripts the page may load globally (Prism for syntax
//! highlighting, Bootstrap for tooltips and popovers).
//!
//! ERROR HANDLING
//! ==============
//! The globals are looked up by reflection at call time and every path
//! degrades to a no-op when a script is not on the page, so these helpers are
//! safe on pages that ship without the vendor bundles.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// Walk a dotted path from the JS global object. `None` as soon as a segment
/// is missing.
fn global_path(parts: &[&str]) -> Option<JsValue> {
    let mut value: JsValue = js_sys::global().into();
    for part in parts {
        value = Reflect::get(&value, &JsValue::from_str(part)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
    }
    Some(value)
}

/// Initialize Prism's line-numbers plugin, if Prism is loaded.
pub fn prism_init_line_numbers() {
    let Some(plugin) = global_path(&["Prism", "plugins", "lineNumbers"]) else {
        return;
    };
    let Some(init) = Reflect::get(&plugin, &JsValue::from_str("init"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        return;
    };
    let _ = init.call0(&plugin);
}

/// Re-run Prism highlighting under a single element. Scoped so inserting one
/// comment never re-highlights the whole page.
pub fn highlight_under(element: &Element) {
    let Some(prism) = global_path(&["Prism"]) else {
        return;
    };
    let Some(highlight) = Reflect::get(&prism, &JsValue::from_str("highlightAllUnder"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        return;
    };
    let _ = highlight.call1(&prism, element);
}

/// Construct Bootstrap tooltip and popover instances for every opted-in
/// element on the page.
pub fn init_overlays(document: &Document) {
    construct_for_all(document, r#"[data-bs-toggle="tooltip"]"#, &["bootstrap", "Tooltip"]);
    construct_for_all(document, r#"[data-bs-toggle="popover"]"#, &["bootstrap", "Popover"]);
}

fn construct_for_all(document: &Document, selector: &str, ctor_path: &[&str]) {
    let Some(ctor) = global_path(ctor_path).and_then(|f| f.dyn_into::<Function>().ok()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(node) = nodes.get(i) {
            let _ = Reflect::construct(&ctor, &Array::of1(&node));
        }
    }
}
