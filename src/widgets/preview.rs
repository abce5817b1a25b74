//! Preview Toggle: alternates a textarea with a rendered surface.
//!
//! The surface element names its textarea and trigger via `data-for` and
//! `data-button` ids; widgets with either target missing are skipped. Mode is
//! held per instance in a [`PreviewMode`] cell and advanced through its single
//! transition, so label and visibility always change together.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, HtmlTextAreaElement};

use crate::render::markdown::preview_html;
use crate::state::preview::PreviewMode;

/// Typed binding for one preview widget: textarea, rendered surface, trigger.
pub struct PreviewBinding {
    textarea: HtmlTextAreaElement,
    surface: HtmlElement,
    trigger: HtmlElement,
}

/// Bind every preview widget on the page.
pub fn bind_all(document: &Document) {
    super::for_each_element(document, ".markdown-preview", |el| {
        if let Some(binding) = PreviewBinding::from_surface(el) {
            binding.bind();
        }
    });
}

impl PreviewBinding {
    fn from_surface(el: web_sys::Element) -> Option<Self> {
        let surface: HtmlElement = el.dyn_into().ok()?;
        let document = surface.owner_document()?;
        let textarea_id = surface.get_attribute("data-for")?;
        let trigger_id = surface.get_attribute("data-button")?;
        let textarea = document
            .get_element_by_id(&textarea_id)?
            .dyn_into()
            .ok()?;
        let trigger = document.get_element_by_id(&trigger_id)?.dyn_into().ok()?;
        Some(Self {
            textarea,
            surface,
            trigger,
        })
    }

    fn bind(self) {
        let trigger = self.trigger.clone();
        let mode = Rc::new(Cell::new(PreviewMode::default()));

        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let next = mode.get().next();
            mode.set(next);
            self.apply(next);
        });
        let _ =
            trigger.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        handler.forget();
    }

    /// Render (when entering preview) and swap visibility and label in one
    /// consistent step.
    fn apply(&self, mode: PreviewMode) {
        if mode.shows_rendered() {
            self.surface
                .set_inner_html(&preview_html(&self.textarea.value()));
            let _ = self.surface.style().set_property("display", "block");
            let _ = self.textarea.style().set_property("display", "none");
        } else {
            let _ = self.surface.style().set_property("display", "none");
            let _ = self.textarea.style().set_property("display", "block");
        }
        self.trigger.set_text_content(Some(mode.trigger_label()));
    }
}
