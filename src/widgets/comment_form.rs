//! Comment Submitter: replaces a comment form's native submission with an
//! asynchronous exchange and appends the server-rendered comment on success.
//!
//! ERROR HANDLING
//! ==============
//! The comment node is built and inserted only after a success response has
//! been fully parsed. On any failure the textarea keeps its content, no DOM
//! mutation happens, and the user gets exactly one alert. The in-flight guard
//! and submit button are restored on both paths.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement, HtmlTextAreaElement};

use crate::net;
use crate::render::comment::{COMMENT_CLASS, COMMENTS_HEADER_HTML, comment_inner_html};
use crate::util::{urls, vendor};

const FAILURE_MESSAGE: &str =
    "An error occurred while submitting your comment. Please try again.";

/// Typed binding for one comment form: the form itself, its textarea, its
/// submit button (when present), and the host element that owns the comments
/// container.
pub struct CommentFormBinding {
    form: HtmlFormElement,
    textarea: HtmlTextAreaElement,
    submit: Option<HtmlButtonElement>,
    host: Element,
}

/// Bind every comment form on the page.
pub fn bind_all(document: &Document) {
    for binding in CommentFormBinding::discover(document) {
        binding.bind();
    }
}

impl CommentFormBinding {
    /// Find all comment forms and build their bindings. Forms missing a
    /// textarea or host element are skipped.
    pub fn discover(document: &Document) -> Vec<Self> {
        let selector = format!(r#"form[action^="{}"]"#, urls::COMMENT_ACTION_PREFIX);
        let mut bindings = Vec::new();
        super::for_each_element(document, &selector, |el| {
            if let Some(binding) = Self::from_form(el) {
                bindings.push(binding);
            }
        });
        bindings
    }

    fn from_form(el: Element) -> Option<Self> {
        let form: HtmlFormElement = el.dyn_into().ok()?;
        let textarea = form
            .query_selector("textarea")
            .ok()
            .flatten()?
            .dyn_into()
            .ok()?;
        let host = form.closest(".flex-grow-1").ok().flatten()?;
        let submit = form
            .query_selector(r#"button[type="submit"]"#)
            .ok()
            .flatten()
            .and_then(|b| b.dyn_into().ok());
        Some(Self {
            form,
            textarea,
            submit,
            host,
        })
    }

    /// Attach the submit listener. One request per form may be in flight at a
    /// time; further submits are ignored until it settles.
    pub fn bind(self) {
        let form = self.form.clone();
        let binding = Rc::new(self);
        let in_flight = Rc::new(Cell::new(false));

        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            if in_flight.get() {
                return;
            }
            let Ok(data) = web_sys::FormData::new_with_form(&binding.form) else {
                return;
            };
            in_flight.set(true);
            binding.set_submit_disabled(true);

            let binding = Rc::clone(&binding);
            let in_flight = Rc::clone(&in_flight);
            wasm_bindgen_futures::spawn_local(async move {
                let action = binding.form.action();
                match net::api::submit_comment(&action, data).await {
                    Ok(comment) => binding.insert_comment(&comment),
                    Err(err) => {
                        log::warn!(
                            "comment submission for post {} failed: {err}",
                            urls::post_id_from_action(&action).unwrap_or("?")
                        );
                        alert(FAILURE_MESSAGE);
                    }
                }
                in_flight.set(false);
                binding.set_submit_disabled(false);
            });
        });
        let _ = form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref());
        handler.forget();
    }

    fn insert_comment(&self, comment: &net::types::RenderedComment) {
        let Some(container) = self.comments_container() else {
            return;
        };
        let Some(document) = self.form.owner_document() else {
            return;
        };
        let Ok(node) = document.create_element("div") else {
            return;
        };
        node.set_class_name(COMMENT_CLASS);
        node.set_inner_html(&comment_inner_html(comment));
        let _ = container.append_child(&node);
        self.textarea.set_value("");

        // Highlight code in the new comment only, not the whole page.
        vendor::highlight_under(&node);
    }

    /// The `.comments` container under the host, created with its header
    /// ahead of the first comment.
    fn comments_container(&self) -> Option<Element> {
        if let Ok(Some(existing)) = self.host.query_selector(".comments") {
            return Some(existing);
        }
        let document = self.form.owner_document()?;
        let container = document.create_element("div").ok()?;
        container.set_class_name("comments mt-3");
        container.set_inner_html(COMMENTS_HEADER_HTML);

        let anchor = self.form.parent_node();
        if self.host.insert_before(&container, anchor.as_ref()).is_err() {
            self.host.append_child(&container).ok()?;
        }
        Some(container)
    }

    fn set_submit_disabled(&self, disabled: bool) {
        if let Some(button) = &self.submit {
            button.set_disabled(disabled);
        }
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
