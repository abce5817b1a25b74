//! Pure HTML-fragment builders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is string-in, string-out so the rendering contracts can be
//! tested natively. Widgets assign the results to `innerHTML`; nothing in this
//! module touches the DOM.

pub mod comment;
pub mod markdown;
