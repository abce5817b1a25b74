//! Client-side state: the preview toggle's mode and the persisted settings
//! store backing the theme preference.
//!
//! DESIGN
//! ======
//! Everything here is plain data with pure transitions so the page's only
//! stateful behaviors (preview mode, theme flag) can be tested natively,
//! independent of the DOM bindings in `widgets`.

pub mod preview;
pub mod settings;
pub mod theme;
