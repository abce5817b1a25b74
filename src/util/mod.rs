//! Utility helpers shared across page binders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure path/URL helpers live here so binder logic stays testable; `vendor`
//! isolates the reflection bridge to page-global scripts.

pub mod nav;
pub mod urls;
#[cfg(feature = "web")]
pub mod vendor;
