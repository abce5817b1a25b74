//! Two-state machine for the markdown preview toggle.
//!
//! The page script this replaces assigned the mode flag and then immediately
//! compared against the value it had just written, so repeated clicks could
//! stick in preview mode. Here the mode is an explicit enum with a single
//! transition function; each activation alternates deterministically and the
//! trigger label always agrees with the visible surface.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

/// Display mode of a preview widget instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewMode {
    /// The raw textarea is visible.
    #[default]
    Edit,
    /// The rendered surface is visible.
    Preview,
}

impl PreviewMode {
    /// The state after one trigger activation.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Edit => Self::Preview,
            Self::Preview => Self::Edit,
        }
    }

    /// Label the trigger should carry while in this state. It names the
    /// action a click performs, not the current state.
    #[must_use]
    pub fn trigger_label(self) -> &'static str {
        match self {
            Self::Edit => "Preview",
            Self::Preview => "Edit",
        }
    }

    /// Whether the rendered surface is the visible half of the pair.
    #[must_use]
    pub fn shows_rendered(self) -> bool {
        self == Self::Preview
    }
}
