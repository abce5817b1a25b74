use super::*;

// =============================================================
// Transitions
// =============================================================

#[test]
fn initial_mode_is_edit() {
    assert_eq!(PreviewMode::default(), PreviewMode::Edit);
}

#[test]
fn next_alternates_between_the_two_states() {
    assert_eq!(PreviewMode::Edit.next(), PreviewMode::Preview);
    assert_eq!(PreviewMode::Preview.next(), PreviewMode::Edit);
}

#[test]
fn even_number_of_activations_returns_to_start() {
    let mut mode = PreviewMode::default();
    for _ in 0..6 {
        mode = mode.next();
    }
    assert_eq!(mode, PreviewMode::Edit);
}

#[test]
fn odd_number_of_activations_lands_in_preview() {
    let mut mode = PreviewMode::default();
    for _ in 0..5 {
        mode = mode.next();
    }
    assert_eq!(mode, PreviewMode::Preview);
}

// =============================================================
// Label / visibility pairing
// =============================================================

#[test]
fn edit_mode_offers_preview_and_hides_rendered_surface() {
    assert_eq!(PreviewMode::Edit.trigger_label(), "Preview");
    assert!(!PreviewMode::Edit.shows_rendered());
}

#[test]
fn preview_mode_offers_edit_and_shows_rendered_surface() {
    assert_eq!(PreviewMode::Preview.trigger_label(), "Edit");
    assert!(PreviewMode::Preview.shows_rendered());
}

#[test]
fn label_and_visibility_always_agree() {
    let mut mode = PreviewMode::default();
    for _ in 0..4 {
        mode = mode.next();
        assert_eq!(mode.shows_rendered(), mode.trigger_label() == "Edit");
    }
}
