// Tests for inline style strings (pure functions shared with the wasm frontend)

mod style {
    include!("../src/style.rs");
}

use style::*;

#[test]
fn marker_is_centered_on_projected_point() {
    assert_eq!(
        marker_transform(120.0, 0.0),
        "translate(120.000px, 0.000px) translate(-50%, -50%)"
    );
    assert_eq!(
        marker_transform(-77.9423, 45.0),
        "translate(-77.942px, 45.000px) translate(-50%, -50%)"
    );
}

#[test]
fn progress_is_clamped_to_full() {
    assert_eq!(progress_width(65), "65%");
    assert_eq!(progress_width(0), "0%");
    assert_eq!(progress_width(250), "100%");
    assert_eq!(level_label(95), "95%");
}

#[test]
fn overflow_badge_only_when_technologies_are_hidden() {
    assert_eq!(overflow_badge(0), None);
    assert_eq!(overflow_badge(3).as_deref(), Some("+3"));
}
