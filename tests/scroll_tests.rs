// Host-side tests for scroll direction tracking, reveal thresholds and easing.

use folio_core::scroll::{
    nav_visible, should_reveal, smooth_ease, ScrollDirection, ScrollTracker, SmoothScroll,
};

#[test]
fn direction_follows_position_changes() {
    let mut t = ScrollTracker::new();
    assert_eq!(t.direction(), None);
    assert_eq!(t.update(120.0), Some(ScrollDirection::Down));
    assert_eq!(t.update(80.0), Some(ScrollDirection::Up));
    // no movement keeps the last direction
    assert_eq!(t.update(80.0), Some(ScrollDirection::Up));
    assert_eq!(t.last_y(), 80.0);
}

#[test]
fn nav_hides_only_while_scrolling_down() {
    assert!(nav_visible(None));
    assert!(nav_visible(Some(ScrollDirection::Up)));
    assert!(!nav_visible(Some(ScrollDirection::Down)));
}

#[test]
fn reveal_starts_at_eighty_percent_of_viewport() {
    assert!(should_reveal(800.0, 1000.0, 0.8));
    assert!(should_reveal(-50.0, 1000.0, 0.8));
    assert!(!should_reveal(800.5, 1000.0, 0.8));
}

#[test]
fn ease_is_monotonic_and_clamped() {
    assert!(smooth_ease(0.0) < 0.01);
    assert_eq!(smooth_ease(1.0), 1.0);
    assert_eq!(smooth_ease(2.0), 1.0);
    let mut prev = smooth_ease(0.0);
    for i in 1..=100 {
        let v = smooth_ease(i as f64 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn smooth_scroll_lands_on_target() {
    let mut s = SmoothScroll::new(0.0, 1000.0, 1.2);
    let mid = s.step(0.3);
    assert!(mid > 0.0 && mid < 1000.0, "mid = {mid}");
    assert!(!s.is_finished());
    let later = s.step(0.3);
    assert!(later > mid);
    assert_eq!(s.step(1.0), 1000.0);
    assert!(s.is_finished());
    assert_eq!(s.target(), 1000.0);
}

#[test]
fn smooth_scroll_upwards_and_instant() {
    let mut up = SmoothScroll::new(500.0, 100.0, 1.2);
    let p = up.step(0.1);
    assert!(p < 500.0 && p > 100.0);

    let instant = SmoothScroll::new(0.0, 42.0, 0.0);
    assert!(instant.is_finished());
    assert_eq!(instant.position(), 42.0);
}
