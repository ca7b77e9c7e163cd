// Inline style values computed from layout results.

/// Place an orbit marker so its center, not its top-left corner, lands on `(x, y)`
/// relative to the container center.
#[inline]
pub fn marker_transform(x: f64, y: f64) -> String {
    format!("translate({:.3}px, {:.3}px) translate(-50%, -50%)", x, y)
}

#[inline]
pub fn progress_width(level: u8) -> String {
    format!("{}%", level.min(100))
}

#[inline]
pub fn level_label(level: u8) -> String {
    format!("{}%", level.min(100))
}

/// Badge text for technologies that did not fit on a project card.
#[inline]
pub fn overflow_badge(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("+{}", hidden))
}
