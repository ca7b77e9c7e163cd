//! Scroll direction tracking, reveal thresholds and smooth-scroll easing.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Follows successive vertical scroll positions and reports the last direction moved.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    last_y: f64,
    direction: Option<ScrollDirection>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new scroll position. The direction only changes when the position does.
    pub fn update(&mut self, y: f64) -> Option<ScrollDirection> {
        if y != self.last_y {
            self.direction = Some(if y > self.last_y {
                ScrollDirection::Down
            } else {
                ScrollDirection::Up
            });
        }
        self.last_y = y;
        self.direction
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    pub fn last_y(&self) -> f64 {
        self.last_y
    }
}

/// The navigation bar hides while scrolling down and shows otherwise.
#[inline]
pub fn nav_visible(direction: Option<ScrollDirection>) -> bool {
    !matches!(direction, Some(ScrollDirection::Down))
}

/// Whether an element whose top edge sits at `element_top` (relative to the
/// viewport) has crossed the reveal line.
#[inline]
pub fn should_reveal(element_top: f64, viewport_height: f64, start_fraction: f64) -> bool {
    element_top <= viewport_height * start_fraction
}

/// Exponential ease-out used for in-page navigation, clamped to 1.
#[inline]
pub fn smooth_ease(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// A single eased scroll from one position to another.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    from: f64,
    to: f64,
    duration_sec: f64,
    elapsed_sec: f64,
}

impl SmoothScroll {
    pub fn new(from: f64, to: f64, duration_sec: f64) -> Self {
        Self {
            from,
            to,
            duration_sec: duration_sec.max(0.0),
            elapsed_sec: 0.0,
        }
    }

    /// Advance by `dt_sec` and return the position to scroll to.
    pub fn step(&mut self, dt_sec: f64) -> f64 {
        self.elapsed_sec += dt_sec.max(0.0);
        self.position()
    }

    pub fn position(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        let t = (self.elapsed_sec / self.duration_sec).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * smooth_ease(t)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_sec >= self.duration_sec
    }

    pub fn target(&self) -> f64 {
        self.to
    }
}
