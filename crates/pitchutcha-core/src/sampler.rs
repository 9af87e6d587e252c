//! Scroll position sampling.
//!
//! The front-end copies the window scroll offset and the narrative container's
//! geometry into [`ScrollMetrics`]; everything past that point is pure.

/// Raw scroll geometry in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_position: f32,
    pub container_top: f32,
    /// Scrollable height of the container (its height minus the viewport).
    pub container_height: f32,
}

impl ScrollMetrics {
    pub fn new(scroll_position: f32, container_top: f32, container_height: f32) -> Self {
        Self {
            scroll_position,
            container_top,
            container_height,
        }
    }
}

/// Something that can report the current scroll geometry.
pub trait ScrollSource {
    fn metrics(&self) -> ScrollMetrics;
}

impl ScrollSource for ScrollMetrics {
    fn metrics(&self) -> ScrollMetrics {
        *self
    }
}

/// Normalized progress through the container, always in [0, 1].
///
/// A zero-height (or broken) container reports 0 rather than NaN.
pub fn scroll_progress(m: &ScrollMetrics) -> f32 {
    if !(m.container_height.is_finite() && m.container_height > 0.0) {
        return 0.0;
    }
    clamp_progress((m.scroll_position - m.container_top) / m.container_height)
}

#[inline]
pub fn clamp_progress(p: f32) -> f32 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Sample a source and normalize.
#[inline]
pub fn sample(source: &impl ScrollSource) -> f32 {
    scroll_progress(&source.metrics())
}
