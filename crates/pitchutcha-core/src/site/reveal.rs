use crate::constants::{REVEAL_STAGGER_MAX_MS, REVEAL_STAGGER_MS, REVEAL_THRESHOLD};

/// Tracks which `[data-reveal]` elements have been shown. Reveals are sticky:
/// scrolling an element back out of view does not hide it again.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    threshold: f32,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self::with_threshold(count, REVEAL_THRESHOLD)
    }

    pub fn with_threshold(count: usize, threshold: f32) -> Self {
        Self {
            revealed: vec![false; count],
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// Report the visible ratio of element `index`. Returns true exactly once,
    /// on the observation that first crosses the threshold.
    pub fn observe(&mut self, index: usize, visible_ratio: f32) -> bool {
        let Some(slot) = self.revealed.get_mut(index) else {
            return false;
        };
        if *slot || !(visible_ratio >= self.threshold && visible_ratio > 0.0) {
            return false;
        }
        *slot = true;
        true
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}

/// Transition delay for the `order`-th element revealed in one batch.
#[inline]
pub fn stagger_delay_ms(order: usize) -> u32 {
    let order = u32::try_from(order).unwrap_or(u32::MAX);
    order
        .saturating_mul(REVEAL_STAGGER_MS)
        .min(REVEAL_STAGGER_MAX_MS)
}
