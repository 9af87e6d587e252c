//! Preloader counter and hero entrance timeline.
//!
//! Unlike the narrative this is driven by wall-clock time: the front-end
//! passes milliseconds since the page started.

use crate::constants::{HERO_STAGGER_MS, PRELOADER_COUNT_MS, PRELOADER_FADE_MS};
use crate::driver::Easing;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PreloaderPhase {
    Counting { counter: u32 },
    Revealing { opacity: f32 },
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreloaderTimeline {
    pub count_ms: f64,
    pub fade_ms: f64,
    pub hero_stagger_ms: f64,
}

impl Default for PreloaderTimeline {
    fn default() -> Self {
        Self {
            count_ms: PRELOADER_COUNT_MS,
            fade_ms: PRELOADER_FADE_MS,
            hero_stagger_ms: HERO_STAGGER_MS,
        }
    }
}

impl PreloaderTimeline {
    pub fn total_ms(&self) -> f64 {
        self.count_ms.max(0.0) + self.fade_ms.max(0.0)
    }

    /// Counter shown on the preloader, 0..=100.
    pub fn counter_at(&self, elapsed_ms: f64) -> u32 {
        if self.count_ms <= 0.0 || elapsed_ms >= self.count_ms {
            return 100;
        }
        let t = (elapsed_ms.max(0.0) / self.count_ms) as f32;
        (Easing::SmoothStep.apply(t) * 100.0).round() as u32
    }

    pub fn phase_at(&self, elapsed_ms: f64) -> PreloaderPhase {
        let elapsed = if elapsed_ms.is_finite() { elapsed_ms.max(0.0) } else { 0.0 };
        if elapsed < self.count_ms {
            return PreloaderPhase::Counting {
                counter: self.counter_at(elapsed),
            };
        }
        let into_fade = elapsed - self.count_ms.max(0.0);
        if into_fade < self.fade_ms {
            let opacity = 1.0 - (into_fade / self.fade_ms) as f32;
            return PreloaderPhase::Revealing {
                opacity: opacity.clamp(0.0, 1.0),
            };
        }
        PreloaderPhase::Done
    }

    /// Hero items enter one after another once the preloader has gone.
    pub fn hero_item_visible(&self, index: usize, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.total_ms() + index as f64 * self.hero_stagger_ms.max(0.0)
    }
}
