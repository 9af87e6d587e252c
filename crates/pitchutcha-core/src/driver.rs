//! Scroll-coupled playback of chapter transitions.
//!
//! The orientation written for a given scroll progress depends only on that
//! progress: scrubbing backwards replays the same path in reverse, and a jump
//! across several chapters lands directly on the last one.

use crate::boundary::BoundaryError;
use crate::chapter::{Chapter, ChapterRegistry};
use crate::config::NarrativeConfig;
use crate::constants::TRANSITION_WINDOW;
use crate::orientation::{Orientation, OrientationLimits};
use crate::resolver::{ActiveChapter, ChapterResolver};
use crate::state::OrientationWriter;
use crate::subscription::{EventHub, Subscription};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    SmoothStep,
    CubicInOut,
}

impl Easing {
    /// Map t in [0, 1] onto [0, 1]; monotone with fixed endpoints.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Easing::Linear => t,
            Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionConfig {
    /// Share of each chapter's scroll range used to ease in from the previous
    /// chapter's target. The rest of the range holds the target.
    pub window: f32,
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            window: TRANSITION_WINDOW,
            easing: Easing::default(),
        }
    }
}

/// Emitted when the active chapter differs from the previously applied one.
#[derive(Clone, Debug, PartialEq)]
pub struct ChapterChange {
    pub from: Option<usize>,
    pub to: usize,
    pub id: String,
}

pub struct NarrativeDriver {
    resolver: ChapterResolver,
    chapters: Vec<Chapter>,
    rest: Orientation,
    writer: OrientationWriter,
    transition: TransitionConfig,
    limits: OrientationLimits,
    last_index: Option<usize>,
    changes: EventHub<ChapterChange>,
}

impl NarrativeDriver {
    pub fn new(
        resolver: ChapterResolver,
        chapters: Vec<Chapter>,
        writer: OrientationWriter,
        config: &NarrativeConfig,
    ) -> Result<Self, BoundaryError> {
        if resolver.chapter_count() != chapters.len() {
            return Err(BoundaryError::CountMismatch {
                boundaries: resolver.chapter_count(),
                chapters: chapters.len(),
            });
        }
        let rest = writer.get();
        Ok(Self {
            resolver,
            chapters,
            rest,
            writer,
            transition: config.transition,
            limits: config.limits,
            last_index: None,
            changes: EventHub::new(),
        })
    }

    pub fn from_registry(
        registry: &ChapterRegistry,
        total_scrollable_height: f32,
        writer: OrientationWriter,
        config: &NarrativeConfig,
    ) -> Result<Self, BoundaryError> {
        let resolver = ChapterResolver::from_registry(registry, total_scrollable_height)?;
        Self::new(resolver, registry.iter().cloned().collect(), writer, config)
    }

    /// Swap in a re-measured chapter layout. Targets, the writer and
    /// subscribers stay; the old layout is kept if the new one is invalid.
    pub fn relayout(
        &mut self,
        registry: &ChapterRegistry,
        total_scrollable_height: f32,
    ) -> Result<(), BoundaryError> {
        self.resolver = ChapterResolver::from_registry(registry, total_scrollable_height)?;
        self.chapters = registry.iter().cloned().collect();
        Ok(())
    }

    pub fn resolver(&self) -> &ChapterResolver {
        &self.resolver
    }

    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    pub fn resolve(&self, progress: f32) -> ActiveChapter {
        self.resolver.resolve(progress)
    }

    /// Orientation for `progress`, with no side effects.
    pub fn orientation_at(&self, progress: f32) -> Orientation {
        let active = self.resolver.resolve(progress);
        self.orientation_for(active)
    }

    fn orientation_for(&self, active: ActiveChapter) -> Orientation {
        let Some(target) = self.chapters.get(active.index).map(|c| c.orientation) else {
            return self.rest.constrained(&self.limits);
        };
        let from = match active.index.checked_sub(1) {
            Some(prev) => self.chapters.get(prev).map_or(target, |c| c.orientation),
            None => target,
        };
        let window = self.transition.window;
        let t = if window > f32::EPSILON {
            active.local_progress / window
        } else {
            1.0
        };
        let eased = self.transition.easing.apply(t);
        Orientation::lerp(from, target, eased).constrained(&self.limits)
    }

    /// Write the orientation for `progress` into the shared state.
    pub fn apply(&mut self, progress: f32) -> ActiveChapter {
        let active = self.resolver.resolve(progress);
        let orientation = self.orientation_for(active);
        self.writer.set(orientation);
        if self.last_index != Some(active.index) {
            let change = ChapterChange {
                from: self.last_index,
                to: active.index,
                id: self
                    .chapters
                    .get(active.index)
                    .map(|c| c.id.clone())
                    .unwrap_or_default(),
            };
            log::info!(
                "[narrative] chapter {:?} -> {} ('{}') at progress {:.3}",
                change.from,
                change.to,
                change.id,
                progress
            );
            self.last_index = Some(active.index);
            self.changes.publish(&change);
        }
        active
    }

    pub fn on_chapter_change(&self, handler: impl FnMut(&ChapterChange) + 'static) -> Subscription {
        self.changes.subscribe(handler)
    }

    pub fn current(&self) -> Orientation {
        self.writer.get()
    }
}
