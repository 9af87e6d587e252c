use crate::boundary::{BoundaryError, BoundaryIndex};
use crate::chapter::ChapterRegistry;
use crate::sampler::clamp_progress;

/// The chapter owning a given scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveChapter {
    pub index: usize,
    /// Position inside the chapter's own sub-range, in [0, 1].
    pub local_progress: f32,
}

/// Maps scroll progress to the active chapter. Holds no mutable state, so the
/// same progress always resolves to the same chapter.
#[derive(Clone, Debug, PartialEq)]
pub struct ChapterResolver {
    boundaries: BoundaryIndex,
}

impl ChapterResolver {
    pub fn new(boundaries: BoundaryIndex) -> Self {
        Self { boundaries }
    }

    pub fn from_boundaries(boundaries: Vec<f32>) -> Result<Self, BoundaryError> {
        BoundaryIndex::new(boundaries).map(Self::new)
    }

    pub fn from_registry(
        registry: &ChapterRegistry,
        total_scrollable_height: f32,
    ) -> Result<Self, BoundaryError> {
        Self::from_boundaries(registry.normalized_boundaries(total_scrollable_height))
    }

    pub fn chapter_count(&self) -> usize {
        self.boundaries.len()
    }

    pub fn boundaries(&self) -> &[f32] {
        self.boundaries.as_slice()
    }

    /// Resolve `progress` (clamped to [0, 1]). Before the first boundary the
    /// first chapter is active.
    pub fn resolve(&self, progress: f32) -> ActiveChapter {
        let p = clamp_progress(progress);
        let Some(index) = self.boundaries.locate(p) else {
            return ActiveChapter {
                index: 0,
                local_progress: 0.0,
            };
        };
        ActiveChapter {
            index,
            local_progress: self.local_progress(index, p),
        }
    }

    fn local_progress(&self, index: usize, p: f32) -> f32 {
        let start = self.boundaries.get(index).unwrap_or(0.0);
        let end = self.boundaries.get(index + 1).unwrap_or(1.0).max(start);
        let span = end - start;
        if span <= f32::EPSILON {
            return 1.0;
        }
        ((p - start) / span).clamp(0.0, 1.0)
    }
}
