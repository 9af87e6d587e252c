//! The narrative context: one object owning the scroll-to-orientation wiring.
//!
//! The front-end builds it once at page load and hands out what each side
//! needs: a [`FrameThrottle`] for the scroll listener, a [`RenderLoop`] for the
//! frame callback, and chapter-change subscriptions for page chrome. Layout
//! changes arrive as freshly measured [`ChapterLayout`]s through their own
//! throttle; a new container height alone never moves the boundaries.

use crate::chapter::{Chapter, ChapterAnchor, ChapterRegistry};
use crate::config::NarrativeConfig;
use crate::driver::{ChapterChange, NarrativeDriver};
use crate::render_loop::RenderLoop;
use crate::resolver::ActiveChapter;
use crate::sampler::{scroll_progress, ScrollMetrics};
use crate::state::{orientation_channel, DragFlag, OrientationReader};
use crate::subscription::Subscription;
use crate::table::OrientationTable;
use crate::throttle::FrameThrottle;

pub enum Narrative {
    Enabled {
        registry: ChapterRegistry,
        driver: NarrativeDriver,
        scrollable_height: f32,
    },
    /// No usable anchors: the globe rests on the sentinel chapter.
    Disabled { sentinel: Chapter },
}

/// Anchor offsets and scrollable height measured together after a reflow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChapterLayout {
    pub anchors: Vec<ChapterAnchor>,
    pub scrollable_height: f32,
}

impl ChapterLayout {
    pub fn new(anchors: Vec<ChapterAnchor>, scrollable_height: f32) -> Self {
        Self {
            anchors,
            scrollable_height,
        }
    }
}

pub struct NarrativeContext {
    narrative: Narrative,
    reader: OrientationReader,
    throttle: FrameThrottle<ScrollMetrics>,
    layouts: FrameThrottle<ChapterLayout>,
    table: OrientationTable,
    config: NarrativeConfig,
}

impl NarrativeContext {
    pub fn build(
        anchors: &[ChapterAnchor],
        table: &OrientationTable,
        scrollable_height: f32,
        config: NarrativeConfig,
    ) -> Self {
        let initial = table.default_orientation().constrained(&config.limits);
        let (writer, reader) = orientation_channel(initial);
        let disabled = Narrative::Disabled {
            sentinel: Chapter::sentinel(initial),
        };
        let narrative = match ChapterRegistry::from_anchors(anchors, table, &config) {
            None => {
                log::warn!("[narrative] no chapter anchors found; narrative disabled");
                disabled
            }
            Some(registry) => {
                let driver =
                    NarrativeDriver::from_registry(&registry, scrollable_height, writer, &config);
                match driver {
                    Ok(driver) => {
                        log::info!(
                            "[narrative] {} chapters over {:.0}px",
                            registry.len(),
                            scrollable_height
                        );
                        Narrative::Enabled {
                            registry,
                            driver,
                            scrollable_height,
                        }
                    }
                    Err(e) => {
                        log::warn!("[narrative] bad chapter layout ({}); narrative disabled", e);
                        disabled
                    }
                }
            }
        };
        Self {
            narrative,
            reader,
            throttle: FrameThrottle::new(),
            layouts: FrameThrottle::new(),
            table: table.clone(),
            config,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.narrative, Narrative::Enabled { .. })
    }

    pub fn narrative(&self) -> &Narrative {
        &self.narrative
    }

    /// Handle for scroll/resize listeners to post the latest metrics.
    pub fn throttle(&self) -> FrameThrottle<ScrollMetrics> {
        self.throttle.clone()
    }

    /// Handle for resize/load listeners to post re-measured anchors.
    pub fn layouts(&self) -> FrameThrottle<ChapterLayout> {
        self.layouts.clone()
    }

    pub fn reader(&self) -> OrientationReader {
        self.reader.clone()
    }

    pub fn render_loop(&self, drag: DragFlag) -> RenderLoop {
        RenderLoop::new(self.reader.clone(), drag, self.config.idle)
    }

    /// Apply the pending layout, then the pending scroll sample. Called once
    /// per frame.
    pub fn tick(&mut self) -> Option<ActiveChapter> {
        if let Some(layout) = self.layouts.take() {
            self.relayout(&layout);
        }
        let metrics = self.throttle.take()?;
        self.on_scroll(metrics)
    }

    /// Rebuild the chapter boundaries from re-measured anchors. An empty or
    /// invalid layout keeps the previous one.
    pub fn relayout(&mut self, layout: &ChapterLayout) {
        let Narrative::Enabled {
            registry,
            driver,
            scrollable_height,
        } = &mut self.narrative
        else {
            return;
        };
        let Some(fresh) = ChapterRegistry::from_anchors(&layout.anchors, &self.table, &self.config)
        else {
            log::warn!("[narrative] relayout found no chapter anchors; keeping layout");
            return;
        };
        match driver.relayout(&fresh, layout.scrollable_height) {
            Ok(()) => {
                log::debug!(
                    "[narrative] relayout: {} chapters over {:.0}px",
                    fresh.len(),
                    layout.scrollable_height
                );
                *registry = fresh;
                *scrollable_height = layout.scrollable_height;
            }
            Err(e) => log::warn!("[narrative] relayout skipped: {}", e),
        }
    }

    /// Apply one scroll sample. Returns `None` while the narrative is disabled.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<ActiveChapter> {
        let progress = scroll_progress(&metrics);
        match &mut self.narrative {
            Narrative::Disabled { .. } => None,
            Narrative::Enabled { driver, .. } => Some(driver.apply(progress)),
        }
    }

    /// The chapter active at `progress`; the sentinel when disabled.
    pub fn chapter_at(&self, progress: f32) -> Chapter {
        match &self.narrative {
            Narrative::Disabled { sentinel } => sentinel.clone(),
            Narrative::Enabled {
                registry, driver, ..
            } => {
                let active = driver.resolve(progress);
                registry
                    .get(active.index)
                    .cloned()
                    .unwrap_or_else(|| Chapter::sentinel(self.reader.get()))
            }
        }
    }

    pub fn on_chapter_change(&self, handler: impl FnMut(&ChapterChange) + 'static) -> Subscription {
        match &self.narrative {
            Narrative::Enabled { driver, .. } => driver.on_chapter_change(handler),
            Narrative::Disabled { .. } => Subscription::noop(),
        }
    }
}
