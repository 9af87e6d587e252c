//! Chapter registry built once from the page's narrative anchors.
//!
//! Anchors are read by the front-end as `(element id, document offset)` pairs.
//! Only ids carrying the configured prefix become chapters; the registry is
//! sorted by offset so its order is the narrative order.

use crate::config::NarrativeConfig;
use crate::orientation::Orientation;
use crate::table::OrientationTable;
use smallvec::SmallVec;

/// A raw DOM anchor as seen by the front-end.
#[derive(Clone, Debug, PartialEq)]
pub struct ChapterAnchor {
    pub element_id: String,
    pub offset: f32,
}

impl ChapterAnchor {
    pub fn new(element_id: impl Into<String>, offset: f32) -> Self {
        Self {
            element_id: element_id.into(),
            offset,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chapter {
    pub id: String,
    pub anchor_offset: f32,
    pub orientation: Orientation,
}

impl Chapter {
    pub fn new(id: impl Into<String>, anchor_offset: f32, orientation: Orientation) -> Self {
        Self {
            id: id.into(),
            anchor_offset,
            orientation,
        }
    }

    /// Stand-in used when the page has no narrative anchors.
    pub fn sentinel(orientation: Orientation) -> Self {
        Self::new("", 0.0, orientation)
    }

    pub fn is_sentinel(&self) -> bool {
        self.id.is_empty()
    }
}

/// Non-empty, offset-ordered list of chapters.
#[derive(Clone, Debug)]
pub struct ChapterRegistry {
    chapters: SmallVec<[Chapter; 8]>,
}

impl ChapterRegistry {
    /// Build from page anchors. `None` means the narrative is disabled.
    pub fn from_anchors(
        anchors: &[ChapterAnchor],
        table: &OrientationTable,
        config: &NarrativeConfig,
    ) -> Option<Self> {
        let prefix = config.anchor_prefix.as_str();
        let mut chapters: SmallVec<[Chapter; 8]> = SmallVec::new();
        for anchor in anchors {
            let Some(id) = anchor.element_id.strip_prefix(prefix) else {
                continue;
            };
            if id.is_empty() {
                log::warn!("[narrative] anchor #{} has no chapter name", anchor.element_id);
                continue;
            }
            if !anchor.offset.is_finite() {
                log::warn!("[narrative] anchor #{} has no usable offset", anchor.element_id);
                continue;
            }
            let orientation = match table.target(id) {
                Some(o) => o,
                None => {
                    log::warn!("[narrative] no orientation for chapter '{}', using default", id);
                    table.default_orientation()
                }
            };
            chapters.push(Chapter::new(id, anchor.offset, orientation));
        }
        Self::from_sorted_or_not(chapters)
    }

    /// Build from ready-made chapters. `None` on empty input.
    pub fn from_chapters(chapters: Vec<Chapter>) -> Option<Self> {
        Self::from_sorted_or_not(chapters.into_iter().collect())
    }

    fn from_sorted_or_not(mut chapters: SmallVec<[Chapter; 8]>) -> Option<Self> {
        if chapters.is_empty() {
            return None;
        }
        // stable: equal offsets keep document order
        chapters.sort_by(|a, b| a.anchor_offset.total_cmp(&b.anchor_offset));
        Some(Self { chapters })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.iter()
    }

    pub fn find(&self, id: &str) -> Option<(usize, &Chapter)> {
        self.chapters.iter().enumerate().find(|(_, c)| c.id == id)
    }

    pub fn orientations(&self) -> Vec<Orientation> {
        self.chapters.iter().map(|c| c.orientation).collect()
    }

    /// Anchor offsets divided by the total scrollable height.
    ///
    /// With no scroll range (height zero or unknown) the first chapter starts
    /// at 0 and every later chapter at 1, so progress 0 stays on the first.
    pub fn normalized_boundaries(&self, total_scrollable_height: f32) -> Vec<f32> {
        if !(total_scrollable_height.is_finite() && total_scrollable_height > 0.0) {
            return (0..self.chapters.len())
                .map(|i| if i == 0 { 0.0 } else { 1.0 })
                .collect();
        }
        self.chapters
            .iter()
            .map(|c| c.anchor_offset / total_scrollable_height)
            .collect()
    }
}
