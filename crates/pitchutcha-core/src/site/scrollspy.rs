use crate::boundary::{BoundaryError, BoundaryIndex};

/// A table-of-contents target: the heading's anchor id and document offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Heading {
    pub anchor: String,
    pub offset: f32,
}

impl Heading {
    pub fn new(anchor: impl Into<String>, offset: f32) -> Self {
        Self {
            anchor: anchor.into(),
            offset,
        }
    }
}

/// Highlights the TOC entry for the section currently under the header.
#[derive(Clone, Debug)]
pub struct ScrollSpy {
    headings: Vec<Heading>,
    index: BoundaryIndex,
    margin: f32,
}

impl ScrollSpy {
    /// Headings are sorted by offset; `margin` shifts activation earlier so a
    /// heading counts as reached once it slides under the sticky header.
    pub fn new(headings: Vec<Heading>, margin: f32) -> Result<Self, BoundaryError> {
        let (headings, index) = Self::index(headings, margin)?;
        Ok(Self {
            headings,
            index,
            margin,
        })
    }

    /// Replace the heading offsets after a reflow, keeping the margin. On
    /// error the previous offsets stay in place.
    pub fn relayout(&mut self, headings: Vec<Heading>) -> Result<(), BoundaryError> {
        let (headings, index) = Self::index(headings, self.margin)?;
        self.headings = headings;
        self.index = index;
        Ok(())
    }

    fn index(
        mut headings: Vec<Heading>,
        margin: f32,
    ) -> Result<(Vec<Heading>, BoundaryIndex), BoundaryError> {
        headings.retain(|h| h.offset.is_finite());
        headings.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        let index = BoundaryIndex::new(headings.iter().map(|h| h.offset - margin).collect())?;
        Ok((headings, index))
    }

    pub fn active(&self, scroll_y: f32) -> Option<&Heading> {
        if !scroll_y.is_finite() {
            return None;
        }
        self.index.locate(scroll_y).and_then(|i| self.headings.get(i))
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }
}
