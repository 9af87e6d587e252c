use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BoundaryError {
    #[error("boundary {index} is not a finite number")]
    NotFinite { index: usize },
    #[error("boundary {index} ({value}) is below the previous boundary ({previous})")]
    Decreasing {
        index: usize,
        value: f32,
        previous: f32,
    },
    #[error("{boundaries} boundaries for {chapters} chapters")]
    CountMismatch { boundaries: usize, chapters: usize },
}

/// Monotonically non-decreasing boundary table searched with binary search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundaryIndex {
    boundaries: Vec<f32>,
}

impl BoundaryIndex {
    pub fn new(boundaries: Vec<f32>) -> Result<Self, BoundaryError> {
        for (index, &value) in boundaries.iter().enumerate() {
            if !value.is_finite() {
                return Err(BoundaryError::NotFinite { index });
            }
            if index > 0 {
                let previous = boundaries[index - 1];
                if value < previous {
                    return Err(BoundaryError::Decreasing {
                        index,
                        value,
                        previous,
                    });
                }
            }
        }
        Ok(Self { boundaries })
    }

    /// Index of the greatest boundary `<= value`; the last one wins on ties.
    /// `None` if `value` comes before every boundary (or the table is empty).
    #[inline]
    pub fn locate(&self, value: f32) -> Option<usize> {
        let past = self.boundaries.partition_point(|b| *b <= value);
        past.checked_sub(1)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.boundaries.get(index).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.boundaries
    }
}
