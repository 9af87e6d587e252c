use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Coalesces bursts of events into at most one value per animation frame.
///
/// Event handlers `push` the latest sample; the frame loop `take`s it. Older
/// samples pushed within the same frame are overwritten, never queued.
pub struct FrameThrottle<T> {
    pending: Rc<Cell<Option<T>>>,
}

impl<T> Clone for FrameThrottle<T> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
        }
    }
}

impl<T> Default for FrameThrottle<T> {
    fn default() -> Self {
        Self {
            pending: Rc::new(Cell::new(None)),
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for FrameThrottle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameThrottle")
            .field("pending", &self.pending)
            .finish()
    }
}

impl<T> FrameThrottle<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&self, value: T) {
        self.pending.set(Some(value));
    }

    #[inline]
    pub fn take(&self) -> Option<T> {
        self.pending.take()
    }
}

impl<T: Copy> FrameThrottle<T> {
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}
