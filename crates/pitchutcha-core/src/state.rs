//! Shared single-threaded state with one writer and many readers.
//!
//! The writer halves are deliberately not `Clone`: whoever holds the writer
//! is the only thing that can change the value.

use crate::constants::MAX_MANUAL_PITCH;
use crate::orientation::Orientation;
use std::cell::Cell;
use std::rc::Rc;

/// Create the live orientation cell, returning its writer and a reader.
pub fn orientation_channel(initial: Orientation) -> (OrientationWriter, OrientationReader) {
    let cell = Rc::new(Cell::new(initial));
    (
        OrientationWriter { cell: cell.clone() },
        OrientationReader { cell },
    )
}

#[derive(Debug)]
pub struct OrientationWriter {
    cell: Rc<Cell<Orientation>>,
}

impl OrientationWriter {
    #[inline]
    pub fn set(&mut self, orientation: Orientation) {
        self.cell.set(orientation);
    }

    #[inline]
    pub fn get(&self) -> Orientation {
        self.cell.get()
    }

    pub fn reader(&self) -> OrientationReader {
        OrientationReader {
            cell: self.cell.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrientationReader {
    cell: Rc<Cell<Orientation>>,
}

impl OrientationReader {
    #[inline]
    pub fn get(&self) -> Orientation {
        self.cell.get()
    }
}

/// Pointer-driven orbit input: whether a drag is in progress plus the
/// accumulated manual rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragInput {
    pub dragging: bool,
    pub manual_yaw: f32,
    pub manual_pitch: f32,
}

pub fn drag_channel() -> (DragHandle, DragFlag) {
    let cell = Rc::new(Cell::new(DragInput::default()));
    (DragHandle { cell: cell.clone() }, DragFlag { cell })
}

/// Owned by the pointer handler.
#[derive(Debug)]
pub struct DragHandle {
    cell: Rc<Cell<DragInput>>,
}

impl DragHandle {
    pub fn begin(&mut self) {
        let mut d = self.cell.get();
        d.dragging = true;
        self.cell.set(d);
    }

    pub fn end(&mut self) {
        let mut d = self.cell.get();
        d.dragging = false;
        self.cell.set(d);
    }

    /// Accumulate a rotation delta (radians). Ignored unless dragging.
    pub fn rotate_by(&mut self, d_yaw: f32, d_pitch: f32) {
        let mut d = self.cell.get();
        if !d.dragging || !d_yaw.is_finite() || !d_pitch.is_finite() {
            return;
        }
        d.manual_yaw += d_yaw;
        d.manual_pitch = (d.manual_pitch + d_pitch).clamp(-MAX_MANUAL_PITCH, MAX_MANUAL_PITCH);
        self.cell.set(d);
    }

    pub fn is_dragging(&self) -> bool {
        self.cell.get().dragging
    }
}

/// Read-only view of the drag input, held by the render loop.
#[derive(Clone, Debug)]
pub struct DragFlag {
    cell: Rc<Cell<DragInput>>,
}

impl DragFlag {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.cell.get().dragging
    }

    #[inline]
    pub fn input(&self) -> DragInput {
        self.cell.get()
    }
}
