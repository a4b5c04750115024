// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-gesture state for drags and resizes.
//!
//! ## Drag
//!
//! 1) Start with [`DragGesture::new`], passing the pointer position and the
//!    shape's anchor at press time.
//! 2) On each move, [`DragGesture::update`] records the pointer and returns the
//!    delta since the last update.
//! 3) [`DragGesture::attempted_anchor`] maps the pointer to where the anchor
//!    would go without any clamping. It is always measured from the start, so
//!    clamp corrections from earlier frames never accumulate.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_shape_editor::gesture::DragGesture;
//!
//! let mut drag = DragGesture::new(Point::new(10.0, 20.0), Point::new(150.0, 150.0));
//! assert!(!drag.has_moved());
//!
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
//! assert!(drag.has_moved());
//! assert_eq!(drag.attempted_anchor(), Point::new(155.0, 155.0));
//! ```
//!
//! ## Resize
//!
//! [`ResizeGesture`] remembers the last accepted box. Each proposed step is
//! run through the resize clamp and becomes the new accepted box only if it
//! fits.

use kurbo::{Point, Vec2};
use understory_contain::{Constraints, ShapeBox};

/// Pointer tracking for a drag of one shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGesture {
    /// Pointer position at press time.
    pub start_pos: Point,
    /// Last recorded pointer position.
    pub last_pos: Point,
    /// Shape anchor at press time.
    pub start_anchor: Point,
    moved: bool,
}

impl DragGesture {
    /// Starts tracking a drag pressed at `pointer` on a shape anchored at `anchor`.
    #[must_use]
    pub fn new(pointer: Point, anchor: Point) -> Self {
        Self {
            start_pos: pointer,
            last_pos: pointer,
            start_anchor: anchor,
            moved: false,
        }
    }

    /// Records a new pointer position, returning the delta since the last one.
    pub fn update(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        if delta != Vec2::ZERO {
            self.moved = true;
        }
        delta
    }

    /// Offset of the last pointer position from the press position.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.last_pos - self.start_pos
    }

    /// The anchor position implied by the pointer, before clamping.
    #[must_use]
    pub fn attempted_anchor(&self) -> Point {
        self.start_anchor + self.total_offset()
    }

    /// Returns `true` once the pointer has moved at all since the press.
    ///
    /// A gesture that never moved is a click, not a drag.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }
}

/// The accepted state of an in-progress resize/rotate gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeGesture {
    /// Box at the start of the gesture.
    pub start: ShapeBox,
    /// Last accepted box; what the rendering layer should preview.
    pub accepted: ShapeBox,
}

impl ResizeGesture {
    /// Starts a gesture from the committed box.
    #[must_use]
    pub fn new(start: ShapeBox) -> Self {
        Self {
            start,
            accepted: start,
        }
    }

    /// Evaluates a proposed step, returning the box to preview.
    ///
    /// Returns `true` alongside the box if the step was accepted.
    pub fn step(&mut self, proposed: ShapeBox, constraints: &Constraints) -> (ShapeBox, bool) {
        if constraints.fits(proposed) {
            self.accepted = proposed;
            (proposed, true)
        } else {
            (self.accepted, false)
        }
    }

    /// The box to commit when the gesture ends, with the size floor applied.
    #[must_use]
    pub fn finish(&self, constraints: &Constraints) -> ShapeBox {
        constraints.finish_resize(self.accepted)
    }
}
