// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;
use understory_contain::{Constraints, ShapeBox, Viewport, rotated_bounding_box};

use crate::error::EditError;
use crate::gesture::{DragGesture, ResizeGesture};
use crate::store::{Shape, ShapeStore};

/// One editing surface: a viewport, its shapes, and at most one active gesture.
///
/// A stage turns pointer-level input into clamped geometry:
/// - Drags: [`Stage::begin_drag`], then [`Stage::drag_to`] per move, then
///   [`Stage::end_drag`] to commit.
/// - Resizes/rotations: [`Stage::begin_resize`], then [`Stage::resize_step`]
///   per frame, then [`Stage::end_resize`] to commit with the size floor.
///
/// While a gesture runs, the stored box is untouched and the in-flight box is
/// available from [`Stage::live_box`]. Only the end of a gesture commits.
///
/// Selection is not tracked here; see [`crate::Editor`].
#[derive(Clone, Debug)]
pub struct Stage<K> {
    constraints: Constraints,
    shapes: ShapeStore<K>,
    gesture: Gesture<K>,
}

#[derive(Clone, Debug)]
enum Gesture<K> {
    Idle,
    Drag {
        id: K,
        drag: DragGesture,
        live: ShapeBox,
    },
    Resize {
        id: K,
        resize: ResizeGesture,
    },
}

/// Result of ending a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEnd<K> {
    /// The shape that was pressed.
    pub id: K,
    /// Whether the pointer moved between press and release.
    ///
    /// A press without movement is a click; nothing is committed for it.
    pub moved: bool,
    /// The shape's stored box after the gesture.
    pub bounds: ShapeBox,
}

impl<K> Stage<K> {
    /// Creates an empty stage over `viewport` with default policies.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_constraints(Constraints::new(viewport))
    }

    /// Creates an empty stage with explicit constraints.
    #[must_use]
    pub fn with_constraints(constraints: Constraints) -> Self {
        Self {
            constraints,
            shapes: ShapeStore::new(),
            gesture: Gesture::Idle,
        }
    }

    /// Returns the active constraints.
    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Returns the viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.constraints.viewport
    }

    /// Replaces the viewport.
    ///
    /// Existing shapes are not re-clamped; a shape left outside stays there
    /// until a gesture moves it.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.constraints.viewport = viewport;
    }

    /// Replaces all constraints, including the viewport.
    pub fn set_constraints(&mut self, constraints: Constraints) {
        self.constraints = constraints;
    }

    /// Returns the shape store.
    #[must_use]
    pub fn shapes(&self) -> &ShapeStore<K> {
        &self.shapes
    }

    /// Returns the shape store for direct edits.
    ///
    /// Commits made here bypass the clamps.
    pub fn shapes_mut(&mut self) -> &mut ShapeStore<K> {
        &mut self.shapes
    }

    /// Returns `true` while a drag or resize is active.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        !matches!(self.gesture, Gesture::Idle)
    }

    /// The shape targeted by the active gesture, if any.
    #[must_use]
    pub fn active_shape(&self) -> Option<&K> {
        match &self.gesture {
            Gesture::Idle => None,
            Gesture::Drag { id, .. } | Gesture::Resize { id, .. } => Some(id),
        }
    }
}

impl<K: PartialEq + Clone + fmt::Debug> Stage<K> {
    /// Adds a shape on top of the others.
    ///
    /// The shape is not clamped into the viewport.
    pub fn insert(&mut self, shape: Shape<K>) -> Result<(), EditError> {
        self.shapes.insert(shape)
    }

    /// Returns the topmost shape under `pt`, using in-flight boxes during a gesture.
    #[must_use]
    pub fn hit_test(&self, pt: Point) -> Option<&K> {
        self.shapes
            .iter()
            .rev()
            .find(|s| {
                self.live_box(&s.id)
                    .is_some_and(|bounds| bounds.contains_point(pt))
            })
            .map(|s| &s.id)
    }

    /// The box to render for `id`: the in-flight box during a gesture on it,
    /// otherwise the stored box.
    #[must_use]
    pub fn live_box(&self, id: &K) -> Option<ShapeBox> {
        match &self.gesture {
            Gesture::Drag { id: active, live, .. } if active == id => Some(*live),
            Gesture::Resize { id: active, resize } if active == id => Some(resize.accepted),
            _ => self.shapes.get(id),
        }
    }

    /// Starts dragging `id` from pointer position `pointer`.
    pub fn begin_drag(&mut self, id: &K, pointer: Point) -> Result<(), EditError> {
        if self.is_busy() {
            return Err(EditError::GestureInProgress);
        }
        let bounds = self.shapes.get(id).ok_or(EditError::UnknownShape)?;
        self.gesture = Gesture::Drag {
            id: id.clone(),
            drag: DragGesture::new(pointer, bounds.origin()),
            live: bounds,
        };
        Ok(())
    }

    /// Moves the dragged shape after the pointer, clamped to the viewport.
    ///
    /// Returns the box to preview, or `None` if no drag is active.
    pub fn drag_to(&mut self, pointer: Point) -> Option<ShapeBox> {
        let constraints = self.constraints;
        let Gesture::Drag { id, drag, live } = &mut self.gesture else {
            return None;
        };
        drag.update(pointer);
        let attempted = live.with_origin(drag.attempted_anchor());
        let rendered = rotated_bounding_box(attempted);
        let anchor = constraints.drag_target(rendered, attempted.origin());
        if anchor != attempted.origin() {
            log::trace!(
                "drag of {id:?} clamped from {:?} to {anchor:?}",
                attempted.origin()
            );
        }
        *live = attempted.with_origin(anchor);
        Some(*live)
    }

    /// Ends the drag, committing the last clamped position if the pointer moved.
    ///
    /// Returns `None` if no drag was active.
    pub fn end_drag(&mut self) -> Option<DragEnd<K>> {
        let (id, drag, live) = match core::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Drag { id, drag, live } => (id, drag, live),
            other => {
                self.gesture = other;
                return None;
            }
        };
        let moved = drag.has_moved();
        if moved {
            log::debug!("commit drag of {id:?}: {live:?}");
            let committed = self.shapes.commit(&id, live);
            debug_assert!(committed.is_ok(), "dragged shape left the store mid-gesture");
        }
        let bounds = self.shapes.get(&id)?;
        Some(DragEnd { id, moved, bounds })
    }

    /// Starts a resize/rotate gesture on `id`.
    pub fn begin_resize(&mut self, id: &K) -> Result<(), EditError> {
        if self.is_busy() {
            return Err(EditError::GestureInProgress);
        }
        let bounds = self.shapes.get(id).ok_or(EditError::UnknownShape)?;
        self.gesture = Gesture::Resize {
            id: id.clone(),
            resize: ResizeGesture::new(bounds),
        };
        Ok(())
    }

    /// Evaluates one proposed resize/rotate frame.
    ///
    /// Returns the box to preview: `proposed` if its rotated envelope fits the
    /// viewport, else the last accepted box. Returns `None` if no resize is
    /// active.
    pub fn resize_step(&mut self, proposed: ShapeBox) -> Option<ShapeBox> {
        let Gesture::Resize { id, resize } = &mut self.gesture else {
            return None;
        };
        let (preview, accepted) = resize.step(proposed, &self.constraints);
        if !accepted {
            log::trace!("resize step of {id:?} rejected: {proposed:?}");
        }
        Some(preview)
    }

    /// Ends the resize, committing the last accepted box with the size floor applied.
    ///
    /// Returns the committed box, or `None` if no resize was active.
    pub fn end_resize(&mut self) -> Option<ShapeBox> {
        let Gesture::Resize { id, resize } = &self.gesture else {
            return None;
        };
        let committed = resize.finish(&self.constraints);
        log::debug!("commit resize of {id:?}: {:?} -> {committed:?}", resize.start);
        let id = id.clone();
        self.gesture = Gesture::Idle;
        let stored = self.shapes.commit(&id, committed);
        debug_assert!(stored.is_ok(), "resized shape left the store mid-gesture");
        Some(committed)
    }
}
