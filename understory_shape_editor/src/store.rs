// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Authoritative shape geometry.
//!
//! [`ShapeStore`] holds the committed [`ShapeBox`] of every shape on a stage.
//! It is the single source the rendering layer redraws from; clamps produce
//! corrected boxes and callers [`commit`](ShapeStore::commit) them here.
//!
//! The store does not check containment. Validation against the viewport is
//! the job of the drag and resize clamps before a box is committed.

use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;
use understory_contain::ShapeBox;

use crate::error::EditError;

/// A rectangle on a stage: an opaque id, its geometry, and a fill color.
#[derive(Clone, Debug)]
pub struct Shape<K> {
    /// Caller-chosen identifier, unique within a store.
    pub id: K,
    /// Committed geometry.
    pub bounds: ShapeBox,
    /// Fill color used by the rendering layer.
    pub fill: Color,
}

impl<K> Shape<K> {
    /// Creates a shape.
    #[must_use]
    pub const fn new(id: K, bounds: ShapeBox, fill: Color) -> Self {
        Self { id, bounds, fill }
    }
}

/// Shapes of one stage in paint order, with a revision counter.
///
/// Shapes are kept in insertion order, which is also paint order: the last
/// shape is drawn on top and wins hit tests. Like `understory_selection`,
/// ids only need equality, so lookups scan; stages hold a handful of shapes.
///
/// The revision bumps whenever a stored box actually changes or a shape is
/// added, so a renderer can skip redraws when it is unchanged.
#[derive(Clone, Debug)]
pub struct ShapeStore<K> {
    shapes: Vec<Shape<K>>,
    revision: u64,
}

impl<K> Default for ShapeStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ShapeStore<K> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shapes: Vec::new(),
            revision: 0,
        }
    }

    /// Returns the number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates over shapes in paint order (bottom first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Shape<K>> {
        self.shapes.iter()
    }

    /// Returns the revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<K: PartialEq> ShapeStore<K> {
    /// Adds a shape on top of the existing ones.
    ///
    /// Fails if the id is already present or the geometry is not finite with
    /// a non-negative size.
    pub fn insert(&mut self, shape: Shape<K>) -> Result<(), EditError> {
        shape.bounds.validate()?;
        if self.contains(&shape.id) {
            return Err(EditError::DuplicateShape);
        }
        self.shapes.push(shape);
        self.revision = self.revision.wrapping_add(1);
        Ok(())
    }

    /// Returns `true` if a shape with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.shapes.iter().any(|s| &s.id == id)
    }

    /// Returns the shape with `id`.
    #[must_use]
    pub fn shape(&self, id: &K) -> Option<&Shape<K>> {
        self.shapes.iter().find(|s| &s.id == id)
    }

    /// Returns the committed box of the shape with `id`.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<ShapeBox> {
        self.shape(id).map(|s| s.bounds)
    }

    /// Replaces the committed box of the shape with `id`.
    ///
    /// Containment is not checked. The revision only bumps if the box differs
    /// from the stored one.
    pub fn commit(&mut self, id: &K, bounds: ShapeBox) -> Result<(), EditError> {
        let shape = self
            .shapes
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or(EditError::UnknownShape)?;
        if shape.bounds != bounds {
            shape.bounds = bounds;
            self.revision = self.revision.wrapping_add(1);
        }
        Ok(())
    }

    /// Returns the id of the topmost shape whose rotated rectangle contains `pt`.
    #[must_use]
    pub fn hit_test(&self, pt: Point) -> Option<&K> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.bounds.contains_point(pt))
            .map(|s| &s.id)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Point;
    use peniko::Color;
    use understory_contain::{InvalidGeometry, ShapeBox};

    use super::{Shape, ShapeStore};
    use crate::EditError;

    fn square(id: u32, x: f64, y: f64) -> Shape<u32> {
        Shape::new(id, ShapeBox::new(x, y, 100.0, 100.0), Color::WHITE)
    }

    #[test]
    fn insert_rejects_duplicates_and_bad_geometry() {
        let mut store = ShapeStore::new();
        assert_eq!(store.insert(square(1, 0.0, 0.0)), Ok(()));
        assert_eq!(
            store.insert(square(1, 50.0, 50.0)),
            Err(EditError::DuplicateShape)
        );
        assert_eq!(
            store.insert(Shape::new(
                2,
                ShapeBox::new(0.0, 0.0, -1.0, 1.0),
                Color::WHITE
            )),
            Err(EditError::InvalidGeometry(InvalidGeometry::NegativeSize))
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn commit_replaces_box_and_bumps_revision_only_on_change() {
        let mut store = ShapeStore::new();
        store.insert(square(7, 150.0, 150.0)).unwrap();
        let rev = store.revision();

        let moved = ShapeBox::new(500.0, 150.0, 100.0, 100.0);
        store.commit(&7, moved).unwrap();
        assert_eq!(store.get(&7), Some(moved));
        assert_eq!(store.revision(), rev + 1);

        store.commit(&7, moved).unwrap();
        assert_eq!(store.revision(), rev + 1);

        assert_eq!(store.commit(&8, moved), Err(EditError::UnknownShape));
    }

    #[test]
    fn iter_runs_in_paint_order_both_ways() {
        let mut store = ShapeStore::new();
        store.insert(square(1, 0.0, 0.0)).unwrap();
        store.insert(square(2, 10.0, 10.0)).unwrap();
        store.insert(square(3, 20.0, 20.0)).unwrap();

        let ids: Vec<u32> = store.iter().map(|s| s.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        let topmost_first: Vec<u32> = store.iter().rev().map(|s| s.id).collect();
        assert_eq!(topmost_first, [3, 2, 1]);
    }

    #[test]
    fn commit_does_not_check_containment() {
        let mut store = ShapeStore::new();
        store.insert(square(1, 0.0, 0.0)).unwrap();
        let outside = ShapeBox::new(-500.0, -500.0, 10.0, 10.0);
        store.commit(&1, outside).unwrap();
        assert_eq!(store.get(&1), Some(outside));
    }

    #[test]
    fn hit_test_prefers_topmost_and_respects_rotation() {
        let mut store = ShapeStore::new();
        store.insert(square(1, 0.0, 0.0)).unwrap();
        store.insert(square(2, 50.0, 50.0)).unwrap();

        assert_eq!(store.hit_test(Point::new(75.0, 75.0)), Some(&2));
        assert_eq!(store.hit_test(Point::new(25.0, 25.0)), Some(&1));
        assert_eq!(store.hit_test(Point::new(300.0, 300.0)), None);

        // Turn shape 2 a quarter turn: it now extends left of its anchor.
        let turned = store
            .get(&2)
            .unwrap()
            .with_rotation(core::f64::consts::FRAC_PI_2);
        store.commit(&2, turned).unwrap();
        assert_eq!(store.hit_test(Point::new(120.0, 75.0)), None);
        assert_eq!(store.hit_test(Point::new(25.0, 75.0)), Some(&2));
    }
}
