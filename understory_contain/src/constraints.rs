// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::modes::{OversizePolicy, SizeFloor};
use crate::types::{ShapeBox, Viewport};
use crate::{drag, resize};

/// A viewport plus the policies used to keep shapes inside it.
///
/// This bundles the configuration shared by drag and resize handling so a
/// caller can hold one value per editing surface. Each method forwards to the
/// matching free function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    /// The containing region.
    pub viewport: Viewport,
    /// Tie-break for drags of shapes larger than the viewport.
    pub oversize: OversizePolicy,
    /// Size floor applied when a resize is committed.
    pub floor: SizeFloor,
}

impl Constraints {
    /// Creates constraints for `viewport` with default policies.
    #[must_use]
    pub const fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            oversize: OversizePolicy::PreferMax,
            floor: SizeFloor::DEFAULT,
        }
    }

    /// Sets the oversize tie-break.
    #[must_use]
    pub const fn with_oversize(mut self, oversize: OversizePolicy) -> Self {
        self.oversize = oversize;
        self
    }

    /// Sets the commit-time size floor.
    #[must_use]
    pub const fn with_floor(mut self, floor: SizeFloor) -> Self {
        self.floor = floor;
        self
    }

    /// See [`drag::drag_target`](crate::drag::drag_target).
    #[must_use]
    pub fn drag_target(&self, rendered: Rect, anchor: Point) -> Point {
        drag::drag_target(rendered, anchor, self.viewport, self.oversize)
    }

    /// See [`resize::evaluate_resize`](crate::resize::evaluate_resize).
    #[must_use]
    pub fn evaluate_resize(&self, old: ShapeBox, new: ShapeBox) -> ShapeBox {
        resize::evaluate_resize(old, new, self.viewport)
    }

    /// See [`resize::envelope_fits`](crate::resize::envelope_fits).
    #[must_use]
    pub fn fits(&self, candidate: ShapeBox) -> bool {
        resize::envelope_fits(candidate, self.viewport)
    }

    /// See [`resize::finish_resize`](crate::resize::finish_resize).
    #[must_use]
    pub fn finish_resize(&self, accepted: ShapeBox) -> ShapeBox {
        resize::finish_resize(accepted, self.floor)
    }
}
