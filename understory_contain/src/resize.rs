// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize/rotate step evaluation.
//!
//! Each intermediate frame of a transform gesture proposes a new box. The
//! proposal is accepted only if its rotated envelope stays inside the
//! viewport; otherwise the previous box is kept unchanged. There is no
//! partial correction: a rejected step simply does not progress.

use crate::geometry::rotated_bounding_box;
use crate::modes::SizeFloor;
use crate::types::{ShapeBox, Viewport};

/// Returns `true` if the rotated envelope of `candidate` lies inside `viewport`.
#[must_use]
pub fn envelope_fits(candidate: ShapeBox, viewport: Viewport) -> bool {
    viewport.contains_rect(rotated_bounding_box(candidate))
}

/// Accepts `new` if its rotated envelope fits `viewport`, otherwise returns `old`.
///
/// ```
/// use understory_contain::{ShapeBox, Viewport, evaluate_resize};
///
/// let viewport = Viewport::new(600.0, 400.0);
/// let old = ShapeBox::new(150.0, 150.0, 100.0, 100.0);
///
/// let grown = ShapeBox::new(150.0, 150.0, 120.0, 100.0);
/// assert_eq!(evaluate_resize(old, grown, viewport), grown);
///
/// let escaped = ShapeBox::new(-10.0, 150.0, 100.0, 100.0);
/// assert_eq!(evaluate_resize(old, escaped, viewport), old);
/// ```
#[must_use]
pub fn evaluate_resize(old: ShapeBox, new: ShapeBox, viewport: Viewport) -> ShapeBox {
    if envelope_fits(new, viewport) {
        new
    } else {
        old
    }
}

/// Applies the commit-time size floor to the final box of a resize gesture.
///
/// Position and rotation pass through unchanged. The floor is applied
/// without a containment check, so a box accepted flush against the far edge
/// can end up past it.
#[must_use]
pub fn finish_resize(accepted: ShapeBox, floor: SizeFloor) -> ShapeBox {
    ShapeBox {
        width: accepted.width.max(floor.min_width),
        height: accepted.height.max(floor.min_height),
        ..accepted
    }
}
