// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag clamping: keep a moving shape's rendered extent inside the viewport.
//!
//! During a drag the shape's size and rotation are fixed, so the offset
//! between its anchor and the top-left of its rendered envelope is constant.
//! A single corrective pass per axis is therefore enough: each edge that
//! sticks out is pinned back to the matching viewport edge by moving the
//! anchor.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_contain::{OversizePolicy, Viewport, drag_target};
//!
//! let viewport = Viewport::new(600.0, 400.0);
//! // A 100x100 shape dragged 50 px past the right edge.
//! let rendered = Rect::new(550.0, 150.0, 650.0, 250.0);
//! let anchor = Point::new(550.0, 150.0);
//!
//! let corrected = drag_target(rendered, anchor, viewport, OversizePolicy::default());
//! assert_eq!(corrected, Point::new(500.0, 150.0));
//! ```

use kurbo::{Point, Rect};

use crate::modes::OversizePolicy;
use crate::types::Viewport;

/// Computes the anchor position that keeps `rendered` inside `viewport`.
///
/// `rendered` is the shape's on-screen envelope at the attempted position
/// (already reflecting rotation) and `anchor` is the attempted anchor. The
/// returned anchor equals `anchor` on every axis where the envelope already
/// fits.
///
/// If the envelope is larger than the viewport on an axis, `policy` decides
/// which edge is pinned.
#[must_use]
pub fn drag_target(
    rendered: Rect,
    anchor: Point,
    viewport: Viewport,
    policy: OversizePolicy,
) -> Point {
    let offset = rendered.origin() - anchor;
    let x = clamp_axis(
        anchor.x,
        rendered.min_x(),
        rendered.width(),
        offset.x,
        viewport.width,
        policy,
    );
    let y = clamp_axis(
        anchor.y,
        rendered.min_y(),
        rendered.height(),
        offset.y,
        viewport.height,
        policy,
    );
    Point::new(x, y)
}

fn clamp_axis(
    anchor: f64,
    start: f64,
    extent: f64,
    offset: f64,
    limit: f64,
    policy: OversizePolicy,
) -> f64 {
    let below = start < 0.0;
    let above = start + extent > limit;
    let pin_min = -offset;
    let pin_max = limit - extent - offset;
    match (below, above, policy) {
        (true, true, OversizePolicy::PreferMax) => pin_max,
        (true, true, OversizePolicy::PreferMin) => pin_min,
        (true, false, _) => pin_min,
        (false, true, _) => pin_max,
        (false, false, _) => anchor,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::drag_target;
    use crate::{OversizePolicy, Viewport};

    const VIEWPORT: Viewport = Viewport::new(600.0, 400.0);

    #[test]
    fn contained_extent_is_left_alone() {
        let rendered = Rect::new(150.0, 150.0, 250.0, 250.0);
        let anchor = Point::new(150.0, 150.0);
        assert_eq!(
            drag_target(rendered, anchor, VIEWPORT, OversizePolicy::PreferMax),
            anchor
        );
    }

    #[test]
    fn each_edge_is_pinned() {
        let policy = OversizePolicy::default();
        // Left.
        let p = drag_target(
            Rect::new(-20.0, 10.0, 80.0, 110.0),
            Point::new(-20.0, 10.0),
            VIEWPORT,
            policy,
        );
        assert_eq!(p, Point::new(0.0, 10.0));
        // Top.
        let p = drag_target(
            Rect::new(10.0, -5.0, 110.0, 95.0),
            Point::new(10.0, -5.0),
            VIEWPORT,
            policy,
        );
        assert_eq!(p, Point::new(10.0, 0.0));
        // Bottom-right corner at once.
        let p = drag_target(
            Rect::new(580.0, 390.0, 680.0, 490.0),
            Point::new(580.0, 390.0),
            VIEWPORT,
            policy,
        );
        assert_eq!(p, Point::new(500.0, 300.0));
    }

    #[test]
    fn offset_between_anchor_and_envelope_is_preserved() {
        // A rotated shape whose envelope starts 30 px left of its anchor.
        let rendered = Rect::new(-10.0, 50.0, 90.0, 150.0);
        let anchor = Point::new(20.0, 50.0);
        let p = drag_target(rendered, anchor, VIEWPORT, OversizePolicy::default());
        // Envelope left edge lands on 0, so the anchor sits 30 px to its right.
        assert_eq!(p, Point::new(30.0, 50.0));
    }

    #[test]
    fn oversized_extent_follows_policy() {
        let rendered = Rect::new(-10.0, 0.0, 690.0, 100.0);
        let anchor = Point::new(-10.0, 0.0);

        let max = drag_target(rendered, anchor, VIEWPORT, OversizePolicy::PreferMax);
        assert_eq!(max, Point::new(-100.0, 0.0));

        let min = drag_target(rendered, anchor, VIEWPORT, OversizePolicy::PreferMin);
        assert_eq!(min, Point::new(0.0, 0.0));
    }
}
