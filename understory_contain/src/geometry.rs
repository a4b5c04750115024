// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotation and bounding-box helpers.
//!
//! Everything here is a pure function of its arguments. Inputs are assumed to
//! be finite; see [`ShapeBox::validate`] for an explicit check.

use kurbo::{Point, Rect, Vec2};

use crate::types::ShapeBox;

/// Rotates `pivot + offset` about `pivot` by `angle` radians.
///
/// The rotation is computed in polar form: the offset's length is kept and
/// `angle` is added to its direction. A zero offset yields `pivot` for any
/// angle.
#[must_use]
pub fn rotate_point(pivot: Point, offset: Vec2, angle: f64) -> Point {
    let distance = offset.hypot();
    let direction = angle + offset.atan2();
    pivot + Vec2::from_angle(direction) * distance
}

/// Computes the axis-aligned envelope of a (possibly rotated) box.
///
/// The four corners are rotated about the anchor by `bounds.rotation` and the
/// smallest enclosing rectangle is returned. An unrotated box is returned
/// as-is so that boxes touching a viewport edge are not pushed past it by
/// rounding.
#[must_use]
pub fn rotated_bounding_box(bounds: ShapeBox) -> Rect {
    if bounds.rotation == 0.0 {
        return Rect::from_origin_size(bounds.origin(), bounds.size());
    }
    let pivot = bounds.origin();
    let corners = [
        Vec2::ZERO,
        Vec2::new(bounds.width, 0.0),
        Vec2::new(bounds.width, bounds.height),
        Vec2::new(0.0, bounds.height),
    ]
    .map(|offset| rotate_point(pivot, offset, bounds.rotation));

    let mut min = corners[0];
    let mut max = corners[0];
    for p in &corners[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Rect::new(min.x, min.y, max.x, max.y)
}

/// Normalizes a single axis-aligned box into min-corner/extent form.
///
/// For a box that is already normalized this is the identity. It is the
/// single-input case of [`union_all`].
#[must_use]
pub fn union_box(rect: Rect) -> Rect {
    rect.abs()
}

/// Returns the smallest axis-aligned box enclosing every input box.
///
/// Returns `None` for an empty input.
#[must_use]
pub fn union_all<I>(rects: I) -> Option<Rect>
where
    I: IntoIterator<Item = Rect>,
{
    rects
        .into_iter()
        .map(|r| r.abs())
        .reduce(|acc, r| acc.union(r))
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use kurbo::{Point, Rect, Vec2};

    use super::{rotate_point, rotated_bounding_box, union_all, union_box};
    use crate::ShapeBox;

    const EPS: f64 = 1e-9;

    fn approx_rect(a: Rect, b: Rect) -> bool {
        (a.x0 - b.x0).abs() < EPS
            && (a.y0 - b.y0).abs() < EPS
            && (a.x1 - b.x1).abs() < EPS
            && (a.y1 - b.y1).abs() < EPS
    }

    #[test]
    fn zero_offset_stays_at_pivot() {
        let pivot = Point::new(12.0, -3.0);
        for angle in [0.0, 1.0, PI, -2.5] {
            assert_eq!(rotate_point(pivot, Vec2::ZERO, angle), pivot);
        }
    }

    #[test]
    fn quarter_turn_points_down_the_y_axis() {
        let p = rotate_point(Point::new(10.0, 10.0), Vec2::new(5.0, 0.0), FRAC_PI_2);
        assert!((p.x - 10.0).abs() < EPS);
        assert!((p.y - 15.0).abs() < EPS);
    }

    #[test]
    fn unrotated_box_is_its_own_envelope() {
        let b = ShapeBox::new(150.0, 150.0, 100.0, 100.0);
        assert_eq!(
            rotated_bounding_box(b),
            Rect::new(150.0, 150.0, 250.0, 250.0)
        );
    }

    #[test]
    fn quarter_turn_envelope_swings_left_of_anchor() {
        let b = ShapeBox::new(100.0, 100.0, 40.0, 20.0).with_rotation(FRAC_PI_2);
        let env = rotated_bounding_box(b);
        assert!(approx_rect(env, Rect::new(80.0, 100.0, 100.0, 140.0)));
    }

    #[test]
    fn eighth_turn_envelope_of_square() {
        let b = ShapeBox::new(0.0, 0.0, 10.0, 10.0).with_rotation(FRAC_PI_4);
        let env = rotated_bounding_box(b);
        let half_diag = 10.0 * core::f64::consts::SQRT_2 / 2.0;
        assert!(approx_rect(
            env,
            Rect::new(-half_diag, 0.0, half_diag, 2.0 * half_diag)
        ));
    }

    #[test]
    fn union_box_normalizes_flipped_rect() {
        let flipped = Rect::new(10.0, 20.0, 0.0, 5.0);
        assert_eq!(union_box(flipped), Rect::new(0.0, 5.0, 10.0, 20.0));
        let plain = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(union_box(plain), plain);
    }

    #[test]
    fn union_all_covers_every_input() {
        assert_eq!(union_all(core::iter::empty()), None);
        let u = union_all([
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(-5.0, 20.0, 2.0, 30.0),
        ]);
        assert_eq!(u, Some(Rect::new(-5.0, 0.0, 10.0, 30.0)));
    }

    #[test]
    fn union_all_normalizes_flipped_inputs() {
        let u = union_all([Rect::new(10.0, 10.0, 0.0, 0.0), Rect::new(30.0, 5.0, 20.0, 8.0)]);
        assert_eq!(u, Some(Rect::new(0.0, 0.0, 30.0, 10.0)));
    }
}
