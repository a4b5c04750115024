// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape and viewport geometry.

use core::fmt;

use kurbo::{Affine, Point, Rect, Size};

/// A rectangle positioned by its top-left corner and rotated about that corner.
///
/// `x`/`y` is the anchor: the top-left corner in the shape's unrotated local
/// frame, which is also the rotation pivot. `rotation` is in radians and is
/// positive in the screen-space sense (y axis pointing down), so a positive
/// angle turns the shape clockwise on screen.
///
/// No constraint is placed on `rotation`; callers may normalize it modulo
/// 2π but nothing here requires it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShapeBox {
    /// Anchor x coordinate.
    pub x: f64,
    /// Anchor y coordinate.
    pub y: f64,
    /// Unrotated width.
    pub width: f64,
    /// Unrotated height.
    pub height: f64,
    /// Rotation about the anchor, in radians.
    pub rotation: f64,
}

impl ShapeBox {
    /// Creates an unrotated box.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
        }
    }

    /// Returns a copy of this box with the given rotation.
    #[must_use]
    pub const fn with_rotation(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }

    /// Returns a copy of this box moved so its anchor sits at `origin`.
    ///
    /// Size and rotation are unchanged.
    #[must_use]
    pub fn with_origin(self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self
        }
    }

    /// The anchor (rotation pivot) of the box.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The unrotated size of the box.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The local-to-viewport transform: rotate about the origin, then move to the anchor.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.origin().to_vec2()) * Affine::rotate(self.rotation)
    }

    /// Returns `true` if `pt` (in viewport coordinates) lies inside the rotated rectangle.
    ///
    /// Edges are inclusive.
    #[must_use]
    pub fn contains_point(&self, pt: Point) -> bool {
        let local = self.transform().inverse() * pt;
        local.x >= 0.0 && local.y >= 0.0 && local.x <= self.width && local.y <= self.height
    }

    /// Checks that every field is finite and that the size is non-negative.
    pub fn validate(&self) -> Result<(), InvalidGeometry> {
        let fields = [self.x, self.y, self.width, self.height, self.rotation];
        if !fields.iter().all(|v| v.is_finite()) {
            return Err(InvalidGeometry::NonFinite);
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(InvalidGeometry::NegativeSize);
        }
        Ok(())
    }
}

/// The fixed region every shape envelope must stay inside.
///
/// The origin is always `(0, 0)`; the region extends to `(width, height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport without checking its dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a viewport, rejecting non-finite or negative dimensions.
    pub fn try_new(width: f64, height: f64) -> Result<Self, InvalidGeometry> {
        if !width.is_finite() || !height.is_finite() {
            return Err(InvalidGeometry::NonFinite);
        }
        if width < 0.0 || height < 0.0 {
            return Err(InvalidGeometry::NegativeSize);
        }
        Ok(Self { width, height })
    }

    /// The viewport as a rectangle anchored at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Returns `true` if `rect` lies entirely inside the viewport (edges inclusive).
    #[must_use]
    pub fn contains_rect(&self, rect: Rect) -> bool {
        !(rect.min_x() < 0.0
            || rect.min_y() < 0.0
            || rect.max_x() > self.width
            || rect.max_y() > self.height)
    }
}

impl From<Size> for Viewport {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Geometry rejected by the checked constructors and [`ShapeBox::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidGeometry {
    /// A coordinate, dimension, or angle was NaN or infinite.
    NonFinite,
    /// A width or height was below zero.
    NegativeSize,
}

impl fmt::Display for InvalidGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => f.write_str("geometry contains a non-finite value"),
            Self::NegativeSize => f.write_str("geometry has a negative width or height"),
        }
    }
}

impl core::error::Error for InvalidGeometry {}
