// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_contain --heading-base-level=0

//! Understory Contain: keep rotated rectangles inside a fixed viewport.
//!
//! This crate is the geometry core of an interactive shape editor in which
//! shapes can be dragged, resized and rotated but must never leave the
//! viewport, including the corners a rotation swings outward. It provides:
//! - The axis-aligned envelope of a rectangle rotated about its top-left
//!   corner ([`rotated_bounding_box`]).
//! - Drag clamping: the corrected anchor position for an attempted move
//!   ([`drag_target`]).
//! - Resize evaluation: accept a proposed box, or keep the previous one if
//!   the proposal's envelope would leave the viewport ([`evaluate_resize`]),
//!   plus the size floor applied when the gesture ends ([`finish_resize`]).
//!
//! Every function is pure and bounded-time. The crate holds no shape state,
//! owns no scene graph and does not dispatch events. Callers are expected to:
//! - Keep their own shape list and selection (see `understory_shape_editor`
//!   for a ready-made store).
//! - Report each attempted move or resize step and apply the returned
//!   position or box.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_contain::{Constraints, ShapeBox, Viewport, rotated_bounding_box};
//!
//! let constraints = Constraints::new(Viewport::new(600.0, 400.0));
//! let shape = ShapeBox::new(150.0, 150.0, 100.0, 100.0);
//!
//! // Drag the shape so it would stick out 50 px on the right.
//! let attempted = shape.with_origin(Point::new(550.0, 150.0));
//! let rendered = rotated_bounding_box(attempted);
//! let anchor = constraints.drag_target(rendered, attempted.origin());
//! assert_eq!(anchor, Point::new(500.0, 150.0));
//!
//! // A resize step that would cross the left edge is rejected outright.
//! let proposed = ShapeBox::new(-10.0, 150.0, 100.0, 100.0);
//! assert_eq!(constraints.evaluate_resize(shape, proposed), shape);
//!
//! // Ending a resize lifts a collapsed width to the floor.
//! let committed = constraints.finish_resize(ShapeBox::new(150.0, 150.0, 2.0, 100.0));
//! assert_eq!(committed.width, 5.0);
//! ```
//!
//! ## Conventions
//!
//! - A [`ShapeBox`] rotates about its anchor (`x`, `y`), not its center.
//! - Angles are radians, positive clockwise on screen (y axis down).
//! - The viewport origin is `(0, 0)`; containment is edge-inclusive.
//! - Inputs are assumed finite. [`ShapeBox::validate`] and
//!   [`Viewport::try_new`] are available for callers that want to check.
//!
//! This crate is `no_std`.

#![no_std]

mod constraints;
pub mod drag;
pub mod geometry;
mod modes;
pub mod resize;
mod types;

pub use constraints::Constraints;
pub use drag::drag_target;
pub use geometry::{rotate_point, rotated_bounding_box, union_all, union_box};
pub use modes::{OversizePolicy, SizeFloor};
pub use resize::{envelope_fits, evaluate_resize, finish_resize};
pub use types::{InvalidGeometry, ShapeBox, Viewport};
