// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_shape_editor --heading-base-level=0

//! Understory Shape Editor: shape state and gesture wiring for contained editing.
//!
//! This crate is the stateful layer on top of `understory_contain`. It keeps
//! the authoritative geometry of every shape and turns pointer gestures into
//! clamped, committed boxes. The pieces are:
//!
//! - [`ShapeStore`]: committed [`ShapeBox`](understory_contain::ShapeBox) per
//!   shape id, in paint order, with hit testing and a revision counter.
//! - [`gesture`]: small per-gesture trackers for drags and resizes.
//! - [`Stage`]: one viewport with its store and the active gesture. Drags are
//!   clamped every move, resize steps are accepted or rejected every frame,
//!   and only the end of a gesture commits.
//! - [`Editor`]: a controller owning several stages and one shared selection,
//!   routing pointer presses, moves, and releases.
//!
//! The crate does not render and does not own an event loop. The caller
//! forwards pointer events, draws from [`Stage::live_box`] or the store, and
//! proposes resize frames from its own transform handles.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use peniko::Color;
//! use understory_contain::{ShapeBox, Viewport};
//! use understory_shape_editor::{Editor, PointerDown, PointerUp, Shape, Stage};
//!
//! let mut stage = Stage::new(Viewport::new(600.0, 400.0));
//! stage
//!     .insert(Shape::new("rect", ShapeBox::new(150.0, 150.0, 100.0, 100.0), Color::WHITE))
//!     .unwrap();
//!
//! let mut editor = Editor::new();
//! let canvas = editor.add_stage(stage);
//!
//! // Press on the shape and drag it far to the right.
//! let down = editor.pointer_down(canvas, Point::new(200.0, 200.0)).unwrap();
//! assert_eq!(down, PointerDown::Shape("rect"));
//! let preview = editor.pointer_move(canvas, Point::new(600.0, 200.0)).unwrap();
//! assert_eq!(preview.map(|b| b.x), Some(500.0));
//!
//! // Releasing commits the clamped position.
//! let up = editor.pointer_up(canvas).unwrap();
//! assert!(matches!(up, PointerUp::Dropped { id: "rect", .. }));
//! let stored = editor.stage(canvas).unwrap().shapes().get(&"rect").unwrap();
//! assert_eq!(stored.x, 500.0);
//! ```
//!
//! ## Logging
//!
//! Commits and selection changes are logged at `debug` level and clamp
//! corrections and rejected resize steps at `trace` level, through the `log`
//! facade. Install any logger to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod editor;
mod error;
pub mod gesture;
mod stage;
mod store;

pub use editor::{Editor, PointerDown, PointerUp, StageId};
pub use error::EditError;
pub use stage::{DragEnd, Stage};
pub use store::{Shape, ShapeStore};
