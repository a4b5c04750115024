// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared selection across two canvases.
//!
//! Two stacked 600x400 canvases each hold one rectangle. Selecting on one
//! canvas deselects the other, and only the selected rectangle accepts
//! resize gestures.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example shared_selection`

use kurbo::Point;
use peniko::color::palette::css;
use understory_contain::{ShapeBox, Viewport};
use understory_shape_editor::{EditError, Editor, Shape, Stage};

fn main() -> Result<(), EditError> {
    env_logger::init();

    let viewport = Viewport::new(600.0, 400.0);
    let start = ShapeBox::new(150.0, 150.0, 100.0, 100.0);

    let mut top = Stage::new(viewport);
    top.insert(Shape::new("rect2", start, css::GREEN))?;
    let mut bottom = Stage::new(viewport);
    bottom.insert(Shape::new("rect1", start, css::RED))?;

    let mut editor = Editor::new();
    let top = editor.add_stage(top);
    let bottom = editor.add_stage(bottom);

    let inside = Point::new(200.0, 200.0);
    editor.pointer_down(top, inside)?;
    editor.pointer_up(top)?;
    println!("after clicking the top canvas: {:?}", editor.selected());

    match editor.resize_begin(bottom) {
        Ok(()) => println!("bottom canvas resize started"),
        Err(err) => println!("bottom canvas resize refused: {err}"),
    }

    editor.pointer_down(bottom, inside)?;
    editor.pointer_up(bottom)?;
    println!("after clicking the bottom canvas: {:?}", editor.selected());
    editor.resize_begin(bottom)?;
    editor.resize_step(bottom, ShapeBox { height: 180.0, ..start })?;
    let committed = editor.resize_end(bottom)?;
    println!("bottom rectangle committed as {committed:?}");

    for (id, stage) in editor.stages() {
        for shape in stage.shapes().iter() {
            println!(
                "stage {} / {}: {:?} (revision {})",
                id.index(),
                shape.id,
                shape.bounds,
                stage.shapes().revision()
            );
        }
    }
    Ok(())
}
