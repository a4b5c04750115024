// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containment basics.
//!
//! Replay a short editing session over a 600x400 canvas: drag a rectangle
//! into the right edge, rotate it near a corner, and collapse its width.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example contain_basics`

use kurbo::Point;
use peniko::color::palette::css;
use understory_contain::{ShapeBox, Viewport, rotated_bounding_box};
use understory_shape_editor::{EditError, Editor, PointerUp, Shape, Stage};

fn main() -> Result<(), EditError> {
    env_logger::init();

    let mut stage = Stage::new(Viewport::new(600.0, 400.0));
    stage.insert(Shape::new(
        "rect",
        ShapeBox::new(150.0, 150.0, 100.0, 100.0),
        css::GREEN,
    ))?;
    let mut editor = Editor::new();
    let canvas = editor.add_stage(stage);

    // Click to select, then drag well past the right edge.
    editor.pointer_down(canvas, Point::new(200.0, 200.0))?;
    editor.pointer_up(canvas)?;
    println!("selected: {:?}", editor.selected());

    editor.pointer_down(canvas, Point::new(200.0, 200.0))?;
    for x in [300.0, 450.0, 600.0, 700.0] {
        if let Some(preview) = editor.pointer_move(canvas, Point::new(x, 200.0))? {
            println!("pointer x={x:>5}: shape at x={:>5}", preview.x);
        }
    }
    if let PointerUp::Dropped { bounds, .. } = editor.pointer_up(canvas)? {
        println!("dropped at {:?}", bounds.origin());
    }

    // Rotate in small steps; steps that would swing a corner out are refused.
    editor.resize_begin(canvas)?;
    let mut current = editor
        .stage(canvas)
        .and_then(|s| s.shapes().get(&"rect"))
        .ok_or(EditError::UnknownShape)?;
    for step in 1..=6 {
        let proposed = current.with_rotation(f64::from(step) * 0.15);
        let Some(preview) = editor.resize_step(canvas, proposed)? else {
            break;
        };
        let verdict = if preview == proposed { "ok" } else { "refused" };
        println!(
            "rotate to {:.2} rad: {verdict:<7} envelope {:?}",
            proposed.rotation,
            rotated_bounding_box(proposed)
        );
        current = preview;
    }
    editor.resize_end(canvas)?;

    // Squash the width below the floor; the commit lifts it back.
    editor.resize_begin(canvas)?;
    editor.resize_step(canvas, ShapeBox { width: 2.0, ..current })?;
    if let Some(committed) = editor.resize_end(canvas)? {
        println!("committed width after squash: {}", committed.width);
    }

    // Press on empty canvas to deselect.
    editor.pointer_down(canvas, Point::new(10.0, 10.0))?;
    println!("selected: {:?}", editor.selected());
    Ok(())
}
