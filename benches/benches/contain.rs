// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use peniko::Color;
use understory_contain::{Constraints, ShapeBox, Viewport, rotated_bounding_box};
use understory_shape_editor::{Shape, Stage};

const VIEWPORT: Viewport = Viewport::new(1_920.0, 1_080.0);

fn boxes(len: usize) -> Vec<ShapeBox> {
    (0..len)
        .map(|i| {
            let f = i as f64;
            ShapeBox::new(f % 1_700.0, (f * 7.0) % 900.0, 40.0 + f % 60.0, 30.0)
                .with_rotation(f * 0.013)
        })
        .collect()
}

fn bench_envelopes(c: &mut Criterion) {
    let mut group = c.benchmark_group("contain/rotated_bounding_box");

    for len in [64usize, 1_024, 16_384] {
        let input = boxes(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            b.iter(|| {
                for bx in input {
                    black_box(rotated_bounding_box(*bx));
                }
            });
        });
    }

    group.finish();
}

fn bench_clamps(c: &mut Criterion) {
    let mut group = c.benchmark_group("contain/clamps");
    let constraints = Constraints::new(VIEWPORT);
    let input = boxes(1_024);
    group.throughput(Throughput::Elements(input.len() as u64));

    group.bench_function("drag_target", |b| {
        b.iter(|| {
            for bx in &input {
                // Pretend every shape was flung 500 px right.
                let attempted = bx.with_origin(bx.origin() + (500.0, 0.0));
                let rendered = rotated_bounding_box(attempted);
                black_box(constraints.drag_target(rendered, attempted.origin()));
            }
        });
    });

    group.bench_function("evaluate_resize", |b| {
        b.iter(|| {
            for bx in &input {
                let grown = ShapeBox {
                    width: bx.width * 3.0,
                    ..*bx
                };
                black_box(constraints.evaluate_resize(*bx, grown));
            }
        });
    });

    group.finish();
}

fn bench_stage_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_editor/stage_drag");

    for len in [16usize, 256] {
        let mut stage = Stage::new(VIEWPORT);
        for (i, bx) in boxes(len).into_iter().enumerate() {
            stage
                .insert(Shape::new(i as u32, bx, Color::WHITE))
                .unwrap_or_else(|e| panic!("insert {i}: {e}"));
        }
        let target = (len / 2) as u32;
        let press = stage.shapes().get(&target).map(|b| b.origin()).unwrap_or_default();

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| {
                stage
                    .begin_drag(&target, press)
                    .unwrap_or_else(|e| panic!("begin_drag: {e}"));
                for step in 0..32 {
                    let pointer = press + (f64::from(step) * 40.0, f64::from(step) * 10.0);
                    black_box(stage.drag_to(pointer));
                }
                black_box(stage.end_drag());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_envelopes, bench_clamps, bench_stage_drag);
criterion_main!(benches);
