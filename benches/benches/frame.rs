// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use boundless_gesture::{PanZoomController, PointerButton};
use boundless_view::{Layout, ViewportEngine, Viewer, resolve_layout, visible_blocks};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

fn loaded_viewer(container: Size) -> Viewer {
    let mut viewer = Viewer::default();
    viewer
        .set_natural_size(Size::new(1600.0, 1200.0))
        .expect("valid image size");
    viewer
        .set_container_size(container)
        .expect("valid container size");
    viewer
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundless_frame");

    group.bench_function("resolve_layout", |b| {
        b.iter(|| {
            resolve_layout(
                black_box(Size::new(1600.0, 1200.0)),
                black_box(Size::new(1280.0, 720.0)),
            )
        });
    });

    for &scale in &[0.25_f64, 1.0, 4.0] {
        let viewer = {
            let mut v = loaded_viewer(Size::new(1280.0, 720.0));
            let center = v.engine().viewport_center();
            v.engine_mut()
                .zoom_at(center, scale)
                .expect("finite positive factor");
            v.engine_mut().pan_by(-2500.0, 1300.0);
            v
        };
        group.bench_function(format!("viewer_visible_blocks(scale={scale})"), |b| {
            b.iter(|| black_box(viewer.visible_blocks().len()));
        });
    }

    let layout = Layout {
        display_size: Size::new(200.0, 150.0),
        offset: Point::new(540.0, 285.0),
    };
    let mut engine = ViewportEngine::default();
    engine.set_viewport_size(Size::new(1920.0, 1080.0));
    engine
        .zoom_at(Point::ZERO, 0.25)
        .expect("finite positive factor");
    let transform = engine.transform();
    group.bench_function("visible_blocks(small_blocks,zoomed_out)", |b| {
        b.iter(|| {
            black_box(visible_blocks(
                &layout,
                &transform,
                black_box(Size::new(1920.0, 1080.0)),
            ))
        });
    });

    // One drag gesture followed by a wheel notch, as a host would feed them.
    group.bench_function("drag_then_wheel(64 moves)", |b| {
        b.iter_batched(
            || {
                let mut engine = ViewportEngine::default();
                engine.set_viewport_size(Size::new(1280.0, 720.0));
                (engine, PanZoomController::default())
            },
            |(mut engine, mut input)| {
                input.pointer_down(Point::new(640.0, 360.0), PointerButton::Primary);
                for i in 0..64 {
                    let step = f64::from(i);
                    input.pointer_move(Point::new(640.0 - step * 7.0, 360.0 + step), &mut engine);
                }
                input.pointer_up();
                input
                    .wheel(Point::new(100.0, 100.0), -1.0, &mut engine)
                    .expect("default wheel steps are valid");
                black_box(engine.transform());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
