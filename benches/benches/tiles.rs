// Copyright 2025 the Boundless Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use boundless_tiles::{TileProvider, TileScheduler};
use boundless_view::{BlockCoordinate, BlockRange};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use hashbrown::HashSet;

struct CountingProvider(u64);

impl TileProvider for CountingProvider {
    fn request_tile(&mut self, _coord: BlockCoordinate) {
        self.0 += 1;
    }
}

fn window(start_x: i64, width: i64, height: i64) -> HashSet<BlockCoordinate> {
    BlockRange {
        start_x,
        end_x: start_x + width,
        start_y: 0,
        end_y: height,
    }
    .neighbors()
    .collect()
}

fn bench_tiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundless_tiles");

    for &(width, height) in &[(3_i64, 3_i64), (8, 6), (24, 16)] {
        // A window sliding one column per frame across 128 frames.
        let frames: Vec<_> = (0..128).map(|x| window(x, width, height)).collect();
        group.bench_function(format!("sync_sliding_window({width}x{height})"), |b| {
            b.iter_batched(
                TileScheduler::<u32>::new,
                |mut scheduler| {
                    let mut provider = CountingProvider(0);
                    for visible in &frames {
                        scheduler.sync(visible, &mut provider);
                    }
                    black_box(provider.0);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tiles);
criterion_main!(benches);
