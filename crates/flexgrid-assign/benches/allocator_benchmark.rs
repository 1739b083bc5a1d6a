// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fixedbitset::FixedBitSet;
use flexgrid_assign::spectrum;
use flexgrid_assign::strategy::{
    AllocationRequest, AllocationStrategy, HighToLow, LowToHigh,
};
use flexgrid_model::grid::Grid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Builds a C-band availability mask with roughly `occupied_ratio` of the
/// slots cleared, deterministic across runs.
fn random_occupancy(grid: &Grid, occupied_ratio: f64, seed: u64) -> FixedBitSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bits = spectrum::all_free(grid.total_slots());
    for slot in 0..grid.total_slots() {
        if rng.random_bool(occupied_ratio) {
            bits.remove(slot);
        }
    }
    bits
}

fn bench_strategies(c: &mut Criterion) {
    let grid = Grid::c_band();
    let base_index = grid
        .reference_index(flexgrid_model::grid::anchor_frequency())
        .expect("the C-band grid anchors at 193.1 THz");

    let strategies: [&dyn AllocationStrategy; 2] = [&HighToLow, &LowToHigh];
    let mut group = c.benchmark_group("allocator_benchmark");

    for occupied_ratio in [0.0, 0.5, 0.9] {
        let occupancy = random_occupancy(&grid, occupied_ratio, 0x5eed);
        for strategy in strategies {
            let request = AllocationRequest {
                total_slots: grid.total_slots(),
                base_index,
                occupancy: &occupancy,
                center_granularity_slots: 8,
                service_width_slots: 8,
            };

            group.bench_with_input(
                BenchmarkId::new(strategy.name(), format!("occupied-{occupied_ratio}")),
                &request,
                |b, request| {
                    b.iter(|| strategy.search(black_box(request)).unwrap());
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
