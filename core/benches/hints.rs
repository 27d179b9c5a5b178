use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use pikurosu_core::*;

fn checkerboard(size: Coord) -> SolutionGrid {
    let filled: Vec<Coord2> = (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .filter(|(x, y)| (x + y) % 2 == 0)
        .collect();
    SolutionGrid::from_filled_coords((size, size), &filled).unwrap()
}

fn full_top_row(size: Coord) -> SolutionGrid {
    let filled: Vec<Coord2> = (0..size).map(|x| (x, 0)).collect();
    SolutionGrid::from_filled_coords((size, size), &filled).unwrap()
}

fn bench_hint_compute(c: &mut Criterion) {
    for size in [5, 15, 25] {
        let grid = checkerboard(size);
        c.bench_function(&format!("hints/checkerboard_{size}"), |b| {
            b.iter(|| HintSet::compute(black_box(&grid)))
        });
    }
}

fn bench_row_sweep(c: &mut Criterion) {
    let grid = full_top_row(25);
    c.bench_function("session/sweep_top_row_25", |b| {
        b.iter_batched(
            || PlaySession::new(grid.clone()),
            |mut game| {
                game.pointer_down((0, 0), PointerButton::Primary).unwrap();
                for x in 1..25 {
                    game.pointer_move((x, 0)).unwrap();
                }
                game.pointer_up();
                game
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_hint_compute, bench_row_sweep);
criterion_main!(benches);
