#[macro_use]
extern crate criterion;

use cat_and_mouse::{
    boards,
    minimax::Minimax,
    path::{a_star, bfs_dist},
    run_game, Agent, Strategy,
};
use criterion::{black_box, BenchmarkId, Criterion};
use std::collections::HashSet;
use std::time::Duration;

fn bench_minimax(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.measurement_time(Duration::from_secs(10));

    let small = boards::small().unwrap();
    let big = boards::big().unwrap();

    // Look-ahead cost grows with the branching factor (up to 8 on both boards)
    for depth in [1u32, 3, 5].iter() {
        group.bench_with_input(BenchmarkId::new("small_board/depth", depth), depth, |b, &depth| {
            b.iter(|| {
                let mut search = Minimax::new(&small, depth);
                black_box(search.search(0, 10, Agent::Cat, Agent::Cat))
            })
        });

        group.bench_with_input(BenchmarkId::new("big_board/depth", depth), depth, |b, &depth| {
            b.iter(|| {
                let mut search = Minimax::new(&big, depth);
                black_box(search.search(0, 24, Agent::Cat, Agent::Cat))
            })
        });
    }

    group.finish();
}

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("paths");
    let big = boards::big().unwrap();
    let blocked: HashSet<usize> = [11, 12, 13].into_iter().collect();

    group.bench_function("bfs_corner_to_corner", |b| {
        b.iter(|| black_box(bfs_dist(&big, 0, 24)))
    });

    group.bench_function("a_star_corner_to_corner", |b| {
        b.iter(|| black_box(a_star(&big, 0, 24, &HashSet::new())))
    });

    group.bench_function("a_star_with_wall", |b| {
        b.iter(|| black_box(a_star(&big, 2, 22, &blocked)))
    });

    group.finish();
}

fn bench_games(c: &mut Criterion) {
    let mut group = c.benchmark_group("games");
    group.measurement_time(Duration::from_secs(10));

    let small = boards::small().unwrap();
    let pairings = [
        ("random_vs_astar", Strategy::Random, Strategy::AStar),
        ("minimax_vs_astar", Strategy::minimax(), Strategy::AStar),
        ("astar_vs_minimax", Strategy::AStar, Strategy::minimax()),
    ];

    for (label, cat, mouse) in pairings.iter() {
        group.bench_function(*label, |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(run_game(&small, *cat, *mouse, 200, Some(seed)))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_minimax, bench_paths, bench_games);
criterion_main!(benches);
