//! Criterion micro-benchmarks for link, unlink, and detach.

use std::hint::black_box;

use conduit_bench::{line, plane};
use conduit_core::{Direction, NetworkId, Pos};
use conduit_graph::{ManagerConfig, NetworkManager};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

/// Benchmark: link 1000 attached positions into one line, merging at each step.
fn bench_link_merge_line_1k(c: &mut Criterion) {
    c.bench_function("link_merge_line_1k", |b| {
        b.iter_batched(
            || {
                let mut m: NetworkManager<u8, NetworkId> =
                    NetworkManager::new(ManagerConfig::default()).unwrap();
                for x in 0..1000 {
                    m.attach(Some(NetworkId(0)), Pos::new(x, 0, 0), &0).unwrap();
                }
                m
            },
            |mut m| {
                for x in 0..999 {
                    m.link(Pos::new(x, 0, 0), Direction::East).unwrap();
                }
                black_box(m.network_count());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: cut a 10K line in half and rejoin it.
///
/// The cut runs the connectivity search over the whole line and moves
/// half of it; the rejoin merges it back.
fn bench_split_rejoin_line_10k(c: &mut Criterion) {
    let mut m = line(10_000, &0u8).unwrap();
    let mid = Pos::new(5_000, 0, 0);

    c.bench_function("split_rejoin_line_10k", |b| {
        b.iter(|| {
            m.unlink(mid, Direction::East).unwrap();
            m.link(mid, Direction::East).unwrap();
            black_box(m.network_count());
        });
    });
}

/// Benchmark: remove and restore one edge of a 100x100 plane.
///
/// The plane stays connected, so this is a full search with no split.
fn bench_unlink_no_split_plane_10k(c: &mut Criterion) {
    let mut m = plane(100, &0u8).unwrap();
    let p = Pos::new(50, 0, 50);

    c.bench_function("unlink_no_split_plane_10k", |b| {
        b.iter(|| {
            m.unlink(p, Direction::East).unwrap();
            m.link(p, Direction::East).unwrap();
            black_box(m.network_count());
        });
    });
}

/// Benchmark: detach the centre of a 100x100 plane and put it back.
fn bench_detach_reattach_plane_10k(c: &mut Criterion) {
    let mut m = plane(100, &0u8).unwrap();
    let centre = Pos::new(50, 0, 50);

    c.bench_function("detach_reattach_plane_10k", |b| {
        b.iter(|| {
            m.detach(centre).unwrap();
            m.attach(Some(NetworkId(0)), centre, &0).unwrap();
            for dir in [Direction::North, Direction::South, Direction::West, Direction::East] {
                m.link(centre, dir).unwrap();
            }
            black_box(m.network_count());
        });
    });
}

criterion_group!(
    benches,
    bench_link_merge_line_1k,
    bench_split_rejoin_line_10k,
    bench_unlink_no_split_plane_10k,
    bench_detach_reattach_plane_10k
);
criterion_main!(benches);
