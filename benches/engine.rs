//! Benchmarks for the slice-move engine.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rubik::colors::{initial_colors, permute_face_colors};
use rubik::geometry::{all_cells, rotate_quarter_turn};
use rubik::notation::parse_moves;
use rubik::{facelets, Axis, Clock, Cube};

/// Benchmark rotating every lattice slot about every axis.
fn bench_quarter_turns(c: &mut Criterion) {
    c.bench_function("rotate_quarter_turn_all_cells", |b| {
        b.iter(|| {
            for cell in all_cells() {
                for axis in Axis::ALL {
                    black_box(rotate_quarter_turn(black_box(cell), axis, true));
                }
            }
        })
    });
}

/// Benchmark permuting a corner's colors.
fn bench_permute_colors(c: &mut Criterion) {
    let colors = initial_colors((1, 1, 1));

    c.bench_function("permute_face_colors", |b| {
        b.iter(|| permute_face_colors(black_box(colors), Axis::X, true))
    });
}

/// Benchmark one slice move from issue to settled, with a few frames in between.
fn bench_move_and_settle(c: &mut Criterion) {
    let (mut cube, clock) = Cube::manual();
    let frame = Duration::from_millis(16);

    c.bench_function("rotate_slice_and_settle", |b| {
        b.iter(|| {
            cube.rotate_slice(Axis::Y, 1, true);
            while cube.is_animating() {
                clock.advance(frame);
                cube.tick(clock.now());
            }
        })
    });
}

/// Benchmark formatting the facelet net of a scrambled cube.
fn bench_format_net(c: &mut Criterion) {
    let (mut cube, clock) = Cube::manual();
    for mv in parse_moves("R U F' L D2 B M E S'").unwrap() {
        cube.apply(mv);
        clock.advance(cube.move_duration());
        cube.tick(clock.now());
    }

    c.bench_function("format_net", |b| {
        b.iter(|| facelets::format_net(black_box(&cube)))
    });
}

criterion_group!(
    benches,
    bench_quarter_turns,
    bench_permute_colors,
    bench_move_and_settle,
    bench_format_net
);
criterion_main!(benches);
