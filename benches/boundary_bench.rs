use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mesh_cells::algs::boundary::{exterior_features, for_each_boundary_feature};
use mesh_cells::topology::cell::Cell;
use mesh_cells::topology::shapes::Hexahedron;

fn structured_grid(n: u32) -> Vec<Hexahedron<u32>> {
    let node = |i: u32, j: u32, k: u32| i + (n + 1) * (j + (n + 1) * k);
    let mut cells = Vec::with_capacity((n * n * n) as usize);
    for k in 0..n {
        for j in 0..n {
            for i in 0..n {
                cells.push(Hexahedron::from_points([
                    node(i, j, k),
                    node(i + 1, j, k),
                    node(i + 1, j + 1, k),
                    node(i, j + 1, k),
                    node(i, j, k + 1),
                    node(i + 1, j, k + 1),
                    node(i + 1, j + 1, k + 1),
                    node(i, j + 1, k + 1),
                ]));
            }
        }
    }
    cells
}

fn bench_face_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("face_extraction");

    for &n in &[8u32, 16u32] {
        let cells = structured_grid(n);

        group.bench_with_input(BenchmarkId::new("boxed", n), &n, |b, _| {
            b.iter(|| {
                for cell in &cells {
                    for f in 0..6 {
                        black_box(cell.try_boundary_feature(2, f).unwrap());
                    }
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("typed", n), &n, |b, _| {
            b.iter(|| {
                for cell in &cells {
                    for f in 0..6 {
                        black_box(cell.cell_face(f).unwrap());
                    }
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("buffer", n), &n, |b, _| {
            b.iter(|| {
                for cell in &cells {
                    for_each_boundary_feature(cell, 2, |_, _, slots| {
                        black_box(slots);
                    })
                    .unwrap();
                }
            });
        });
    }

    group.finish();
}

fn bench_surface(c: &mut Criterion) {
    let cells = structured_grid(12);
    c.bench_function("exterior_faces_12", |b| {
        b.iter(|| {
            let out = exterior_features(&cells, 2).unwrap();
            black_box(out);
        });
    });
}

criterion_group!(benches, bench_face_extraction, bench_surface);
criterion_main!(benches);
