//! Benchmarks for mesh operations.

use criterion::{criterion_group, criterion_main, Criterion};
use meshparts::prelude::*;
use nalgebra::Point3;

/// `k * k` separate triangulated `n x n` grid patches.
fn create_patches(k: usize, n: usize) -> PolyMesh {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();

    for pj in 0..k {
        for pi in 0..k {
            let base = vertices.len();
            let (ox, oy) = ((pi * (n + 2)) as f64, (pj * (n + 2)) as f64);

            for j in 0..=n {
                for i in 0..=n {
                    vertices.push(Point3::new(ox + i as f64, oy + j as f64, 0.0));
                }
            }

            for j in 0..n {
                for i in 0..n {
                    let v00 = base + j * (n + 1) + i;
                    let v10 = v00 + 1;
                    let v01 = v00 + (n + 1);
                    let v11 = v01 + 1;

                    faces.push(vec![v00, v10, v11]);
                    faces.push(vec![v00, v11, v01]);
                }
            }
        }
    }

    PolyMesh::new(vertices, Vec::new(), faces).unwrap()
}

fn bench_graph(c: &mut Criterion) {
    let mesh = create_patches(8, 20);

    c.bench_function("adjacency_graph_8x8_patches", |b| {
        b.iter(|| AdjacencyGraph::new(&mesh).unwrap());
    });

    c.bench_function("graph_components_8x8_patches", |b| {
        b.iter(|| {
            let graph = AdjacencyGraph::new(&mesh).unwrap();
            graph.connected_components().len()
        });
    });
}

fn bench_components(c: &mut Criterion) {
    let mesh = create_patches(8, 20);

    c.bench_function("connected_components_parallel", |b| {
        b.iter(|| connected_components(&mesh, &ComponentOptions::default()).unwrap());
    });

    c.bench_function("connected_components_sequential", |b| {
        let options = ComponentOptions::default().sequential();
        b.iter(|| connected_components(&mesh, &options).unwrap());
    });
}

fn bench_obj(c: &mut Criterion) {
    let mesh = create_patches(4, 30);
    let mut text = Vec::new();
    meshparts::io::obj::write(&mesh, &mut text).unwrap();

    c.bench_function("obj_read_4x4_patches", |b| {
        b.iter(|| meshparts::io::obj::read(text.as_slice()).unwrap());
    });

    c.bench_function("obj_write_4x4_patches", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(text.len());
            meshparts::io::obj::write(&mesh, &mut out).unwrap();
            out
        });
    });
}

criterion_group!(benches, bench_graph, bench_components, bench_obj);
criterion_main!(benches);
