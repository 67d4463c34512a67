use criterion::{Criterion, criterion_group, criterion_main};

use shellwrap::geometry::Vector3;
use shellwrap::primitives::icosphere;
use shellwrap::remesh::remesh;
use shellwrap::types::{Corner, Mesh};

/// Cube of the given half-extent centered at the origin, twelve triangles.
fn make_cube(half: f32) -> Mesh {
    let mut mesh = Mesh::default();
    let corners = [
        (-1.0, -1.0, -1.0),
        (1.0, -1.0, -1.0),
        (1.0, 1.0, -1.0),
        (-1.0, 1.0, -1.0),
        (-1.0, -1.0, 1.0),
        (1.0, -1.0, 1.0),
        (1.0, 1.0, 1.0),
        (-1.0, 1.0, 1.0),
    ];
    for (x, y, z) in corners {
        mesh.add_vertex(Vector3::new(x * half, y * half, z * half));
    }
    let quads: [[u32; 4]; 6] = [
        [0, 1, 2, 3],
        [4, 5, 6, 7],
        [0, 1, 5, 4],
        [1, 2, 6, 5],
        [2, 3, 7, 6],
        [3, 0, 4, 7],
    ];
    for quad in quads {
        for triangle in [[quad[0], quad[1], quad[2]], [quad[0], quad[2], quad[3]]] {
            for vertex in triangle {
                mesh.add_corner(Corner::new(vertex, None, None));
            }
        }
    }
    mesh
}

fn bench_remesh(c: &mut Criterion) {
    let scene = vec![make_cube(1.0)];

    // 2562 vertices against 12 candidate triangles.
    let primitive = icosphere(1.0, 4);
    c.bench_function("remesh_cube_icosphere4", |b| {
        b.iter(|| remesh(&scene, &primitive).unwrap());
    });

    let primitive = icosphere(1.0, 6);
    c.bench_function("remesh_cube_icosphere6", |b| {
        b.iter(|| remesh(&scene, &primitive).unwrap());
    });
}

fn bench_icosphere(c: &mut Criterion) {
    c.bench_function("icosphere_subdiv5", |b| {
        b.iter(|| icosphere(1.0, 5));
    });
}

criterion_group!(benches, bench_remesh, bench_icosphere);
criterion_main!(benches);
