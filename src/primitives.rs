use std::collections::HashMap;

use tracing::debug;

use crate::geometry::{self, Vector3};
use crate::types::{Corner, Mesh};

// Icosahedron from three orthogonal golden-ratio rectangles.
const X: f32 = 0.525_731_112_119_133_6;
const Z: f32 = 0.850_650_808_352_039_9;
const N: f32 = 0.0;

const ICO_VERTICES: [Vector3<f32>; 12] = [
    Vector3::new(-X, N, Z),
    Vector3::new(X, N, Z),
    Vector3::new(-X, N, -Z),
    Vector3::new(X, N, -Z),
    Vector3::new(N, Z, X),
    Vector3::new(N, Z, -X),
    Vector3::new(N, -Z, X),
    Vector3::new(N, -Z, -X),
    Vector3::new(Z, X, N),
    Vector3::new(-Z, X, N),
    Vector3::new(Z, -X, N),
    Vector3::new(-Z, -X, N),
];

const ICO_FACES: [Vector3<u32>; 20] = [
    Vector3::new(0, 4, 1),
    Vector3::new(0, 9, 4),
    Vector3::new(9, 5, 4),
    Vector3::new(4, 5, 8),
    Vector3::new(4, 8, 1),
    Vector3::new(8, 10, 1),
    Vector3::new(8, 3, 10),
    Vector3::new(5, 3, 8),
    Vector3::new(5, 2, 3),
    Vector3::new(2, 7, 3),
    Vector3::new(7, 10, 3),
    Vector3::new(7, 6, 10),
    Vector3::new(7, 11, 6),
    Vector3::new(11, 0, 6),
    Vector3::new(0, 1, 6),
    Vector3::new(6, 1, 10),
    Vector3::new(9, 0, 11),
    Vector3::new(9, 11, 2),
    Vector3::new(9, 2, 5),
    Vector3::new(7, 2, 11),
];

/// Midpoint lookup keyed on the canonicalized (min, max) endpoint pair, so
/// both windings of a shared edge resolve to the same vertex.
type EdgeMidpoints = HashMap<(u32, u32), u32>;

/// Build a subdivided unit icosphere scaled to `radius`.
///
/// Each subdivision level replaces every face with four, creating one new
/// vertex per edge at the normalized midpoint of its endpoints. The output
/// mesh carries faceted shading: one flat normal per face, referenced by all
/// three of its corners.
pub fn icosphere(radius: f32, subdivisions: u32) -> Mesh {
    let mut vertices: Vec<Vector3<f32>> = ICO_VERTICES.to_vec();
    let mut faces: Vec<Vector3<u32>> = ICO_FACES.to_vec();

    for _ in 0..subdivisions {
        faces = subdivide(&mut vertices, &faces);
    }

    debug!(
        subdivisions,
        vertices = vertices.len(),
        faces = faces.len(),
        "Built icosphere"
    );

    let mut mesh = Mesh::default();
    for &vertex in &vertices {
        mesh.add_vertex(vertex * radius);
    }
    for (face_index, face) in faces.iter().enumerate() {
        let normal = geometry::face_normal(
            vertices[face.x as usize],
            vertices[face.y as usize],
            vertices[face.z as usize],
        );
        mesh.add_normal(normal);
        let normal_index = Some(face_index as u32);
        mesh.add_corner(Corner::new(face.x, None, normal_index));
        mesh.add_corner(Corner::new(face.y, None, normal_index));
        mesh.add_corner(Corner::new(face.z, None, normal_index));
    }
    mesh
}

/// One subdivision pass: split every face into four.
fn subdivide(vertices: &mut Vec<Vector3<f32>>, faces: &[Vector3<u32>]) -> Vec<Vector3<u32>> {
    let mut midpoints = EdgeMidpoints::new();
    let mut result = Vec::with_capacity(faces.len() * 4);

    for face in faces {
        let ab = midpoint_index(&mut midpoints, vertices, face.x, face.y);
        let bc = midpoint_index(&mut midpoints, vertices, face.y, face.z);
        let ca = midpoint_index(&mut midpoints, vertices, face.z, face.x);

        result.push(Vector3::new(face.x, ab, ca));
        result.push(Vector3::new(face.y, bc, ab));
        result.push(Vector3::new(face.z, ca, bc));
        result.push(Vector3::new(ab, bc, ca));
    }

    result
}

/// Index of the midpoint vertex for the edge (first, second), creating it on
/// first sight. The new vertex is the normalized midpoint of the endpoints,
/// pushed onto the unit sphere.
fn midpoint_index(
    midpoints: &mut EdgeMidpoints,
    vertices: &mut Vec<Vector3<f32>>,
    first: u32,
    second: u32,
) -> u32 {
    let key = if first < second {
        (first, second)
    } else {
        (second, first)
    };
    if let Some(&index) = midpoints.get(&key) {
        return index;
    }

    let midpoint = (vertices[first as usize] + vertices[second as usize]).normalized();
    let index = vertices.len() as u32;
    vertices.push(midpoint);
    midpoints.insert(key, index);
    index
}
