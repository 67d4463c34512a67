use rayon::prelude::*;

use crate::geometry::{Vector3, linear};
use crate::remesh::analyzer::Triangle;

/// Pull every vertex along its ray toward `center` onto the first candidate
/// face the segment passes through; a vertex whose segment meets no face
/// collapses to the center.
///
/// `triangles` must already be in farthest-first order: the first face whose
/// solve lands in range wins, which is what selects the outermost enclosing
/// surface when several faces qualify. The pass is read-only over the
/// candidate list and every vertex is independent, so vertices are processed
/// in parallel; the candidate order per vertex is unchanged.
pub fn project_vertices(
    vertices: &mut [Vector3<f32>],
    center: Vector3<f32>,
    triangles: &[Triangle],
) {
    vertices.par_iter_mut().for_each(|vertex| {
        *vertex = project(*vertex, center, triangles);
    });
}

/// Project one vertex. The solve's columns are the ray direction and the
/// negated face edges; its right-hand side is the anchor offset. A hit needs
/// the ray parameter inside [0, 1]: the intersection lies between the vertex
/// and the center, not behind either.
fn project(vertex: Vector3<f32>, center: Vector3<f32>, triangles: &[Triangle]) -> Vector3<f32> {
    let move_dir = center - vertex;

    for triangle in triangles {
        let t = linear::ray_parameter(move_dir, -triangle.u, -triangle.v, triangle.anchor - vertex);
        if (0.0..=1.0).contains(&t) {
            return vertex + move_dir * t;
        }
    }

    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quad(anchor: Vector3<f32>, u: Vector3<f32>, v: Vector3<f32>, dist: f32) -> Triangle {
        Triangle {
            anchor,
            u,
            v,
            center_dist: dist,
        }
    }

    #[test]
    fn vertex_lands_on_the_face() {
        let face = quad(
            Vector3::new(-1.0, -1.0, 1.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
            1.0,
        );
        let mut vertices = vec![Vector3::new(0.25, -0.5, 4.0)];

        project_vertices(&mut vertices, Vector3::<f32>::ZERO, &[face]);

        assert_relative_eq!(vertices[0].z, 1.0, max_relative = 1e-5);
        assert_relative_eq!(vertices[0].x, 0.0625, max_relative = 1e-4);
        assert_relative_eq!(vertices[0].y, -0.125, max_relative = 1e-4);
    }

    #[test]
    fn first_candidate_in_order_wins() {
        // Two parallel faces across the segment; the farther one is listed
        // first and must be selected.
        let outer = quad(
            Vector3::new(-1.0, -1.0, 2.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
            2.0,
        );
        let inner = quad(
            Vector3::new(-1.0, -1.0, 1.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
            1.0,
        );
        let mut vertices = vec![Vector3::new(0.0, 0.0, 4.0)];

        project_vertices(&mut vertices, Vector3::<f32>::ZERO, &[outer, inner]);

        assert_relative_eq!(vertices[0].z, 2.0, max_relative = 1e-5);
    }

    #[test]
    fn missed_vertex_collapses_to_center() {
        let face = quad(
            Vector3::new(10.0, 10.0, 1.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            1.0,
        );
        let center = Vector3::new(0.5, 0.5, 0.5);
        let mut vertices = vec![Vector3::new(0.0, 0.0, 4.0)];

        project_vertices(&mut vertices, center, &[face]);

        assert_eq!(vertices[0], center);
    }

    #[test]
    fn empty_candidate_list_collapses_everything() {
        let center = Vector3::new(1.0, 2.0, 3.0);
        let mut vertices = vec![
            Vector3::new(5.0, 0.0, 0.0),
            Vector3::new(0.0, 5.0, 0.0),
            Vector3::new(0.0, 0.0, 5.0),
        ];

        project_vertices(&mut vertices, center, &[]);

        for vertex in &vertices {
            assert_eq!(*vertex, center);
        }
    }

    #[test]
    fn face_behind_the_center_is_rejected() {
        // The segment from the vertex to the center ends before reaching a
        // face on the far side; t would exceed 1.
        let behind = quad(
            Vector3::new(-1.0, -1.0, -1.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
            1.0,
        );
        let mut vertices = vec![Vector3::new(0.0, 0.0, 4.0)];

        project_vertices(&mut vertices, Vector3::<f32>::ZERO, &[behind]);

        assert_eq!(vertices[0], Vector3::<f32>::ZERO);
    }
}
