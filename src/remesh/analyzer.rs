use crate::geometry::{self, Vector3};
use crate::types::Mesh;

/// One scene face as the projector consumes it: an anchor vertex plus the
/// two edge vectors spanning the face, and the candidate-ordering sort key.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub anchor: Vector3<f32>,
    pub u: Vector3<f32>,
    pub v: Vector3<f32>,
    /// Distance from the reference center to the face's third vertex.
    pub center_dist: f32,
}

/// Componentwise average of the per-axis extremes over every vertex of every
/// mesh in the scene.
pub fn bounding_box_center(scene: &[Mesh]) -> Vector3<f32> {
    let mut min = Vector3::<f32>::MAX;
    let mut max = -Vector3::<f32>::MAX;

    for mesh in scene {
        for vertex in mesh.vertices() {
            min.x = min.x.min(vertex.x);
            min.y = min.y.min(vertex.y);
            min.z = min.z.min(vertex.z);
            max.x = max.x.max(vertex.x);
            max.y = max.y.max(vertex.y);
            max.z = max.z.max(vertex.z);
        }
    }

    (min + max) * 0.5
}

/// Total vertex-position sum divided by total vertex count; the zero vector
/// for a scene with no vertices.
pub fn average_center(scene: &[Mesh]) -> Vector3<f32> {
    let count: usize = scene.iter().map(|m| m.vertex_count()).sum();
    if count == 0 {
        return Vector3::<f32>::ZERO;
    }
    let total = scene
        .iter()
        .fold(Vector3::<f32>::ZERO, |acc, mesh| acc + geometry::sum(mesh.vertices()));
    total / count as f32
}

/// Maximum over the scene of each mesh's radius from `center`.
pub fn scene_radius(center: Vector3<f32>, scene: &[Mesh]) -> f32 {
    scene
        .iter()
        .map(|mesh| mesh.radius_from(center))
        .fold(0.0, f32::max)
}

/// Every scene face as a [`Triangle`], sorted farthest from `center` first.
///
/// Corner lists are walked in strides of three. `center_dist` is measured to
/// the stride's third vertex; that single representative point decides the
/// candidate order. Ties keep insertion order (stable sort).
pub fn collect_triangles(scene: &[Mesh], center: Vector3<f32>) -> Vec<Triangle> {
    let mut triangles = Vec::new();

    for mesh in scene {
        for corners in mesh.corners().chunks_exact(3) {
            let anchor = mesh.vertex(corners[0].vertex);
            let second = mesh.vertex(corners[1].vertex);
            let third = mesh.vertex(corners[2].vertex);
            triangles.push(Triangle {
                anchor,
                u: second - anchor,
                v: third - anchor,
                center_dist: center.distance(third),
            });
        }
    }

    triangles.sort_by(|a, b| b.center_dist.total_cmp(&a.center_dist));
    triangles
}
