pub mod analyzer;
pub mod projector;

pub use analyzer::Triangle;

use tracing::{debug, info};

use crate::error::{Result, ShellwrapError};
use crate::types::Mesh;

/// Remesh `scene` onto the topology of `primitive`.
///
/// The result keeps the primitive's corner/face structure but every vertex
/// is moved onto the scene's enclosing surface: the primitive copy is grown
/// to twice the scene radius and recentered, then each vertex is pulled
/// inward along its ray toward the scene center until it passes through a
/// scene face. Normals are not recomputed; the result carries the
/// primitive's original faceted normals.
pub fn remesh(scene: &[Mesh], primitive: &Mesh) -> Result<Mesh> {
    let total_vertices: usize = scene.iter().map(|m| m.vertex_count()).sum();
    if total_vertices == 0 {
        return Err(ShellwrapError::Remesh("scene contains no vertices".into()));
    }

    let mut result = primitive.clone();
    if result.vertex_count() == 0 {
        return Ok(result);
    }

    let center = analyzer::bounding_box_center(scene);
    let radius = analyzer::scene_radius(center, scene);
    debug!(
        cx = center.x,
        cy = center.y,
        cz = center.z,
        radius,
        "Scene bounds"
    );

    let primitive_radius = result.bounding_radius();
    if primitive_radius == 0.0 {
        return Err(ShellwrapError::Remesh(
            "primitive has zero bounding radius".into(),
        ));
    }

    // Grow the copy to twice the scene radius so every inward segment is
    // long enough to pass through the real surface, then recenter it on the
    // scene.
    result.uniform_scale(2.0 * radius / primitive_radius);
    let offset = center - result.centroid();
    result.translate(offset);

    let triangles = analyzer::collect_triangles(scene, center);
    info!(
        triangles = triangles.len(),
        vertices = result.vertex_count(),
        "Projecting primitive vertices"
    );
    projector::project_vertices(result.vertices_mut(), center, &triangles);

    Ok(result)
}
