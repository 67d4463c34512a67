use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::types::Mesh;

/// Write a mesh as Wavefront OBJ.
///
/// Emits the deduplicated draw buffers, so position, texture coordinate,
/// and normal share a single index per corner and every face token is the
/// `i/i/i` form (reduced when an attribute is absent).
pub fn write_obj(mesh: &mut Mesh, path: &Path) -> Result<()> {
    let data = mesh.index_data();
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    for v in &data.positions {
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for t in &data.texcoords {
        writeln!(out, "vt {} {}", t.x, t.y)?;
    }
    for n in &data.normals {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    let has_texcoords = !data.texcoords.is_empty();
    let has_normals = !data.normals.is_empty();
    for face in data.indices.chunks_exact(3) {
        write!(out, "f")?;
        for &index in face {
            let i = index + 1;
            match (has_texcoords, has_normals) {
                (false, false) => write!(out, " {i}")?,
                (true, false) => write!(out, " {i}/{i}")?,
                (false, true) => write!(out, " {i}//{i}")?,
                (true, true) => write!(out, " {i}/{i}/{i}")?,
            }
        }
        writeln!(out)?;
    }
    out.flush()?;

    info!(
        path = %path.display(),
        vertices = data.positions.len(),
        faces = data.indices.len() / 3,
        "Wrote OBJ"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vector3;
    use crate::ingestion::obj_loader;
    use crate::primitives::icosphere;
    use crate::types::Corner;

    #[test]
    fn written_obj_reloads_with_same_shape() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("sphere.obj");

        let mut mesh = icosphere(2.0, 1);
        write_obj(&mut mesh, &path).unwrap();

        let reloaded = obj_loader::load_obj(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].triangle_count(), mesh.triangle_count());
        // Vertices were deduplicated on write; the sphere shape survives.
        let radius = reloaded[0].bounding_radius();
        assert!((radius - 2.0).abs() < 1e-3, "radius {radius}");
    }

    #[test]
    fn plain_mesh_writes_bare_face_tokens() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("tri.obj");

        let mut mesh = Mesh::default();
        mesh.add_vertex(Vector3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(Vector3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(Vector3::new(0.0, 1.0, 0.0));
        mesh.add_corner(Corner::new(0, None, None));
        mesh.add_corner(Corner::new(1, None, None));
        mesh.add_corner(Corner::new(2, None, None));
        write_obj(&mut mesh, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("f 1 2 3"));
        assert!(!content.contains('/'));
    }

    #[test]
    fn faceted_mesh_writes_double_slash_tokens() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("faceted.obj");

        let mut mesh = icosphere(1.0, 0);
        write_obj(&mut mesh, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("//"));
        assert!(!content.contains("vt "));
    }
}
