pub mod obj_loader;

use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, ShellwrapError};
use crate::types::Mesh;

/// Result of the ingestion stage.
#[derive(Debug)]
pub struct IngestionResult {
    pub meshes: Vec<Mesh>,
    pub stats: IngestionStats,
}

/// Statistics about the ingested scene.
#[derive(Debug)]
pub struct IngestionStats {
    pub total_vertices: usize,
    pub total_triangles: usize,
    pub total_meshes: usize,
    pub has_normals: bool,
    pub has_texcoords: bool,
}

/// Run the full ingestion stage.
pub fn ingest(input: &Path) -> Result<IngestionResult> {
    if !input.exists() {
        return Err(ShellwrapError::Input(format!(
            "Input file not found: {}",
            input.display()
        )));
    }

    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    if ext != "obj" {
        return Err(ShellwrapError::Input(format!(
            "Unsupported file format: .{ext}"
        )));
    }

    info!(path = %input.display(), "Loading OBJ scene");
    let meshes = obj_loader::load_obj(input)?;

    let stats = compute_stats(&meshes);
    debug!(
        vertices = stats.total_vertices,
        triangles = stats.total_triangles,
        meshes = stats.total_meshes,
        "Ingestion stats"
    );

    Ok(IngestionResult { meshes, stats })
}

/// Compute summary statistics for a loaded scene.
pub fn compute_stats(meshes: &[Mesh]) -> IngestionStats {
    IngestionStats {
        total_vertices: meshes.iter().map(|m| m.vertex_count()).sum(),
        total_triangles: meshes.iter().map(|m| m.triangle_count()).sum(),
        total_meshes: meshes.len(),
        has_normals: meshes.iter().any(|m| m.has_normals()),
        has_texcoords: meshes.iter().any(|m| m.has_texcoords()),
    }
}
