use std::time::{Duration, Instant};

use tracing::info;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::export;
use crate::ingestion::{self, IngestionResult};
use crate::primitives;
use crate::remesh;

/// Summary of a completed pipeline run.
#[derive(Debug)]
pub struct ProcessingResult {
    pub vertices: usize,
    pub triangles: usize,
    pub duration: Duration,
}

/// Pipeline orchestrator -- drives the four conversion stages.
pub struct Pipeline;

impl Pipeline {
    /// Run the full conversion pipeline.
    pub fn run(config: &PipelineConfig) -> Result<ProcessingResult> {
        let start = Instant::now();

        info!(input = %config.input.display(), "Starting pipeline");

        if config.dry_run {
            info!("--dry-run: scanning input only");
            let result = ingestion::ingest(&config.input)?;
            print_scene_summary(&result);
            return Ok(ProcessingResult {
                vertices: 0,
                triangles: 0,
                duration: start.elapsed(),
            });
        }

        info!("Stage 1/4: Ingestion");
        let ingestion_result = ingestion::ingest(&config.input)?;

        info!("Stage 2/4: Primitive");
        let primitive = primitives::icosphere(1.0, config.subdivisions);
        info!(
            subdivisions = config.subdivisions,
            vertices = primitive.vertex_count(),
            faces = primitive.triangle_count(),
            "Built icosphere"
        );

        info!("Stage 3/4: Remeshing");
        let mut result = remesh::remesh(&ingestion_result.meshes, &primitive)?;

        info!("Stage 4/4: Export");
        export::write_obj(&mut result, &config.output)?;

        let duration = start.elapsed();
        info!(elapsed = ?duration, "Pipeline complete");

        Ok(ProcessingResult {
            vertices: result.vertex_count(),
            triangles: result.triangle_count(),
            duration,
        })
    }
}

/// Print scene statistics for --dry-run.
fn print_scene_summary(result: &IngestionResult) {
    let stats = &result.stats;
    println!("=== Scene Summary ===");
    println!("  Meshes:    {}", stats.total_meshes);
    println!("  Vertices:  {}", stats.total_vertices);
    println!("  Triangles: {}", stats.total_triangles);
    println!("  Normals:   {}", if stats.has_normals { "yes" } else { "no" });
    println!("  Texcoords: {}", if stats.has_texcoords { "yes" } else { "no" });
}
