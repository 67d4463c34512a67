use std::path::PathBuf;

use clap::Parser;

/// Fully resolved pipeline configuration (constructed from CLI args).
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub subdivisions: u32,
    pub dry_run: bool,
    pub verbose: bool,
    pub threads: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::new(),
            subdivisions: 3,
            dry_run: false,
            verbose: false,
            threads: None,
        }
    }
}

/// CLI argument definition (clap derive).
#[derive(Parser, Debug)]
#[command(
    name = "shellwrap",
    about = "Projection remesher: rewraps a triangulated scene onto icosphere topology",
    version
)]
pub struct CliArgs {
    /// Input OBJ scene
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Output OBJ file
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    /// Icosphere subdivision level of the result topology
    #[arg(long, default_value_t = 3)]
    pub subdivisions: u32,

    /// Scan input and report stats only
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Worker thread count (default: all cores)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

impl From<CliArgs> for PipelineConfig {
    fn from(args: CliArgs) -> Self {
        PipelineConfig {
            input: args.input,
            output: args.output,
            subdivisions: args.subdivisions,
            dry_run: args.dry_run,
            verbose: args.verbose,
            threads: args.threads,
        }
    }
}
