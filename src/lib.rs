pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod ingestion;
pub mod pipeline;
pub mod primitives;
pub mod remesh;
pub mod types;

pub use config::PipelineConfig;
pub use error::{Result, ShellwrapError};
pub use pipeline::Pipeline;
