use std::io;

/// All error types for the shellwrap pipeline.
#[derive(thiserror::Error, Debug)]
pub enum ShellwrapError {
    #[error("Input error: {0}")]
    Input(String),
    #[error("Remesh error: {0}")]
    Remesh(String),
    #[error("Output error: {0}")]
    Output(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShellwrapError>;
