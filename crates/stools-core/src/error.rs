//! Error types for stools-core

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] stools_fs::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Cannot determine install root: {message}")]
    InstallRoot { message: String },

    #[error("tool file not exists: {path}")]
    ToolFileMissing { path: PathBuf },

    #[error("Invalid tool path {path}: {message}")]
    InvalidToolPath { path: PathBuf, message: String },

    #[error("{message}")]
    InvalidToolName { message: String },

    #[error("Tool '{name}' is not installed")]
    ToolNotFound { name: String },

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed ({status}): {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        code: Option<i32>,
        stderr: String,
    },
}
