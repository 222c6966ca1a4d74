//! Error types for stools-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end the process with a non-zero status
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from stools-core
    #[error(transparent)]
    Core(#[from] stools_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Logging could not be set up
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}
