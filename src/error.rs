//! Application-level error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur within the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Overwriting the text log failed. Displays only the underlying I/O
    /// message, which is what gets echoed back into the text area.
    #[error("{source}")]
    WriteLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
