// Extraction errors
//
// Every variant is scoped to one input unit; the batch keeps going.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported language for {}", path.display())]
    UnsupportedLanguage { path: PathBuf },

    #[error("failed to set parser language for {language}: {message}")]
    Grammar {
        language: &'static str,
        message: String,
    },

    #[error("{}:{line}: syntax error, file skipped", path.display())]
    ParseFailure { path: PathBuf, line: usize },

    #[error("traversal of {} panicked", path.display())]
    DriverPanicked { path: PathBuf },
}

pub type ExtractResult<T> = Result<T, ExtractError>;
