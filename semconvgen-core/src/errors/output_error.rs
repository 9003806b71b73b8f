//! Output writing errors.

use super::error_code::{self, SemconvErrorCode};

/// Errors raised while writing rendered units to disk.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Cannot create output directory {path}: {message}")]
    CreateDir { path: String, message: String },

    #[error("Refusing to overwrite existing file {path}")]
    AlreadyExists { path: String },

    #[error("Cannot write {path}: {message}")]
    Write { path: String, message: String },

    #[error("Cannot read {path}: {message}")]
    Read { path: String, message: String },
}

impl SemconvErrorCode for OutputError {
    fn error_code(&self) -> &'static str {
        error_code::OUTPUT_ERROR
    }
}
