//! Top-level generation errors.

use super::error_code::{self, SemconvErrorCode};
use super::{ConfigError, OutputError, RegistryError, RenderError};

/// Errors that can occur during a full generation run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Consistency check failed with {violations} violation(s)")]
    CheckFailed { violations: usize },
}

impl SemconvErrorCode for GenerateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Registry(e) => e.error_code(),
            Self::Render(e) => e.error_code(),
            Self::Output(e) => e.error_code(),
            Self::CheckFailed { .. } => error_code::CHECK_FAILED,
        }
    }
}
