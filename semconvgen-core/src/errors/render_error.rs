//! Rendering errors.

use super::error_code::{self, SemconvErrorCode};

/// Errors raised while turning a registry into rendered units, or while
/// reading rendered units back.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Identifier {identifier} declared twice in {container}")]
    DuplicateIdentifier {
        container: String,
        identifier: String,
    },

    #[error("{source_name}:{line}: {message}")]
    Malformed {
        source_name: String,
        line: usize,
        message: String,
    },
}

impl SemconvErrorCode for RenderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateIdentifier { .. } => error_code::IDENTIFIER_COLLISION,
            Self::Malformed { .. } => error_code::RENDER_ERROR,
        }
    }
}
