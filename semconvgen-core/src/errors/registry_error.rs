//! Registry loading and validation errors.

use super::error_code::{self, SemconvErrorCode};

/// Errors raised while reading or validating an attribute registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Cannot read registry {path}: {message}")]
    Io { path: String, message: String },

    #[error("Registry parse error in {source_name}: {message}")]
    Parse { source_name: String, message: String },

    #[error("Invalid attribute name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Attribute {name} is defined more than once")]
    DuplicateAttribute { name: String },

    #[error("Attributes {first} and {second} both map to identifier {identifier}")]
    IdentifierCollision {
        first: String,
        second: String,
        identifier: String,
    },

    #[error("Enum attribute {name} is invalid: {reason}")]
    InvalidEnum { name: String, reason: String },

    #[error("Attribute {name} is not a template")]
    NotATemplate { name: String },

    #[error("Template {name} needs a non-empty key suffix")]
    EmptyTemplateKey { name: String },

    #[error("No registry files found under {path}")]
    Empty { path: String },
}

impl SemconvErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateAttribute { .. } => error_code::DUPLICATE_ATTRIBUTE,
            Self::IdentifierCollision { .. } => error_code::IDENTIFIER_COLLISION,
            _ => error_code::REGISTRY_ERROR,
        }
    }
}
