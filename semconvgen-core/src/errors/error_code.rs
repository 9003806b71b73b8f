//! Stable error codes for every semconvgen error.

/// Implemented by every error enum so callers (and the CLI exit path) get a
/// machine-readable code alongside the human message.
pub trait SemconvErrorCode {
    /// Returns the error code string (e.g., "REGISTRY_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted `[ERROR_CODE] message` string.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REGISTRY_ERROR: &str = "REGISTRY_ERROR";
pub const DUPLICATE_ATTRIBUTE: &str = "DUPLICATE_ATTRIBUTE";
pub const IDENTIFIER_COLLISION: &str = "IDENTIFIER_COLLISION";
pub const RENDER_ERROR: &str = "RENDER_ERROR";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
pub const CHECK_FAILED: &str = "CHECK_FAILED";
