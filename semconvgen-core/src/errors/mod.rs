//! Error handling for semconvgen.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod generate_error;
pub mod output_error;
pub mod registry_error;
pub mod render_error;

pub use config_error::ConfigError;
pub use error_code::SemconvErrorCode;
pub use generate_error::GenerateError;
pub use output_error::OutputError;
pub use registry_error::RegistryError;
pub use render_error::RenderError;
