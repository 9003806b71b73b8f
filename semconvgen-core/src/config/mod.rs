//! Configuration system for semconvgen.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod java_config;
pub mod markdown_config;
pub mod output_config;
pub mod registry_config;
pub mod semconv_config;

pub use java_config::{JavaConfig, JavaLayout};
pub use markdown_config::MarkdownConfig;
pub use output_config::OutputConfig;
pub use registry_config::RegistryConfig;
pub use semconv_config::{CliOverrides, SemconvConfig};
