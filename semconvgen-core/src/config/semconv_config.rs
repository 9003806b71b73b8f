//! Top-level semconvgen configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::java_config::{is_java_identifier, is_java_package};
use super::{JavaConfig, JavaLayout, MarkdownConfig, OutputConfig, RegistryConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "semconvgen.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SEMCONVGEN_*`)
/// 3. Project config (`semconvgen.toml` in project root)
/// 4. User config (`~/.semconvgen/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SemconvConfig {
    pub registry: RegistryConfig,
    pub java: JavaConfig,
    pub markdown: MarkdownConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub registry_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub java_package: Option<String>,
    pub java_layout: Option<JavaLayout>,
    pub java_class_name: Option<String>,
    pub overwrite: Option<bool>,
}

impl SemconvConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    ///
    /// `explicit` replaces the project config lookup when given; unlike the
    /// implicit `semconvgen.toml`, it must exist.
    pub fn load(
        root: &Path,
        explicit: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, path)?;
            }
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(?config, "configuration resolved");

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SemconvConfig) -> Result<(), ConfigError> {
        if let Some(ref package) = config.java.package {
            if !is_java_package(package) {
                return Err(ConfigError::ValidationFailed {
                    field: "java.package".to_string(),
                    message: format!("'{package}' is not a valid Java package name"),
                });
            }
        }
        for (field, value) in [
            ("java.class_name", &config.java.class_name),
            ("java.ungrouped_class_name", &config.java.ungrouped_class_name),
        ] {
            if let Some(name) = value {
                if !is_java_identifier(name) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: format!("'{name}' is not a valid Java class name"),
                    });
                }
            }
        }
        if let Some(ref file_name) = config.markdown.file_name {
            if file_name.is_empty() || file_name.contains(['/', '\\']) {
                return Err(ConfigError::ValidationFailed {
                    field: "markdown.file_name".to_string(),
                    message: "must be a plain, non-empty file name".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.semconvgen/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".semconvgen").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut SemconvConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SemconvConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), "merging config file");
        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut SemconvConfig, other: &SemconvConfig) {
        if other.registry.path.is_some() {
            base.registry.path = other.registry.path.clone();
        }

        if other.java.package.is_some() {
            base.java.package = other.java.package.clone();
        }
        if other.java.layout.is_some() {
            base.java.layout = other.java.layout;
        }
        if other.java.class_name.is_some() {
            base.java.class_name = other.java.class_name.clone();
        }
        if other.java.ungrouped_class_name.is_some() {
            base.java.ungrouped_class_name = other.java.ungrouped_class_name.clone();
        }
        if other.java.markdown_to_javadoc.is_some() {
            base.java.markdown_to_javadoc = other.java.markdown_to_javadoc;
        }

        if other.markdown.file_name.is_some() {
            base.markdown.file_name = other.markdown.file_name.clone();
        }
        if other.markdown.title.is_some() {
            base.markdown.title = other.markdown.title.clone();
        }

        if other.output.dir.is_some() {
            base.output.dir = other.output.dir.clone();
        }
        if other.output.overwrite.is_some() {
            base.output.overwrite = other.output.overwrite;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SEMCONVGEN_JAVA_PACKAGE`, `SEMCONVGEN_OUTPUT_DIR`, etc.
    fn apply_env_overrides(config: &mut SemconvConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("SEMCONVGEN_REGISTRY") {
            config.registry.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("SEMCONVGEN_OUTPUT_DIR") {
            config.output.dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("SEMCONVGEN_JAVA_PACKAGE") {
            config.java.package = Some(val);
        }
        if let Ok(val) = std::env::var("SEMCONVGEN_JAVA_LAYOUT") {
            let layout = val.parse::<JavaLayout>().map_err(|message| {
                ConfigError::ValidationFailed {
                    field: "SEMCONVGEN_JAVA_LAYOUT".to_string(),
                    message,
                }
            })?;
            config.java.layout = Some(layout);
        }
        if let Ok(val) = std::env::var("SEMCONVGEN_OVERWRITE") {
            if let Ok(v) = val.parse::<bool>() {
                config.output.overwrite = Some(v);
            }
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SemconvConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.registry_path {
            config.registry.path = Some(v.clone());
        }
        if let Some(ref v) = cli.output_dir {
            config.output.dir = Some(v.clone());
        }
        if let Some(ref v) = cli.java_package {
            config.java.package = Some(v.clone());
        }
        if let Some(v) = cli.java_layout {
            config.java.layout = Some(v);
        }
        if let Some(ref v) = cli.java_class_name {
            config.java.class_name = Some(v.clone());
        }
        if let Some(v) = cli.overwrite {
            config.output.overwrite = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
