//! Output configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where generated files land.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory. Default: `generated`.
    pub dir: Option<PathBuf>,
    /// Overwrite existing files. Default: false.
    pub overwrite: Option<bool>,
}

impl OutputConfig {
    pub fn effective_dir(&self) -> &Path {
        self.dir.as_deref().unwrap_or_else(|| Path::new("generated"))
    }

    pub fn effective_overwrite(&self) -> bool {
        self.overwrite.unwrap_or(false)
    }
}
