//! Registry source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the canonical attribute set is read from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    /// A registry file, or a directory of `*.yaml`/`*.yml`/`*.json` files.
    pub path: Option<PathBuf>,
}
