//! Markdown registry configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the Markdown registry renderer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Output file name. Default: `registry.md`.
    pub file_name: Option<String>,
    /// Document title. Default: `OpenTelemetry attributes registry`.
    pub title: Option<String>,
}

impl MarkdownConfig {
    pub fn effective_file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("registry.md")
    }

    pub fn effective_title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or("OpenTelemetry attributes registry")
    }
}
