//! Java generation configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PACKAGE: &str = "io.opentelemetry.instrumentation.api.semconv";
pub const DEFAULT_SINGLE_FILE_CLASS: &str = "AllAttributes";
pub const DEFAULT_UNGROUPED_CLASS: &str = "OtherAttributes";

/// How attributes are distributed over generated classes and files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum JavaLayout {
    /// One class per full namespace (`http.request` -> `HttpRequestAttributes`).
    #[default]
    Namespace,
    /// One class per root namespace (all of `http.*` -> `HttpAttributes`).
    RootNamespace,
    /// One file, one nested class per root namespace.
    SingleFile,
}

impl JavaLayout {
    pub const ALL: [JavaLayout; 3] = [Self::Namespace, Self::RootNamespace, Self::SingleFile];

    pub fn name(self) -> &'static str {
        match self {
            Self::Namespace => "namespace",
            Self::RootNamespace => "root-namespace",
            Self::SingleFile => "single-file",
        }
    }
}

impl fmt::Display for JavaLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JavaLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "namespace" => Ok(Self::Namespace),
            "root-namespace" | "root_namespace" => Ok(Self::RootNamespace),
            "single-file" | "single_file" => Ok(Self::SingleFile),
            other => Err(format!(
                "unknown layout '{other}' (expected namespace, root-namespace or single-file)"
            )),
        }
    }
}

/// Configuration for the Java renderer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JavaConfig {
    /// Java package of the generated classes.
    pub package: Option<String>,
    /// Class/file layout. Default: namespace.
    pub layout: Option<JavaLayout>,
    /// Container class for the single-file layout. Default: `AllAttributes`.
    pub class_name: Option<String>,
    /// Class for attributes without a namespace in the per-file layouts.
    pub ungrouped_class_name: Option<String>,
    /// Convert Markdown code spans and links in briefs to Javadoc. Default: true.
    pub markdown_to_javadoc: Option<bool>,
}

impl JavaConfig {
    pub fn effective_package(&self) -> &str {
        self.package.as_deref().unwrap_or(DEFAULT_PACKAGE)
    }

    pub fn effective_layout(&self) -> JavaLayout {
        self.layout.unwrap_or_default()
    }

    pub fn effective_class_name(&self) -> &str {
        self.class_name.as_deref().unwrap_or(DEFAULT_SINGLE_FILE_CLASS)
    }

    pub fn effective_ungrouped_class_name(&self) -> &str {
        self.ungrouped_class_name
            .as_deref()
            .unwrap_or(DEFAULT_UNGROUPED_CLASS)
    }

    pub fn effective_markdown_to_javadoc(&self) -> bool {
        self.markdown_to_javadoc.unwrap_or(true)
    }
}

/// Returns true if `s` is a plain Java identifier (ASCII subset).
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Returns true if `s` is a dotted sequence of Java identifiers.
pub fn is_java_package(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_java_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_parse() {
        assert_eq!("single-file".parse::<JavaLayout>(), Ok(JavaLayout::SingleFile));
        assert_eq!("root_namespace".parse::<JavaLayout>(), Ok(JavaLayout::RootNamespace));
        assert!("flat".parse::<JavaLayout>().is_err());
    }

    #[test]
    fn test_defaults() {
        let cfg = JavaConfig::default();
        assert_eq!(cfg.effective_package(), DEFAULT_PACKAGE);
        assert_eq!(cfg.effective_layout(), JavaLayout::Namespace);
        assert_eq!(cfg.effective_class_name(), "AllAttributes");
        assert!(cfg.effective_markdown_to_javadoc());
    }

    #[test]
    fn test_java_names() {
        assert!(is_java_package("io.opentelemetry.semconv"));
        assert!(!is_java_package("io..semconv"));
        assert!(!is_java_package("1io.semconv"));
        assert!(is_java_identifier("AllAttributes"));
        assert!(!is_java_identifier("All-Attributes"));
    }
}
