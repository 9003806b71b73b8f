//! Core types for consistency checks.

use std::fmt;

use serde::Serialize;

/// The consistency checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    CrossUnitConsistency,
    TemplateSeparation,
    LosslessPartition,
}

impl CheckId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CrossUnitConsistency => "cross-unit-consistency",
            Self::TemplateSeparation => "template-separation",
            Self::LosslessPartition => "lossless-partition",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The same dotted name renders differently in two units.
    Inconsistent {
        name: String,
        field: &'static str,
        first_source: String,
        first: String,
        second_source: String,
        second: String,
    },
    /// An identifier is declared twice in one container.
    DuplicateIdentifier {
        source: String,
        container: String,
        identifier: String,
    },
    /// A template and a plain attribute share an identifier.
    TemplateCollision {
        source: String,
        container: String,
        identifier: String,
        template: String,
        attribute: String,
    },
    /// A template and a plain attribute in one container share a description.
    TemplateDescriptionShared {
        source: String,
        container: String,
        template: String,
        attribute: String,
    },
    /// Present in the single-file rendering, absent from the grouped one.
    Missing { name: String },
    /// Present in the grouped rendering, absent from the single-file one.
    Extra { source: String, name: String },
    /// Declared by more than one grouped unit.
    Duplicated { name: String, sources: Vec<String> },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inconsistent {
                name,
                field,
                first_source,
                first,
                second_source,
                second,
            } => write!(
                f,
                "{name}: {field} differs ({first_source}: {first:?}, {second_source}: {second:?})"
            ),
            Self::DuplicateIdentifier {
                source,
                container,
                identifier,
            } => write!(f, "{source}: {identifier} declared twice in {container}"),
            Self::TemplateCollision {
                source,
                container,
                identifier,
                template,
                attribute,
            } => write!(
                f,
                "{source}: template {template} and attribute {attribute} collide on {identifier} in {container}"
            ),
            Self::TemplateDescriptionShared {
                source,
                container,
                template,
                attribute,
            } => write!(
                f,
                "{source}: template {template} and attribute {attribute} share a description in {container}"
            ),
            Self::Missing { name } => write!(f, "{name}: missing from grouped output"),
            Self::Extra { source, name } => {
                write!(f, "{source}: {name} not present in single-file output")
            }
            Self::Duplicated { name, sources } => {
                write!(f, "{name}: declared in {}", sources.join(", "))
            }
        }
    }
}

/// Result of one check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub check_id: CheckId,
    pub checked: usize,
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub fn new(check_id: CheckId) -> Self {
        Self {
            check_id,
            checked: 0,
            violations: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_clean() {
            format!("{}: ok ({} declarations)", self.check_id, self.checked)
        } else {
            format!(
                "{}: {} violation(s) in {} declarations",
                self.check_id,
                self.violations.len(),
                self.checked
            )
        }
    }
}
