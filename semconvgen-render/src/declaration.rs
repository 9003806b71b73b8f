//! What a rendering unit declares, independent of its text.

use serde::Serialize;

/// Which key class a constant is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyClass {
    /// `AttributeKey<T>`
    Attribute,
    /// `AttributeKeyTemplate<T>`
    Template,
}

impl KeyClass {
    pub fn java_name(self) -> &'static str {
        match self {
            Self::Attribute => "AttributeKey",
            Self::Template => "AttributeKeyTemplate",
        }
    }

    pub fn from_java_name(s: &str) -> Option<Self> {
        match s {
            "AttributeKey" => Some(Self::Attribute),
            "AttributeKeyTemplate" => Some(Self::Template),
            _ => None,
        }
    }
}

/// One constant in a rendered unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Dotted path of enclosing classes, outermost first.
    pub container: String,
    pub identifier: String,
    /// Dotted attribute name passed to the key factory.
    pub name: String,
    pub key_class: KeyClass,
    /// Java type argument, e.g. `Long` or `List<String>`.
    pub value_type: String,
    /// Key factory, e.g. `longKey`.
    pub factory: String,
    /// Rendered documentation text, lines joined with `\n`.
    pub description: String,
}

impl Declaration {
    pub fn is_template(&self) -> bool {
        self.key_class == KeyClass::Template
    }
}

/// A generated file.
#[derive(Debug, Clone)]
pub struct RenderedUnit {
    pub file_name: String,
    pub class_name: String,
    pub content: String,
    pub declarations: Vec<Declaration>,
}

impl RenderedUnit {
    pub fn as_declarations(&self) -> UnitDeclarations<'_> {
        UnitDeclarations {
            source: &self.file_name,
            declarations: &self.declarations,
        }
    }
}

/// Borrowed view of a unit's declarations, whether rendered in memory or
/// read back from disk.
#[derive(Debug, Clone, Copy)]
pub struct UnitDeclarations<'a> {
    pub source: &'a str,
    pub declarations: &'a [Declaration],
}
