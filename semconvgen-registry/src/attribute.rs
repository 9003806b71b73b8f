//! Attribute definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use semconvgen_core::errors::RegistryError;

use crate::name;

/// Scalar and array value types an attribute can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "boolean[]")]
    BooleanArray,
    #[serde(rename = "string[]")]
    StringArray,
    #[serde(rename = "int[]")]
    IntArray,
    #[serde(rename = "double[]")]
    DoubleArray,
}

impl PrimitiveType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Int => "int",
            Self::Double => "double",
            Self::BooleanArray => "boolean[]",
            Self::StringArray => "string[]",
            Self::IntArray => "int[]",
            Self::DoubleArray => "double[]",
        }
    }

    pub fn is_array(self) -> bool {
        matches!(
            self,
            Self::BooleanArray | Self::StringArray | Self::IntArray | Self::DoubleArray
        )
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "boolean" => Self::Boolean,
            "string" => Self::String,
            "int" => Self::Int,
            "double" => Self::Double,
            "boolean[]" => Self::BooleanArray,
            "string[]" => Self::StringArray,
            "int[]" => Self::IntArray,
            "double[]" => Self::DoubleArray,
            other => return Err(format!("unknown attribute type '{other}'")),
        })
    }
}

/// A scalar example or enum value as written in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExampleValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

impl fmt::Display for ExampleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
        }
    }
}

/// One well-known value of an enum attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMember {
    pub id: String,
    pub value: ExampleValue,
    #[serde(default)]
    pub brief: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// An enum attribute type: its members and whether other values are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    members: Vec<EnumMember>,
    allow_custom_values: bool,
}

impl EnumType {
    /// Build an enum type. Members must be non-empty and carry unique values
    /// of a single kind (all ints or all strings).
    pub fn new(
        attribute: &str,
        members: Vec<EnumMember>,
        allow_custom_values: bool,
    ) -> Result<Self, RegistryError> {
        let invalid = |reason: String| RegistryError::InvalidEnum {
            name: attribute.to_string(),
            reason,
        };
        if members.is_empty() {
            return Err(invalid("enum has no members".to_string()));
        }
        let all_int = members.iter().all(|m| matches!(m.value, ExampleValue::Int(_)));
        let all_string = members
            .iter()
            .all(|m| matches!(m.value, ExampleValue::String(_)));
        if !all_int && !all_string {
            return Err(invalid(
                "member values must be all strings or all integers".to_string(),
            ));
        }
        for (i, member) in members.iter().enumerate() {
            if members[..i].iter().any(|m| m.value == member.value) {
                return Err(invalid(format!("duplicate member value '{}'", member.value)));
            }
        }
        Ok(Self {
            members,
            allow_custom_values,
        })
    }

    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    pub fn allow_custom_values(&self) -> bool {
        self.allow_custom_values
    }

    /// The primitive type the enum values are carried as.
    pub fn underlying(&self) -> PrimitiveType {
        match self.members.first().map(|m| &m.value) {
            Some(ExampleValue::Int(_)) => PrimitiveType::Int,
            _ => PrimitiveType::String,
        }
    }
}

/// Declared type of an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
    Primitive(PrimitiveType),
    Enum(EnumType),
}

impl AttributeType {
    /// The primitive type values are carried as; enums resolve to their
    /// underlying type.
    pub fn primitive(&self) -> PrimitiveType {
        match self {
            Self::Primitive(p) => *p,
            Self::Enum(e) => e.underlying(),
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(e) => Some(e),
            Self::Primitive(_) => None,
        }
    }
}

/// Maturity of an attribute definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    Stable,
    #[default]
    Experimental,
    Deprecated,
}

/// A named, typed piece of telemetry metadata.
///
/// Identity is the dotted name. Values are fixed once built; the `with_*`
/// methods consume the attribute and are meant for construction only.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    name: String,
    attr_type: AttributeType,
    brief: String,
    note: Option<String>,
    examples: Vec<ExampleValue>,
    stability: Stability,
    deprecated: Option<String>,
    template: bool,
}

impl Attribute {
    /// Create an attribute after checking its name.
    pub fn new(
        name: impl Into<String>,
        attr_type: AttributeType,
        brief: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        name::validate(&name)?;
        Ok(Self {
            name,
            attr_type,
            brief: brief.into(),
            note: None,
            examples: Vec::new(),
            stability: Stability::default(),
            deprecated: None,
            template: false,
        })
    }

    /// Create an attribute template, whose key needs a suffix at use-time.
    pub fn template(
        name: impl Into<String>,
        attr_type: AttributeType,
        brief: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        Ok(Self {
            template: true,
            ..Self::new(name, attr_type, brief)?
        })
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_examples(mut self, examples: Vec<ExampleValue>) -> Self {
        self.examples = examples;
        self
    }

    pub fn with_stability(mut self, stability: Stability) -> Self {
        self.stability = stability;
        self
    }

    pub fn with_deprecated(mut self, message: impl Into<String>) -> Self {
        self.deprecated = Some(message.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr_type(&self) -> &AttributeType {
        &self.attr_type
    }

    pub fn brief(&self) -> &str {
        &self.brief
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn examples(&self) -> &[ExampleValue] {
        &self.examples
    }

    pub fn stability(&self) -> Stability {
        self.stability
    }

    pub fn deprecated(&self) -> Option<&str> {
        self.deprecated.as_deref()
    }

    pub fn is_template(&self) -> bool {
        self.template
    }

    pub fn root_namespace(&self) -> Option<&str> {
        name::root_namespace(&self.name)
    }

    pub fn namespace(&self) -> Option<&str> {
        name::namespace(&self.name)
    }

    /// Upper snake case constant identifier for this attribute.
    pub fn constant_name(&self) -> String {
        name::constant_name(&self.name)
    }

    /// Full key of a template for the given suffix: `<name>.<suffix>`.
    pub fn key_for(&self, suffix: &str) -> Result<String, RegistryError> {
        if !self.template {
            return Err(RegistryError::NotATemplate {
                name: self.name.clone(),
            });
        }
        if suffix.is_empty() {
            return Err(RegistryError::EmptyTemplateKey {
                name: self.name.clone(),
            });
        }
        Ok(format!("{}.{}", self.name, suffix))
    }
}
