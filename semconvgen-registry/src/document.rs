//! Serialized form of a registry file.
//!
//! A registry document is a flat list of fully-qualified attributes:
//!
//! ```yaml
//! attributes:
//!   - id: first.attr_one
//!     type: boolean
//!     brief: short description of attr_one
//!   - id: first.attr_template_one
//!     type: string
//!     template: true
//!     brief: this is the description of attribute template
//! ```

use serde::{Deserialize, Serialize};

use semconvgen_core::errors::RegistryError;

use crate::attribute::{
    Attribute, AttributeType, EnumMember, EnumType, ExampleValue, PrimitiveType, Stability,
};

/// Input format of a registry source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension; anything but `json` is YAML.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some(e) if e.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Top-level registry document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryDocument {
    #[serde(default)]
    pub attributes: Vec<AttributeSpec>,
}

/// One attribute entry as written in a registry document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeSpec {
    #[serde(alias = "name")]
    pub id: String,
    #[serde(rename = "type")]
    pub attr_type: String,
    #[serde(default)]
    pub brief: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Examples>,
    #[serde(default)]
    pub stability: Stability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    #[serde(default)]
    pub template: bool,
    /// Members of an `enum` attribute.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<EnumMember>,
    #[serde(default)]
    pub allow_custom_values: bool,
}

/// `examples` accepts either a single value or a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Examples {
    One(ExampleValue),
    Many(Vec<ExampleValue>),
}

impl Examples {
    fn into_vec(self) -> Vec<ExampleValue> {
        match self {
            Self::One(v) => vec![v],
            Self::Many(v) => v,
        }
    }
}

impl RegistryDocument {
    /// Parse a document. `source_name` only labels errors.
    pub fn parse(
        source_name: &str,
        text: &str,
        format: DocumentFormat,
    ) -> Result<Self, RegistryError> {
        let parse_err = |message: String| RegistryError::Parse {
            source_name: source_name.to_string(),
            message,
        };
        match format {
            DocumentFormat::Yaml => serde_yaml::from_str(text).map_err(|e| parse_err(e.to_string())),
            DocumentFormat::Json => serde_json::from_str(text).map_err(|e| parse_err(e.to_string())),
        }
    }

    /// Convert every entry into a validated `Attribute`.
    pub fn into_attributes(self) -> Result<Vec<Attribute>, RegistryError> {
        self.attributes
            .into_iter()
            .map(AttributeSpec::into_attribute)
            .collect()
    }
}

impl AttributeSpec {
    pub fn into_attribute(self) -> Result<Attribute, RegistryError> {
        let attr_type = if self.attr_type == "enum" {
            AttributeType::Enum(EnumType::new(
                &self.id,
                self.members,
                self.allow_custom_values,
            )?)
        } else if !self.members.is_empty() || self.allow_custom_values {
            return Err(RegistryError::InvalidEnum {
                name: self.id,
                reason: format!(
                    "members and allow_custom_values require type enum, found {}",
                    self.attr_type
                ),
            });
        } else {
            let primitive = self.attr_type.parse::<PrimitiveType>().map_err(|reason| {
                RegistryError::Parse {
                    source_name: self.id.clone(),
                    message: reason,
                }
            })?;
            AttributeType::Primitive(primitive)
        };

        let mut attribute = if self.template {
            Attribute::template(self.id, attr_type, self.brief)?
        } else {
            Attribute::new(self.id, attr_type, self.brief)?
        };
        attribute = attribute.with_stability(self.stability);
        if let Some(note) = self.note {
            attribute = attribute.with_note(note);
        }
        if let Some(examples) = self.examples {
            attribute = attribute.with_examples(examples.into_vec());
        }
        if let Some(deprecated) = self.deprecated {
            attribute = attribute.with_deprecated(deprecated);
        }
        Ok(attribute)
    }
}
