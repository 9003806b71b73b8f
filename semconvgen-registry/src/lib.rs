//! # semconvgen-registry
//!
//! The canonical attribute set every renderer works from. Attributes are
//! loaded once, validated, and never mutated; grouping by namespace is a
//! view over the same set.

pub mod attribute;
pub mod document;
pub mod name;
pub mod registry;

pub use attribute::{
    Attribute, AttributeType, EnumMember, EnumType, ExampleValue, PrimitiveType, Stability,
};
pub use registry::{AttributeGroups, Registry};
