//! # semconvgen-render
//!
//! Turns a `Registry` into generated artifacts. Every layout is a pure
//! presentation of the same attribute set: the checks in [`check`] verify
//! that no rendering changes a name, type or description.

pub mod check;
pub mod declaration;
pub mod java;
pub mod markdown;
pub mod naming;
pub mod output;

pub use declaration::{Declaration, KeyClass, RenderedUnit, UnitDeclarations};
pub use java::JavaRenderer;
pub use markdown::MarkdownRenderer;
