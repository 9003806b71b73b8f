//! Stability badges for registry rows.

use semconvgen_registry::{Attribute, Stability};

pub const STABLE_BADGE: &str = "![Stable](https://img.shields.io/badge/-stable-lightgreen)";
pub const EXPERIMENTAL_BADGE: &str =
    "![Experimental](https://img.shields.io/badge/-experimental-blue)";
pub const DEPRECATED_BADGE: &str = "![Deprecated](https://img.shields.io/badge/-deprecated-red)";

pub fn badge(stability: Stability) -> &'static str {
    match stability {
        Stability::Stable => STABLE_BADGE,
        Stability::Experimental => EXPERIMENTAL_BADGE,
        Stability::Deprecated => DEPRECATED_BADGE,
    }
}

/// Stability cell of a registry row.
///
/// A deprecation message that already says "deprecated" is shown in bold on
/// its own; any other message follows the deprecated badge.
pub fn message(attribute: &Attribute) -> String {
    match attribute.deprecated() {
        Some(msg) if msg.to_lowercase().contains("deprecated") => format!("**{msg}**<br>"),
        Some(msg) => format!("{DEPRECATED_BADGE}<br>{msg}"),
        None => format!("{}<br>", badge(attribute.stability())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semconvgen_registry::{AttributeType, PrimitiveType};

    fn attr() -> Attribute {
        Attribute::new("a.b", AttributeType::Primitive(PrimitiveType::String), "b").unwrap()
    }

    #[test]
    fn test_plain_badge() {
        assert_eq!(message(&attr()), format!("{EXPERIMENTAL_BADGE}<br>"));
    }

    #[test]
    fn test_deprecated_messages() {
        let bold = attr().with_deprecated("Deprecated, use `a.c` instead.");
        assert_eq!(message(&bold), "**Deprecated, use `a.c` instead.**<br>");

        let badge = attr().with_deprecated("Replaced by `a.c`.");
        assert_eq!(message(&badge), format!("{DEPRECATED_BADGE}<br>Replaced by `a.c`."));
    }
}
