//! Dotted attribute names and the identifiers derived from them.

use smallvec::SmallVec;

use semconvgen_core::errors::RegistryError;

/// Segments of a dotted name. Real names rarely exceed four segments.
pub type Segments<'a> = SmallVec<[&'a str; 4]>;

/// Split a dotted name into its segments.
pub fn segments(name: &str) -> Segments<'_> {
    name.split('.').collect()
}

/// Check the syntax of a dotted attribute name.
///
/// Segments are non-empty, made of `[a-z0-9_]`, and the name starts with a
/// lowercase letter.
pub fn validate(name: &str) -> Result<(), RegistryError> {
    let invalid = |reason: &str| RegistryError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    match name.chars().next() {
        None => return Err(invalid("name is empty")),
        Some(c) if !c.is_ascii_lowercase() => {
            return Err(invalid("must start with a lowercase letter"))
        }
        _ => {}
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '.'))
    {
        return Err(invalid(&format!("unexpected character {bad:?}")));
    }
    if segments(name).iter().any(|s| s.is_empty()) {
        return Err(invalid("empty segment"));
    }
    Ok(())
}

/// First dot segment, or `None` for names without a namespace.
pub fn root_namespace(name: &str) -> Option<&str> {
    name.split_once('.').map(|(root, _)| root)
}

/// Everything before the last dot, or `None` for names without a namespace.
pub fn namespace(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(ns, _)| ns)
}

/// Upper snake case of the full dotted name: `first.attr_one_a` -> `FIRST_ATTR_ONE_A`.
pub fn constant_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '.' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}
