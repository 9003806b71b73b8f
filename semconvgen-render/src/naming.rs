//! Class and constant names for generated code.

use semconvgen_registry::name;

/// Suffix appended to every generated attribute class.
pub const CLASS_SUFFIX: &str = "Attributes";

/// UpperCamelCase class name for a namespace group:
/// `first` -> `FirstAttributes`, `http.request` -> `HttpRequestAttributes`.
pub fn class_name(group: &str) -> String {
    let mut out = String::with_capacity(group.len() + CLASS_SUFFIX.len());
    for word in group.split(['.', '_', '-']).filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars);
        }
    }
    out.push_str(CLASS_SUFFIX);
    out
}

/// Constant identifier for a dotted attribute name.
pub fn constant_name(dotted: &str) -> String {
    name::constant_name(dotted)
}
