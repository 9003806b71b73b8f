//! Reads generated Java sources back into declarations.
//!
//! Understands the subset of Java the renderer emits: a package line,
//! (nested) class blocks, Javadoc blocks and `AttributeKey` constants.

use semconvgen_core::errors::RenderError;

use crate::declaration::{Declaration, KeyClass};

/// Declarations recovered from one Java file.
#[derive(Debug, Clone, Default)]
pub struct JavaSource {
    pub source: String,
    pub package: Option<String>,
    pub declarations: Vec<Declaration>,
}

impl JavaSource {
    pub fn as_declarations(&self) -> crate::declaration::UnitDeclarations<'_> {
        crate::declaration::UnitDeclarations {
            source: &self.source,
            declarations: &self.declarations,
        }
    }
}

/// Parse a generated Java file. `source_name` labels errors and the result.
pub fn parse_java_source(source_name: &str, text: &str) -> Result<JavaSource, RenderError> {
    let mut parsed = JavaSource {
        source: source_name.to_string(),
        ..Default::default()
    };
    let mut classes: Vec<String> = Vec::new();
    let mut doc: Option<Vec<String>> = None;
    let mut pending_doc: Option<String> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        let malformed = |message: &str| RenderError::Malformed {
            source_name: source_name.to_string(),
            line: line_no,
            message: message.to_string(),
        };

        if let Some(lines) = doc.as_mut() {
            // Trailing whitespace inside a comment line belongs to the description.
            let doc_line = raw.trim_start();
            if line == "*/" {
                pending_doc = doc.take().map(|l| l.join("\n"));
            } else if let Some(text) = doc_line.strip_prefix('*') {
                lines.push(text.strip_prefix(' ').unwrap_or(text).to_string());
            } else {
                return Err(malformed("expected '*' inside documentation comment"));
            }
            continue;
        }

        if line.is_empty() {
            continue;
        }
        if line == "/**" {
            doc = Some(Vec::new());
        } else if let Some(rest) = line.strip_prefix("package ") {
            let package = rest
                .strip_suffix(';')
                .ok_or_else(|| malformed("package declaration must end with ';'"))?;
            parsed.package = Some(package.trim().to_string());
        } else if let Some(name) = class_header(line) {
            classes.push(name.to_string());
        } else if line == "}" {
            if classes.pop().is_none() {
                return Err(malformed("unbalanced '}'"));
            }
        } else if line.starts_with("public static final ") {
            if classes.is_empty() {
                return Err(malformed("constant outside of a class"));
            }
            let description = pending_doc
                .take()
                .ok_or_else(|| malformed("constant without documentation comment"))?;
            let declaration = parse_constant(line, classes.join("."), description)
                .map_err(|message| malformed(&message))?;
            parsed.declarations.push(declaration);
        } else if !line.starts_with("import ") {
            return Err(malformed(&format!("unexpected line: {line}")));
        }
    }

    if doc.is_some() {
        return Err(RenderError::Malformed {
            source_name: source_name.to_string(),
            line: text.lines().count(),
            message: "unterminated documentation comment".to_string(),
        });
    }
    if !classes.is_empty() {
        return Err(RenderError::Malformed {
            source_name: source_name.to_string(),
            line: text.lines().count(),
            message: format!("class {} is not closed", classes.join(".")),
        });
    }
    Ok(parsed)
}

/// `class Name {` (optionally with modifiers) -> `Name`.
fn class_header(line: &str) -> Option<&str> {
    let body = line.strip_suffix('{')?.trim_end();
    let mut words = body.split_whitespace();
    while let Some(word) = words.next() {
        if word == "class" {
            let name = words.next()?;
            return words.next().is_none().then_some(name);
        }
        if !matches!(word, "public" | "final" | "static" | "abstract") {
            return None;
        }
    }
    None
}

/// `public static final AttributeKey<T> ID = factory("name");`
fn parse_constant(
    line: &str,
    container: String,
    description: String,
) -> Result<Declaration, String> {
    let rest = line
        .strip_prefix("public static final ")
        .ok_or("missing modifiers")?;
    let (key_class, rest) = rest.split_once('<').ok_or("missing type argument")?;
    let key_class = KeyClass::from_java_name(key_class)
        .ok_or_else(|| format!("unknown key class '{key_class}'"))?;

    // Type arguments may nest: `List<String>`.
    let mut depth = 1usize;
    let mut end = None;
    for (i, c) in rest.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    end = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }
    let end = end.ok_or("unterminated type argument")?;
    let value_type = rest[..end].trim().to_string();
    let rest = rest[end + 1..].trim_start();

    let (identifier, rest) = rest.split_once('=').ok_or("missing '='")?;
    let identifier = identifier.trim().to_string();
    if identifier.is_empty() {
        return Err("missing identifier".to_string());
    }
    let rest = rest.trim().strip_suffix(';').ok_or("missing ';'")?;
    let (factory, rest) = rest.split_once('(').ok_or("missing key factory call")?;
    let name = rest
        .strip_suffix(')')
        .and_then(|s| s.strip_prefix('"'))
        .and_then(|s| s.strip_suffix('"'))
        .ok_or("key name must be a string literal")?;

    Ok(Declaration {
        container,
        identifier,
        name: name.to_string(),
        key_class,
        value_type,
        factory: factory.trim().to_string(),
        description,
    })
}
