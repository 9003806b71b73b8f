//! Markdown attribute registry.

pub mod stability;

use std::fmt::Write as _;

use tracing::info;

use semconvgen_core::config::MarkdownConfig;
use semconvgen_registry::{Attribute, AttributeType, EnumType, Registry};

use crate::declaration::RenderedUnit;

/// Table header for every namespace table.
pub const TABLE_HEADERS: &str =
    "| Attribute  | Type | Description  | Examples  | Stability |\n|---|---|---|---|---|\n";

/// Heading used for attributes without a namespace.
pub const UNGROUPED_HEADING: &str = "other";

/// Footnotes and enum tables collected while one table is written.
#[derive(Debug, Default)]
struct TableContext<'a> {
    notes: Vec<&'a str>,
    enums: Vec<(&'a Attribute, &'a EnumType)>,
}

/// Renders the attribute registry document.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    file_name: String,
    title: String,
}

impl MarkdownRenderer {
    pub fn new(config: &MarkdownConfig) -> Self {
        Self {
            file_name: config.effective_file_name().to_string(),
            title: config.effective_title().to_string(),
        }
    }

    /// Render the registry as a single Markdown unit.
    pub fn render(&self, registry: &Registry) -> RenderedUnit {
        let mut out = String::new();
        let _ = write!(out, "# {}\n\n", self.title);

        let by_root = registry.group_by_root_namespace();
        let named = by_root.iter().filter_map(|(k, v)| k.map(|k| (k, v)));
        let ungrouped = by_root.get(&None).map(|v| (UNGROUPED_HEADING, v));
        for (root, attributes) in named.chain(ungrouped) {
            if !attributes.is_empty() {
                write_root(&mut out, root, attributes);
            }
        }

        info!(attributes = registry.len(), file = %self.file_name, "markdown rendered");
        RenderedUnit {
            file_name: self.file_name.clone(),
            class_name: String::new(),
            content: out,
            declarations: Vec::new(),
        }
    }
}

/// One `## root` section with a table per namespace below it.
fn write_root(out: &mut String, root: &str, attributes: &[&Attribute]) {
    let mut by_ns: std::collections::BTreeMap<&str, Vec<&Attribute>> = Default::default();
    for attribute in attributes {
        by_ns
            .entry(attribute.namespace().unwrap_or(root))
            .or_default()
            .push(attribute);
    }

    let mut first = true;
    for (ns, attrs) in by_ns {
        let mut ctx = TableContext::default();
        if first {
            let _ = write!(out, "## {root}\n\n");
            first = false;
        }
        if ns != root {
            let _ = write!(out, "### {ns}\n\n");
        }
        out.push_str(TABLE_HEADERS);
        for attribute in attrs {
            write_row(out, attribute, &mut ctx);
        }
        write_notes(out, &ctx);
        write_enums(out, &ctx);
        out.push('\n');
    }
}

fn write_row<'a>(out: &mut String, attribute: &'a Attribute, ctx: &mut TableContext<'a>) {
    let name = format!("<a name=\"{0}\">`{0}`</a>", attribute.name());
    let primitive = attribute.attr_type().primitive();
    let attr_type = if attribute.is_template() {
        format!("template[{primitive}]")
    } else {
        primitive.to_string()
    };

    let mut description = attribute.brief().to_string();
    if let Some(note) = attribute.note() {
        ctx.notes.push(note);
        let _ = write!(description, " [{}]", ctx.notes.len());
    }

    let examples = match attribute.attr_type() {
        AttributeType::Enum(e) => {
            ctx.enums.push((attribute, e));
            if attribute.examples().is_empty() {
                e.members()
                    .first()
                    .map(|m| format!("`{}`", m.value))
                    .unwrap_or_default()
            } else {
                join_code(attribute)
            }
        }
        AttributeType::Primitive(p) if p.is_array() && !attribute.examples().is_empty() => {
            let items: Vec<String> = attribute.examples().iter().map(ToString::to_string).collect();
            format!("`[{}]`", items.join(", "))
        }
        AttributeType::Primitive(_) => join_code(attribute),
    };

    let stability = stability::message(attribute);
    let _ = writeln!(
        out,
        "| {name} | {attr_type} | {description} | {examples} | {stability} |"
    );
}

fn join_code(attribute: &Attribute) -> String {
    attribute
        .examples()
        .iter()
        .map(|ex| format!("`{ex}`"))
        .collect::<Vec<_>>()
        .join("; ")
}

fn write_notes(out: &mut String, ctx: &TableContext<'_>) {
    for (i, note) in ctx.notes.iter().enumerate() {
        let _ = write!(out, "\n**[{}]:** {}\n", i + 1, note);
    }
}

fn write_enums(out: &mut String, ctx: &TableContext<'_>) {
    for (attribute, enum_type) in &ctx.enums {
        let _ = write!(out, "`{}` ", attribute.name());
        if enum_type.allow_custom_values() {
            out.push_str(
                "has the following list of well-known values. If one of them applies, \
                 then the respective value MUST be used, otherwise a custom value MAY be used.",
            );
        } else {
            out.push_str("MUST be one of the following:");
        }
        out.push_str("\n\n| Value  | Description |\n|---|---|");

        let mut notes = Vec::new();
        for member in enum_type.members() {
            let mut description = member.brief.clone();
            if let Some(note) = &member.note {
                notes.push(note.as_str());
                let _ = write!(description, " [{}]", notes.len());
            }
            let _ = write!(out, "\n| `{}` | {} |", member.value, description);
        }
        if notes.is_empty() {
            out.push('\n');
        } else {
            for (i, note) in notes.iter().enumerate() {
                let _ = write!(out, "\n\n**[{}]:** {}", i + 1, note);
            }
            out.push('\n');
        }
    }
}
