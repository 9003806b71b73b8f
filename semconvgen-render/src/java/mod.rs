//! Java attribute-key classes.

pub mod javadoc;
pub mod reader;
pub mod types;

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use semconvgen_core::config::{JavaConfig, JavaLayout};
use semconvgen_core::errors::RenderError;
use semconvgen_registry::{Attribute, AttributeGroups, Registry};

use crate::declaration::{Declaration, KeyClass, RenderedUnit};
use crate::naming;

pub use reader::{parse_java_source, JavaSource};

/// Spaces per nesting level.
const INDENT: &str = "  ";

/// Renders a registry into Java classes of `AttributeKey` constants.
#[derive(Debug, Clone)]
pub struct JavaRenderer {
    package: String,
    layout: JavaLayout,
    class_name: String,
    ungrouped_class_name: String,
    markdown_to_javadoc: bool,
}

impl JavaRenderer {
    pub fn new(config: &JavaConfig) -> Self {
        Self {
            package: config.effective_package().to_string(),
            layout: config.effective_layout(),
            class_name: config.effective_class_name().to_string(),
            ungrouped_class_name: config.effective_ungrouped_class_name().to_string(),
            markdown_to_javadoc: config.effective_markdown_to_javadoc(),
        }
    }

    /// Same settings, different layout.
    pub fn with_layout(&self, layout: JavaLayout) -> Self {
        Self {
            layout,
            ..self.clone()
        }
    }

    pub fn layout(&self) -> JavaLayout {
        self.layout
    }

    /// Render every unit for the configured layout.
    pub fn render(&self, registry: &Registry) -> Result<Vec<RenderedUnit>, RenderError> {
        let units = match self.layout {
            JavaLayout::Namespace => self.render_per_group(&registry.group_by_namespace())?,
            JavaLayout::RootNamespace => {
                self.render_per_group(&registry.group_by_root_namespace())?
            }
            JavaLayout::SingleFile => vec![self.render_single_file(registry)?],
        };
        info!(
            layout = %self.layout,
            units = units.len(),
            attributes = registry.len(),
            "java rendered"
        );
        Ok(units)
    }

    /// One file per group; un-namespaced attributes get their own class.
    fn render_per_group(
        &self,
        groups: &AttributeGroups<'_>,
    ) -> Result<Vec<RenderedUnit>, RenderError> {
        let mut class_names = FxHashSet::default();
        let mut units = Vec::with_capacity(groups.len());

        for (key, attributes) in groups {
            let class_name = match key {
                Some(group) => naming::class_name(group),
                None => self.ungrouped_class_name.clone(),
            };
            if !class_names.insert(class_name.clone()) {
                return Err(RenderError::DuplicateIdentifier {
                    container: self.package.clone(),
                    identifier: class_name,
                });
            }

            let mut content = self.preamble();
            let mut declarations = Vec::with_capacity(attributes.len());
            content.push_str(&format!("class {class_name} {{\n"));
            self.write_members(&mut content, attributes, 1, &class_name, &mut declarations)?;
            content.push('}');

            debug!(class = %class_name, constants = declarations.len(), "unit rendered");
            units.push(RenderedUnit {
                file_name: format!("{class_name}.java"),
                class_name,
                content,
                declarations,
            });
        }
        Ok(units)
    }

    /// One file: a nested class per root namespace, then the un-namespaced
    /// attributes at top level.
    fn render_single_file(&self, registry: &Registry) -> Result<RenderedUnit, RenderError> {
        let groups = registry.group_by_root_namespace();
        let outer = self.class_name.clone();
        let mut content = self.preamble();
        let mut declarations = Vec::with_capacity(registry.len());
        let mut nested_names = FxHashSet::default();

        content.push_str(&format!("class {outer} {{\n"));
        for (root, attributes) in &groups {
            let Some(root) = root else { continue };
            let nested = naming::class_name(root);
            if nested == outer || !nested_names.insert(nested.clone()) {
                return Err(RenderError::DuplicateIdentifier {
                    container: outer,
                    identifier: nested,
                });
            }
            let container = format!("{outer}.{nested}");
            content.push_str(&format!("{INDENT}class {nested} {{\n"));
            self.write_members(&mut content, attributes, 2, &container, &mut declarations)?;
            content.push_str(&format!("{INDENT}}}\n"));
        }
        if let Some(ungrouped) = groups.get(&None) {
            self.write_members(&mut content, ungrouped, 1, &outer, &mut declarations)?;
        }
        content.push('}');

        Ok(RenderedUnit {
            file_name: format!("{outer}.java"),
            class_name: outer,
            content,
            declarations,
        })
    }

    fn preamble(&self) -> String {
        format!("package {};\n\n", self.package)
    }

    /// Write documented constants separated by blank lines.
    fn write_members(
        &self,
        out: &mut String,
        attributes: &[&Attribute],
        depth: usize,
        container: &str,
        declarations: &mut Vec<Declaration>,
    ) -> Result<(), RenderError> {
        let indent = INDENT.repeat(depth);
        let mut identifiers = FxHashSet::default();

        for (i, attribute) in attributes.iter().enumerate() {
            let declaration = self.declare(attribute, container);
            if !identifiers.insert(declaration.identifier.clone()) {
                return Err(RenderError::DuplicateIdentifier {
                    container: container.to_string(),
                    identifier: declaration.identifier,
                });
            }

            if i > 0 {
                out.push('\n');
            }
            out.push_str(&indent);
            out.push_str("/**\n");
            for line in declaration.description.split('\n') {
                out.push_str(&indent);
                out.push('*');
                if !line.is_empty() {
                    out.push(' ');
                    out.push_str(line);
                }
                out.push('\n');
            }
            out.push_str(&indent);
            out.push_str("*/\n");
            out.push_str(&format!(
                "{indent}public static final {}<{}> {} = {}(\"{}\");\n",
                declaration.key_class.java_name(),
                declaration.value_type,
                declaration.identifier,
                declaration.factory,
                declaration.name,
            ));
            declarations.push(declaration);
        }
        Ok(())
    }

    fn declare(&self, attribute: &Attribute, container: &str) -> Declaration {
        let key_type = types::key_type(attribute.attr_type().primitive());
        Declaration {
            container: container.to_string(),
            identifier: attribute.constant_name(),
            name: attribute.name().to_string(),
            key_class: if attribute.is_template() {
                KeyClass::Template
            } else {
                KeyClass::Attribute
            },
            value_type: key_type.value_type.to_string(),
            factory: key_type.factory.to_string(),
            description: self.description(attribute.brief()),
        }
    }

    fn description(&self, brief: &str) -> String {
        let brief = brief.trim_end_matches(['\n', '\r']);
        let converted = if self.markdown_to_javadoc {
            javadoc::markdown_to_javadoc(brief)
        } else {
            brief.to_string()
        };
        javadoc::escape_comment_end(&converted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semconvgen_registry::{AttributeType, PrimitiveType};

    fn registry() -> Registry {
        Registry::from_attributes([
            Attribute::new(
                "http.request.method",
                AttributeType::Primitive(PrimitiveType::String),
                "HTTP request method.",
            )
            .unwrap(),
            Attribute::new(
                "http.route",
                AttributeType::Primitive(PrimitiveType::String),
                "The matched route.",
            )
            .unwrap(),
            Attribute::new(
                "attr_four",
                AttributeType::Primitive(PrimitiveType::StringArray),
                "short description of attr_four",
            )
            .unwrap(),
        ])
        .unwrap()
    }

    fn renderer(layout: JavaLayout) -> JavaRenderer {
        JavaRenderer::new(&JavaConfig::default()).with_layout(layout)
    }

    #[test]
    fn test_namespace_layout_splits_sub_namespaces() {
        let units = renderer(JavaLayout::Namespace).render(&registry()).unwrap();
        let names: Vec<_> = units.iter().map(|u| u.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "OtherAttributes.java",
                "HttpAttributes.java",
                "HttpRequestAttributes.java"
            ]
        );
    }

    #[test]
    fn test_root_namespace_layout_merges_sub_namespaces() {
        let units = renderer(JavaLayout::RootNamespace).render(&registry()).unwrap();
        let http = units.iter().find(|u| u.class_name == "HttpAttributes").unwrap();
        let ids: Vec<_> = http.declarations.iter().map(|d| d.identifier.as_str()).collect();
        assert_eq!(ids, vec!["HTTP_REQUEST_METHOD", "HTTP_ROUTE"]);
    }

    #[test]
    fn test_array_constant_line() {
        let units = renderer(JavaLayout::SingleFile).render(&registry()).unwrap();
        assert_eq!(units.len(), 1);
        assert!(units[0].content.contains(
            "  public static final AttributeKey<List<String>> ATTR_FOUR = stringArrayKey(\"attr_four\");\n}"
        ));
    }

    #[test]
    fn test_class_name_clash_rejected() {
        let registry = Registry::from_attributes([
            Attribute::new(
                "other.thing",
                AttributeType::Primitive(PrimitiveType::String),
                "x",
            )
            .unwrap(),
            Attribute::new("loose", AttributeType::Primitive(PrimitiveType::String), "y").unwrap(),
        ])
        .unwrap();
        let err = renderer(JavaLayout::RootNamespace).render(&registry).unwrap_err();
        assert!(matches!(err, RenderError::DuplicateIdentifier { .. }));
    }

    #[test]
    fn test_multiline_brief() {
        let registry = Registry::from_attributes([Attribute::new(
            "a.b",
            AttributeType::Primitive(PrimitiveType::Boolean),
            "first line\n\nthird line\n",
        )
        .unwrap()])
        .unwrap();
        let units = renderer(JavaLayout::Namespace).render(&registry).unwrap();
        assert!(units[0]
            .content
            .contains("  /**\n  * first line\n  *\n  * third line\n  */\n"));
    }
}
