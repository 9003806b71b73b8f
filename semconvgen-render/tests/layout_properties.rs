//! Property tests: every layout is a pure presentation of the registry.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rustc_hash::FxHashSet;
use semconvgen_core::config::{JavaConfig, JavaLayout};
use semconvgen_core::errors::RenderError;
use semconvgen_registry::{Attribute, AttributeType, PrimitiveType, Registry};
use semconvgen_render::check::check_layouts;
use semconvgen_render::{naming, JavaRenderer};

fn primitive() -> impl Strategy<Value = PrimitiveType> {
    prop_oneof![
        Just(PrimitiveType::Boolean),
        Just(PrimitiveType::String),
        Just(PrimitiveType::Int),
        Just(PrimitiveType::Double),
        Just(PrimitiveType::StringArray),
    ]
}

fn attribute() -> impl Strategy<Value = (String, PrimitiveType, bool, String)> {
    (
        prop::collection::vec("[a-z][a-z0-9]{0,4}", 1..4).prop_map(|s| s.join(".")),
        primitive(),
        any::<bool>(),
        "[a-zA-Z `\\[\\]()<>.:/]{0,40}",
    )
}

/// Class names reserved by the default configuration.
fn reserved_class_names() -> [String; 2] {
    let config = JavaConfig::default();
    [
        config.effective_class_name().to_string(),
        config.effective_ungrouped_class_name().to_string(),
    ]
}

/// Rendering would refuse the registry: a group maps onto a reserved class.
fn clashes_with_reserved_class(registry: &Registry) -> bool {
    let reserved = reserved_class_names();
    registry
        .iter()
        .flat_map(|a| [a.root_namespace(), a.namespace()])
        .flatten()
        .any(|group| reserved.contains(&naming::class_name(group)))
}

/// A template and a plain attribute under one root namespace share a brief.
fn template_shares_brief(registry: &Registry) -> bool {
    let plain: FxHashSet<(Option<&str>, &str)> = registry
        .iter()
        .filter(|a| !a.is_template())
        .map(|a| (a.root_namespace(), a.brief()))
        .collect();
    registry
        .iter()
        .filter(|a| a.is_template())
        .any(|a| plain.contains(&(a.root_namespace(), a.brief())))
}

fn registry() -> impl Strategy<Value = Registry> {
    prop::collection::vec(attribute(), 0..20).prop_filter_map("collision", |specs| {
        let mut attrs = Vec::new();
        for (name, ty, template, brief) in specs {
            let ty = AttributeType::Primitive(ty);
            let attr = if template {
                Attribute::template(name, ty, brief)
            } else {
                Attribute::new(name, ty, brief)
            };
            attrs.push(attr.ok()?);
        }
        let registry = Registry::from_attributes(attrs).ok()?;
        let rejected = clashes_with_reserved_class(&registry) || template_shares_brief(&registry);
        (!rejected).then_some(registry)
    })
}

proptest! {
    #[test]
    fn all_layouts_are_consistent(registry in registry()) {
        let renderer = JavaRenderer::new(&JavaConfig::default());
        let reports = check_layouts(&renderer, &registry);
        prop_assert!(reports.is_ok(), "render failed: {:?}", reports.err());
        for report in reports.unwrap_or_default() {
            prop_assert!(report.is_clean(), "{}: {:?}", report.summary(), report.violations);
        }
    }

    #[test]
    fn every_attribute_rendered_once_per_layout(registry in registry()) {
        let renderer = JavaRenderer::new(&JavaConfig::default());
        let expected: BTreeSet<String> = registry.iter().map(|a| a.name().to_string()).collect();
        for layout in JavaLayout::ALL {
            let units = renderer.with_layout(layout).render(&registry);
            prop_assert!(units.is_ok(), "{layout} render failed: {:?}", units.err());
            let names: Vec<String> = units
                .unwrap_or_default()
                .iter()
                .flat_map(|u| u.declarations.iter().map(|d| d.name.clone()))
                .collect();
            prop_assert_eq!(names.len(), expected.len());
            prop_assert_eq!(names.into_iter().collect::<BTreeSet<_>>(), expected.clone());
        }
    }
}

#[test]
fn reserved_class_clash_is_a_render_error() {
    let registry = Registry::from_attributes([Attribute::new(
        "all.thing",
        AttributeType::Primitive(PrimitiveType::String),
        "x",
    )
    .unwrap()])
    .unwrap();
    assert!(clashes_with_reserved_class(&registry));
    let err = JavaRenderer::new(&JavaConfig::default())
        .with_layout(JavaLayout::SingleFile)
        .render(&registry)
        .unwrap_err();
    assert!(matches!(err, RenderError::DuplicateIdentifier { .. }));
}
