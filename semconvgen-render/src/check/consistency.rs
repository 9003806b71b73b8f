//! Same name, same rendering; templates never shadow attributes.

use rustc_hash::FxHashMap;

use super::types::{CheckId, CheckReport, Violation};
use crate::declaration::{Declaration, UnitDeclarations};

/// Every dotted name that appears in more than one unit must carry the same
/// identifier, key class, type and description everywhere.
pub fn check_cross_unit_consistency(units: &[UnitDeclarations<'_>]) -> CheckReport {
    let mut report = CheckReport::new(CheckId::CrossUnitConsistency);
    let mut first_seen: FxHashMap<&str, (&str, &Declaration)> = FxHashMap::default();

    for unit in units {
        for declaration in unit.declarations {
            report.checked += 1;
            match first_seen.get(declaration.name.as_str()) {
                Some(&(first_source, first)) => compare(
                    first_source,
                    first,
                    unit.source,
                    declaration,
                    &mut report.violations,
                ),
                None => {
                    first_seen.insert(&declaration.name, (unit.source, declaration));
                }
            }
        }
    }

    tracing::debug!(summary = %report.summary(), "cross-unit consistency checked");
    report
}

/// Within each container, identifiers are unique, and a template shares
/// neither its identifier nor its description with a plain attribute.
pub fn check_template_separation(units: &[UnitDeclarations<'_>]) -> CheckReport {
    let mut report = CheckReport::new(CheckId::TemplateSeparation);

    for unit in units {
        let mut plain_by_description: FxHashMap<(&str, &str), Vec<&Declaration>> =
            FxHashMap::default();
        for declaration in unit.declarations.iter().filter(|d| !d.is_template()) {
            plain_by_description
                .entry((declaration.container.as_str(), declaration.description.as_str()))
                .or_default()
                .push(declaration);
        }
        for template in unit.declarations.iter().filter(|d| d.is_template()) {
            let key = (template.container.as_str(), template.description.as_str());
            for attribute in plain_by_description.get(&key).into_iter().flatten() {
                report.violations.push(Violation::TemplateDescriptionShared {
                    source: unit.source.to_string(),
                    container: template.container.clone(),
                    template: template.name.clone(),
                    attribute: attribute.name.clone(),
                });
            }
        }

        let mut by_identifier: FxHashMap<(&str, &str), &Declaration> = FxHashMap::default();
        for declaration in unit.declarations {
            report.checked += 1;
            let key = (declaration.container.as_str(), declaration.identifier.as_str());
            let Some(existing) = by_identifier.get(&key) else {
                by_identifier.insert(key, declaration);
                continue;
            };
            let violation = match (existing.is_template(), declaration.is_template()) {
                (true, false) | (false, true) => {
                    let (template, attribute) = if existing.is_template() {
                        (*existing, declaration)
                    } else {
                        (declaration, *existing)
                    };
                    Violation::TemplateCollision {
                        source: unit.source.to_string(),
                        container: declaration.container.clone(),
                        identifier: declaration.identifier.clone(),
                        template: template.name.clone(),
                        attribute: attribute.name.clone(),
                    }
                }
                _ => Violation::DuplicateIdentifier {
                    source: unit.source.to_string(),
                    container: declaration.container.clone(),
                    identifier: declaration.identifier.clone(),
                },
            };
            report.violations.push(violation);
        }
    }

    tracing::debug!(summary = %report.summary(), "template separation checked");
    report
}

/// Push one violation per field in which `b` differs from `a`.
pub(crate) fn compare(
    a_source: &str,
    a: &Declaration,
    b_source: &str,
    b: &Declaration,
    out: &mut Vec<Violation>,
) {
    let fields: [(&'static str, &str, &str); 5] = [
        ("identifier", a.identifier.as_str(), b.identifier.as_str()),
        ("key class", a.key_class.java_name(), b.key_class.java_name()),
        ("type", a.value_type.as_str(), b.value_type.as_str()),
        ("factory", a.factory.as_str(), b.factory.as_str()),
        ("description", a.description.as_str(), b.description.as_str()),
    ];
    for (field, first, second) in fields {
        if first != second {
            out.push(Violation::Inconsistent {
                name: a.name.clone(),
                field,
                first_source: a_source.to_string(),
                first: first.to_string(),
                second_source: b_source.to_string(),
                second: second.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::KeyClass;

    fn decl(container: &str, name: &str, key_class: KeyClass, description: &str) -> Declaration {
        Declaration {
            container: container.to_string(),
            identifier: name.replace('.', "_").to_uppercase(),
            name: name.to_string(),
            key_class,
            value_type: "String".to_string(),
            factory: "stringKey".to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_consistent_units_are_clean() {
        let a = vec![decl("ThirdAttributes", "third.attr_three", KeyClass::Attribute, "d")];
        let b = vec![decl("AllAttributes.ThirdAttributes", "third.attr_three", KeyClass::Attribute, "d")];
        let units = [
            UnitDeclarations { source: "ThirdAttributes.java", declarations: &a },
            UnitDeclarations { source: "AllAttributes.java", declarations: &b },
        ];
        let report = check_cross_unit_consistency(&units);
        assert!(report.is_clean());
        assert_eq!(report.checked, 2);
    }

    #[test]
    fn test_description_drift_detected() {
        let a = vec![decl("A", "third.attr_three", KeyClass::Attribute, "old")];
        let b = vec![decl("B", "third.attr_three", KeyClass::Attribute, "new")];
        let units = [
            UnitDeclarations { source: "A.java", declarations: &a },
            UnitDeclarations { source: "B.java", declarations: &b },
        ];
        let report = check_cross_unit_consistency(&units);
        assert_eq!(report.violations.len(), 1);
        match &report.violations[0] {
            Violation::Inconsistent { field, .. } => assert_eq!(*field, "description"),
            other => panic!("unexpected violation: {other}"),
        }
    }

    #[test]
    fn test_template_collision() {
        let decls = vec![
            decl("A", "a.b", KeyClass::Template, "t"),
            decl("A", "a.b", KeyClass::Attribute, "p"),
            decl("B", "a.b", KeyClass::Attribute, "p"),
        ];
        let units = [UnitDeclarations { source: "A.java", declarations: &decls }];
        let report = check_template_separation(&units);
        assert_eq!(report.violations.len(), 1);
        assert!(matches!(
            report.violations[0],
            Violation::TemplateCollision { .. }
        ));
    }

    #[test]
    fn test_template_sharing_description_with_attribute() {
        let decls = vec![
            decl("FirstAttributes", "first.hdr", KeyClass::Template, "same text"),
            decl("FirstAttributes", "first.plain", KeyClass::Attribute, "same text"),
            decl("FirstAttributes", "first.other", KeyClass::Attribute, "other text"),
        ];
        let units = [UnitDeclarations { source: "FirstAttributes.java", declarations: &decls }];
        let report = check_template_separation(&units);
        assert_eq!(
            report.violations,
            vec![Violation::TemplateDescriptionShared {
                source: "FirstAttributes.java".to_string(),
                container: "FirstAttributes".to_string(),
                template: "first.hdr".to_string(),
                attribute: "first.plain".to_string(),
            }]
        );
    }

    #[test]
    fn test_shared_description_across_containers_allowed() {
        let decls = vec![
            decl("AllAttributes.FirstAttributes", "first.hdr", KeyClass::Template, "same text"),
            decl("AllAttributes.SecondAttributes", "second.plain", KeyClass::Attribute, "same text"),
            decl("AllAttributes.ThirdAttributes", "third.hdr", KeyClass::Template, "same text"),
        ];
        let units = [UnitDeclarations { source: "AllAttributes.java", declarations: &decls }];
        assert!(check_template_separation(&units).is_clean());
    }

    #[test]
    fn test_duplicate_identifier() {
        let decls = vec![
            decl("A", "a.b", KeyClass::Attribute, "x"),
            decl("A", "a.b", KeyClass::Attribute, "x"),
        ];
        let units = [UnitDeclarations { source: "A.java", declarations: &decls }];
        let report = check_template_separation(&units);
        assert!(matches!(
            report.violations[0],
            Violation::DuplicateIdentifier { .. }
        ));
    }
}
