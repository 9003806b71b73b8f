//! Grouped layouts must partition the single-file layout.

use std::collections::BTreeMap;

use super::consistency::compare;
use super::types::{CheckId, CheckReport, Violation};
use crate::declaration::{Declaration, UnitDeclarations};

/// The union of the grouped units must equal the single-file unit: no
/// additions, omissions, duplicates or renames.
pub fn check_lossless_partition(
    grouped: &[UnitDeclarations<'_>],
    single: UnitDeclarations<'_>,
) -> CheckReport {
    let mut report = CheckReport::new(CheckId::LosslessPartition);

    let expected: BTreeMap<&str, &Declaration> = single
        .declarations
        .iter()
        .map(|d| (d.name.as_str(), d))
        .collect();

    let mut found: BTreeMap<&str, Vec<(&str, &Declaration)>> = BTreeMap::new();
    for unit in grouped {
        for declaration in unit.declarations {
            found
                .entry(declaration.name.as_str())
                .or_default()
                .push((unit.source, declaration));
        }
    }

    for (name, occurrences) in &found {
        report.checked += 1;
        if occurrences.len() > 1 {
            report.violations.push(Violation::Duplicated {
                name: name.to_string(),
                sources: occurrences.iter().map(|(s, _)| s.to_string()).collect(),
            });
        }
        let (source, declaration) = occurrences[0];
        match expected.get(name) {
            Some(reference) => compare(
                single.source,
                reference,
                source,
                declaration,
                &mut report.violations,
            ),
            None => report.violations.push(Violation::Extra {
                source: source.to_string(),
                name: name.to_string(),
            }),
        }
    }

    for name in expected.keys() {
        if !found.contains_key(name) {
            report.violations.push(Violation::Missing {
                name: name.to_string(),
            });
        }
    }

    tracing::debug!(summary = %report.summary(), "partition checked");
    report
}
