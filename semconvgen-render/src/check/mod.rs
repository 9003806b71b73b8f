//! Cross-file consistency checks over rendered declarations.
//!
//! Every layout must be a pure presentation of one attribute set: the same
//! dotted name renders to the same identifier, type and description
//! wherever it appears, and grouped layouts partition the single-file
//! layout without additions, omissions or renames.

pub mod consistency;
pub mod partition;
pub mod types;

pub use consistency::{check_cross_unit_consistency, check_template_separation};
pub use partition::check_lossless_partition;
pub use types::*;

use semconvgen_core::config::JavaLayout;
use semconvgen_core::errors::RenderError;
use semconvgen_registry::Registry;

use crate::declaration::UnitDeclarations;
use crate::java::JavaRenderer;

/// Render `registry` in every layout and run every check across the results.
pub fn check_layouts(
    renderer: &JavaRenderer,
    registry: &Registry,
) -> Result<Vec<CheckReport>, RenderError> {
    let namespace = renderer.with_layout(JavaLayout::Namespace).render(registry)?;
    let root = renderer.with_layout(JavaLayout::RootNamespace).render(registry)?;
    let single = renderer.with_layout(JavaLayout::SingleFile).render(registry)?;

    let namespace: Vec<_> = namespace.iter().map(|u| u.as_declarations()).collect();
    let root: Vec<_> = root.iter().map(|u| u.as_declarations()).collect();
    let single: Vec<_> = single.iter().map(|u| u.as_declarations()).collect();

    let all: Vec<UnitDeclarations<'_>> = namespace
        .iter()
        .chain(&root)
        .chain(&single)
        .copied()
        .collect();

    let mut reports = vec![
        check_cross_unit_consistency(&all),
        check_template_separation(&all),
    ];
    if let [single] = single.as_slice() {
        reports.push(check_lossless_partition(&namespace, *single));
        reports.push(check_lossless_partition(&root, *single));
    }
    Ok(reports)
}

/// Run the checks that apply to an arbitrary set of units, e.g. files read
/// back from disk. With `single`, the other units must partition it.
pub fn check_units(
    units: &[UnitDeclarations<'_>],
    single: Option<UnitDeclarations<'_>>,
) -> Vec<CheckReport> {
    let mut all = units.to_vec();
    all.extend(single);

    let mut reports = vec![
        check_cross_unit_consistency(&all),
        check_template_separation(&all),
    ];
    if let Some(single) = single {
        reports.push(check_lossless_partition(units, single));
    }
    reports
}
