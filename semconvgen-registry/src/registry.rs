//! The canonical attribute set.

use std::collections::BTreeMap;
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use semconvgen_core::errors::RegistryError;

use crate::attribute::Attribute;
use crate::document::{DocumentFormat, RegistryDocument};

/// Attributes grouped by a namespace key, both levels sorted.
/// The `None` key holds attributes without a namespace.
pub type AttributeGroups<'a> = BTreeMap<Option<&'a str>, Vec<&'a Attribute>>;

/// Extensions picked up when loading a registry directory.
const REGISTRY_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// A validated, immutable set of attributes keyed by dotted name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    attributes: BTreeMap<String, Attribute>,
}

impl Registry {
    /// Build a registry, rejecting duplicate names and names that collapse
    /// onto the same constant identifier.
    pub fn from_attributes(
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<Self, RegistryError> {
        let mut by_name = BTreeMap::new();
        let mut by_identifier: FxHashMap<String, String> = FxHashMap::default();

        for attribute in attributes {
            let identifier = attribute.constant_name();
            if by_name.contains_key(attribute.name()) {
                return Err(RegistryError::DuplicateAttribute {
                    name: attribute.name().to_string(),
                });
            }
            if let Some(existing) = by_identifier.get(&identifier) {
                return Err(RegistryError::IdentifierCollision {
                    first: existing.clone(),
                    second: attribute.name().to_string(),
                    identifier,
                });
            }
            by_identifier.insert(identifier, attribute.name().to_string());
            by_name.insert(attribute.name().to_string(), attribute);
        }

        debug!(count = by_name.len(), "registry validated");
        Ok(Self {
            attributes: by_name,
        })
    }

    /// Parse a single registry document.
    pub fn from_document_str(
        source_name: &str,
        text: &str,
        format: DocumentFormat,
    ) -> Result<Self, RegistryError> {
        let document = RegistryDocument::parse(source_name, text, format)?;
        Self::from_attributes(document.into_attributes()?)
    }

    /// Load a registry file, or every registry file under a directory.
    ///
    /// Directory entries are read in sorted path order and merged; a name
    /// defined in two files is a duplicate.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let files = if path.is_dir() {
            collect_registry_files(path)?
        } else {
            vec![path.to_path_buf()]
        };
        if files.is_empty() {
            return Err(RegistryError::Empty {
                path: path.display().to_string(),
            });
        }

        let mut attributes = Vec::new();
        for file in &files {
            let text = std::fs::read_to_string(file).map_err(|e| RegistryError::Io {
                path: file.display().to_string(),
                message: e.to_string(),
            })?;
            let format =
                DocumentFormat::from_extension(file.extension().and_then(|e| e.to_str()));
            let document = RegistryDocument::parse(&file.display().to_string(), &text, format)?;
            let parsed = document.into_attributes()?;
            debug!(file = %file.display(), count = parsed.len(), "registry file parsed");
            attributes.extend(parsed);
        }

        let registry = Self::from_attributes(attributes)?;
        info!(
            path = %path.display(),
            files = files.len(),
            attributes = registry.len(),
            "registry loaded"
        );
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// All attributes, sorted by dotted name.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    /// Sorted, de-duplicated root namespaces (un-namespaced attributes excluded).
    pub fn root_namespaces(&self) -> Vec<&str> {
        let mut roots: Vec<&str> = self.iter().filter_map(Attribute::root_namespace).collect();
        roots.sort_unstable();
        roots.dedup();
        roots
    }

    /// Group by first name segment.
    pub fn group_by_root_namespace(&self) -> AttributeGroups<'_> {
        self.group_by(Attribute::root_namespace)
    }

    /// Group by everything before the last name segment.
    pub fn group_by_namespace(&self) -> AttributeGroups<'_> {
        self.group_by(Attribute::namespace)
    }

    fn group_by<'a>(&'a self, key: impl Fn(&'a Attribute) -> Option<&'a str>) -> AttributeGroups<'a> {
        let mut groups: AttributeGroups<'a> = BTreeMap::new();
        for attribute in self.iter() {
            groups.entry(key(attribute)).or_default().push(attribute);
        }
        groups
    }
}

/// Registry files under `dir`, sorted by path.
fn collect_registry_files(dir: &Path) -> Result<Vec<std::path::PathBuf>, RegistryError> {
    let mut files = Vec::new();
    let base = glob::Pattern::escape(&dir.to_string_lossy());
    for ext in REGISTRY_EXTENSIONS {
        let pattern = Path::new(&base).join("**").join(format!("*.{ext}"));
        let pattern = pattern.to_string_lossy();
        let entries = glob::glob(&pattern).map_err(|e| RegistryError::Io {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        for entry in entries {
            let path = entry.map_err(|e| RegistryError::Io {
                path: e.path().display().to_string(),
                message: e.to_string(),
            })?;
            if path.is_file() {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}
