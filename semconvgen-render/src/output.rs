//! Writing rendered units to disk and reading generated sources back.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use semconvgen_core::errors::OutputError;

use crate::declaration::RenderedUnit;

/// Write each unit to `dir/<file_name>`, creating `dir` if needed.
///
/// Existing files are only replaced when `overwrite` is set. Nothing is
/// written if any target would be refused.
pub fn write_units(
    dir: &Path,
    units: &[RenderedUnit],
    overwrite: bool,
) -> Result<Vec<PathBuf>, OutputError> {
    std::fs::create_dir_all(dir).map_err(|e| OutputError::CreateDir {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let targets: Vec<PathBuf> = units.iter().map(|u| dir.join(&u.file_name)).collect();
    if !overwrite {
        if let Some(existing) = targets.iter().find(|p| p.exists()) {
            return Err(OutputError::AlreadyExists {
                path: existing.display().to_string(),
            });
        }
    }

    for (unit, path) in units.iter().zip(&targets) {
        std::fs::write(path, &unit.content).map_err(|e| OutputError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), bytes = unit.content.len(), "unit written");
    }

    info!(dir = %dir.display(), files = targets.len(), "output written");
    Ok(targets)
}

/// Read every `*.java` file under `dir`, sorted by path.
pub fn read_java_sources(dir: &Path) -> Result<Vec<(PathBuf, String)>, OutputError> {
    let base = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&base).join("**").join("*.java");
    let entries = glob::glob(&pattern.to_string_lossy()).map_err(|e| OutputError::Read {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| OutputError::Read {
            path: e.path().display().to_string(),
            message: e.to_string(),
        })?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .into_iter()
        .map(|path| {
            let text = std::fs::read_to_string(&path).map_err(|e| OutputError::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            Ok((path, text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(name: &str, content: &str) -> RenderedUnit {
        RenderedUnit {
            file_name: name.to_string(),
            class_name: String::new(),
            content: content.to_string(),
            declarations: Vec::new(),
        }
    }

    #[test]
    fn test_write_and_refuse_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("nested/out");
        let units = vec![unit("A.java", "class A {\n}")];

        let written = write_units(&out, &units, false).unwrap();
        assert_eq!(written, vec![out.join("A.java")]);
        assert_eq!(std::fs::read_to_string(&written[0]).unwrap(), "class A {\n}");

        let err = write_units(&out, &units, false).unwrap_err();
        assert!(matches!(err, OutputError::AlreadyExists { .. }));

        let replaced = vec![unit("A.java", "class A {\n  // new\n}")];
        write_units(&out, &replaced, true).unwrap();
        assert!(std::fs::read_to_string(out.join("A.java"))
            .unwrap()
            .contains("// new"));
    }

    #[test]
    fn test_read_java_sources_sorted() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("B.java"), "b").unwrap();
        std::fs::write(dir.path().join("A.java"), "a").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let sources = read_java_sources(dir.path()).unwrap();
        let names: Vec<_> = sources
            .iter()
            .map(|(p, _)| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["A.java", "B.java"]);
    }

    #[test]
    fn test_read_java_sources_bracketed_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("gen[v1]*");
        std::fs::create_dir_all(&out).unwrap();
        std::fs::write(out.join("A.java"), "a").unwrap();

        let sources = read_java_sources(&out).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].0, out.join("A.java"));
    }
}
