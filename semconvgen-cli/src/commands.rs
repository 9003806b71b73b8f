//! Command execution.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use semconvgen_core::config::SemconvConfig;
use semconvgen_core::errors::{ConfigError, GenerateError, OutputError};
use semconvgen_registry::Registry;
use semconvgen_render::check::{self, CheckReport};
use semconvgen_render::java::{parse_java_source, JavaSource};
use semconvgen_render::{output, JavaRenderer, MarkdownRenderer};

use crate::cli::{CheckArgs, Cli, Commands};

/// Resolve configuration for `cli` relative to `root` and run the command,
/// writing human-readable results to `out`.
pub fn run(cli: &Cli, root: &Path, out: &mut dyn Write) -> Result<(), GenerateError> {
    let overrides = cli.command.overrides();
    let config = SemconvConfig::load(root, cli.config.as_deref(), Some(&overrides))?;

    match &cli.command {
        Commands::Java(_) => run_java(&config, root, out),
        Commands::Markdown(_) => run_markdown(&config, root, out),
        Commands::Check(args) => run_check(&config, args, root, out),
    }
}

fn run_java(config: &SemconvConfig, root: &Path, out: &mut dyn Write) -> Result<(), GenerateError> {
    let registry = load_registry(config, root)?;
    let renderer = JavaRenderer::new(&config.java);
    let units = renderer.render(&registry)?;
    let dir = root.join(config.output.effective_dir());
    let written = output::write_units(&dir, &units, config.output.effective_overwrite())?;
    for path in &written {
        print_line(out, &path.display().to_string())?;
    }
    Ok(())
}

fn run_markdown(
    config: &SemconvConfig,
    root: &Path,
    out: &mut dyn Write,
) -> Result<(), GenerateError> {
    let registry = load_registry(config, root)?;
    let unit = MarkdownRenderer::new(&config.markdown).render(&registry);
    let dir = root.join(config.output.effective_dir());
    let written = output::write_units(&dir, &[unit], config.output.effective_overwrite())?;
    for path in &written {
        print_line(out, &path.display().to_string())?;
    }
    Ok(())
}

fn run_check(
    config: &SemconvConfig,
    args: &CheckArgs,
    root: &Path,
    out: &mut dyn Write,
) -> Result<(), GenerateError> {
    let mut reports: Vec<CheckReport> = Vec::new();

    if config.registry.path.is_some() {
        let registry = load_registry(config, root)?;
        reports.extend(check::check_layouts(&JavaRenderer::new(&config.java), &registry)?);
    }

    if let Some(dir) = &args.dir {
        let dir = root.join(dir);
        let single_path = args.single.as_ref().map(|p| root.join(p));
        let single = single_path.as_deref().map(read_source).transpose()?;

        let mut sources = Vec::new();
        for (path, text) in output::read_java_sources(&dir)? {
            if single_path.as_deref() == Some(path.as_path()) {
                continue;
            }
            sources.push(parse_java_source(&path.display().to_string(), &text)?);
        }
        info!(dir = %dir.display(), files = sources.len(), "checking generated sources");

        let units: Vec<_> = sources.iter().map(JavaSource::as_declarations).collect();
        reports.extend(check::check_units(
            &units,
            single.as_ref().map(JavaSource::as_declarations),
        ));
    }

    if reports.is_empty() {
        return Err(ConfigError::ValidationFailed {
            field: "check".to_string(),
            message: "nothing to check (give --registry and/or --dir)".to_string(),
        }
        .into());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&reports).map_err(|e| OutputError::Write {
            path: "<stdout>".to_string(),
            message: e.to_string(),
        })?;
        print_line(out, &json)?;
    } else {
        for report in &reports {
            print_line(out, &report.summary())?;
            for violation in &report.violations {
                print_line(out, &format!("  {violation}"))?;
            }
        }
    }

    let violations: usize = reports.iter().map(|r| r.violations.len()).sum();
    if violations > 0 {
        warn!(violations, "consistency check failed");
        return Err(GenerateError::CheckFailed { violations });
    }
    Ok(())
}

fn load_registry(config: &SemconvConfig, root: &Path) -> Result<Registry, GenerateError> {
    let path: &PathBuf = config
        .registry
        .path
        .as_ref()
        .ok_or_else(|| ConfigError::ValidationFailed {
            field: "registry.path".to_string(),
            message: "no registry given (use --registry or [registry] path)".to_string(),
        })?;
    Ok(Registry::load(&root.join(path))?)
}

fn read_source(path: &Path) -> Result<JavaSource, GenerateError> {
    let text = std::fs::read_to_string(path).map_err(|e| OutputError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(parse_java_source(&path.display().to_string(), &text)?)
}

fn print_line(out: &mut dyn Write, line: &str) -> Result<(), OutputError> {
    writeln!(out, "{line}").map_err(|e| OutputError::Write {
        path: "<stdout>".to_string(),
        message: e.to_string(),
    })
}
