use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use semconvgen_core::config::{CliOverrides, JavaLayout};

/// semconvgen - attribute-key code generator for semantic conventions
#[derive(Debug, Parser)]
#[command(name = "semconvgen")]
#[command(about = "Render semantic-convention attribute registries as Java classes and Markdown")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ./semconvgen.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render Java attribute-key classes
    Java(JavaArgs),

    /// Render the Markdown attribute registry
    Markdown(MarkdownArgs),

    /// Check that every layout presents the same attributes
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct JavaArgs {
    /// Registry file or directory
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Layout: namespace, root-namespace or single-file
    #[arg(long)]
    pub layout: Option<JavaLayout>,

    /// Java package of the generated classes
    #[arg(long)]
    pub package: Option<String>,

    /// Container class for the single-file layout
    #[arg(long)]
    pub class_name: Option<String>,

    /// Replace existing files
    #[arg(long)]
    pub overwrite: bool,
}

#[derive(Debug, Args)]
pub struct MarkdownArgs {
    /// Registry file or directory
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace an existing file
    #[arg(long)]
    pub overwrite: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Registry file or directory; all layouts are rendered in memory and checked
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Directory of generated Java files to check
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Single-file rendering the files in --dir must partition
    #[arg(long, requires = "dir")]
    pub single: Option<PathBuf>,

    /// Print reports as JSON
    #[arg(long)]
    pub json: bool,
}

impl Commands {
    /// Config overrides carried by the selected subcommand.
    pub fn overrides(&self) -> CliOverrides {
        let flag = |set: bool| set.then_some(true);
        match self {
            Self::Java(args) => CliOverrides {
                registry_path: args.registry.clone(),
                output_dir: args.output.clone(),
                java_package: args.package.clone(),
                java_layout: args.layout,
                java_class_name: args.class_name.clone(),
                overwrite: flag(args.overwrite),
            },
            Self::Markdown(args) => CliOverrides {
                registry_path: args.registry.clone(),
                output_dir: args.output.clone(),
                overwrite: flag(args.overwrite),
                ..Default::default()
            },
            Self::Check(args) => CliOverrides {
                registry_path: args.registry.clone(),
                ..Default::default()
            },
        }
    }
}
