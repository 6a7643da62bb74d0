//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation
//! performed before any filesystem work starts.

use clap::Parser;
use std::path::PathBuf;

/// Swift Playground-style bundle builder
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_playground",
    version,
    about = "Builds a Swift Playground-style bundle from a package manifest",
    long_about = "Resolves the dependencies of a Swift package and bundles every Swift library module they provide.

The bundle is written to <to>/<name>/<name>.bundle. Dependencies are resolved in
<to>/<name>/workspace, which is removed after the run unless --cached is given.

Usage:
  kodegen_bundler_playground --package ./Package.swift --to ./out --name Demo
  kodegen_bundler_playground --package ./Package.swift --to ./out --name Demo --cached

Exit code 0 = bundle guaranteed to exist at the output path."
)]
pub struct Args {
    /// Path to the package manifest (e.g. /home/project/Package.swift)
    #[arg(short = 'p', long, value_name = "PATH")]
    pub package: PathBuf,

    /// Folder the project is created in
    #[arg(short = 't', long, value_name = "DIR")]
    pub to: PathBuf,

    /// Bundle name
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: String,

    /// Reuse dependencies resolved by a previous run
    #[arg(long)]
    pub cached: bool,

    /// Swift executable to use instead of the one on PATH
    #[arg(long, value_name = "PATH", env = "SWIFT_EXEC")]
    pub swift: Option<PathBuf>,

    /// Print substeps and paths
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        if !self.package.is_file() {
            return Err(format!(
                "Package manifest not found: {}",
                self.package.display()
            ));
        }

        if self.to.exists() && !self.to.is_dir() {
            return Err(format!("Output path is not a directory: {}", self.to.display()));
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print error message
    pub fn error(&self, message: &str) -> std::io::Result<()> {
        self.output.error(message)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
