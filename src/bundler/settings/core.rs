//! Core Settings struct and implementations.

use super::{Language, ResolvedPaths};
use std::path::{Path, PathBuf};

/// Inputs of one pipeline run, constructed via [`SettingsBuilder`](super::SettingsBuilder).
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_playground::bundler::SettingsBuilder;
///
/// # fn example() -> Result<(), kodegen_bundler_playground::bundler::SettingsError> {
/// let settings = SettingsBuilder::new()
///     .package_path("/pkg/Package.swift")
///     .bundle_name("Demo")
///     .output_directory("/out")
///     .cached(false)
///     .build()?;
/// assert_eq!(settings.paths().bundle_path().to_str(), Some("/out/Demo/Demo.bundle"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package manifest path.
    package_path: PathBuf,

    /// Bundle name, also used for the chapter and page.
    bundle_name: String,

    /// Folder the project root is created in.
    output_directory: PathBuf,

    /// Reuse a previous workspace instead of starting fresh.
    cached: bool,

    /// Modules in any other language are skipped.
    target_language: Language,

    paths: ResolvedPaths,
}

impl Settings {
    /// Returns the package manifest path.
    pub fn package_path(&self) -> &Path {
        &self.package_path
    }

    /// Returns the bundle name.
    pub fn bundle_name(&self) -> &str {
        &self.bundle_name
    }

    /// Returns the output directory.
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Whether this run reuses a previous workspace.
    pub fn cached(&self) -> bool {
        self.cached
    }

    /// Returns the language modules must be written in.
    pub fn target_language(&self) -> &Language {
        &self.target_language
    }

    /// Returns the derived paths for this run.
    pub fn paths(&self) -> &ResolvedPaths {
        &self.paths
    }

    pub(super) fn new(
        package_path: PathBuf,
        bundle_name: String,
        output_directory: PathBuf,
        cached: bool,
        target_language: Language,
    ) -> Self {
        let paths = ResolvedPaths::new(&package_path, &bundle_name, &output_directory);
        Self {
            package_path,
            bundle_name,
            output_directory,
            cached,
            target_language,
            paths,
        }
    }
}
