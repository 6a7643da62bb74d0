//! Builder for constructing Settings.

use super::{Language, Settings};
use crate::bundler::error::SettingsError;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// `package_path`, `bundle_name` and `output_directory` are required.
#[derive(Default)]
pub struct SettingsBuilder {
    package_path: Option<PathBuf>,
    bundle_name: Option<String>,
    output_directory: Option<PathBuf>,
    cached: bool,
    target_language: Option<Language>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the package manifest path (e.g. `/home/project/Package.swift`).
    pub fn package_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.package_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the bundle name.
    pub fn bundle_name<S: Into<String>>(mut self, name: S) -> Self {
        self.bundle_name = Some(name.into());
        self
    }

    /// Sets the folder the project is created in.
    pub fn output_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Reuse checkouts from a previous run.
    ///
    /// Default: false
    pub fn cached(mut self, cached: bool) -> Self {
        self.cached = cached;
        self
    }

    /// Sets the language modules must be written in.
    ///
    /// Default: [`Language::Swift`]
    pub fn target_language(mut self, language: Language) -> Self {
        self.target_language = Some(language);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or the bundle name
    /// is empty or contains a path separator.
    pub fn build(self) -> Result<Settings, SettingsError> {
        let package_path = self
            .package_path
            .ok_or(SettingsError::Missing("package_path"))?;
        let output_directory = self
            .output_directory
            .ok_or(SettingsError::Missing("output_directory"))?;
        let bundle_name = self
            .bundle_name
            .ok_or(SettingsError::Missing("bundle_name"))?;

        if bundle_name.trim().is_empty() {
            return Err(SettingsError::InvalidName {
                name: bundle_name,
                reason: "cannot be empty",
            });
        }
        if bundle_name.contains(['/', '\\']) || bundle_name == "." || bundle_name == ".." {
            return Err(SettingsError::InvalidName {
                name: bundle_name,
                reason: "must be a single path component",
            });
        }

        Ok(Settings::new(
            package_path,
            bundle_name,
            output_directory,
            self.cached,
            self.target_language.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_name() {
        let result = SettingsBuilder::new()
            .package_path("/pkg/Package.swift")
            .output_directory("/out")
            .build();
        assert!(matches!(result, Err(SettingsError::Missing("bundle_name"))));
    }

    #[test]
    fn build_rejects_nested_name() {
        let result = SettingsBuilder::new()
            .package_path("/pkg/Package.swift")
            .bundle_name("a/b")
            .output_directory("/out")
            .build();
        assert!(matches!(result, Err(SettingsError::InvalidName { .. })));
    }

    #[test]
    fn build_defaults_to_swift_and_fresh_run() {
        let settings = SettingsBuilder::new()
            .package_path("/pkg/Package.swift")
            .bundle_name("Demo")
            .output_directory("/out")
            .build()
            .unwrap();

        assert_eq!(settings.target_language(), &Language::Swift);
        assert!(!settings.cached());
        assert_eq!(settings.paths().project_root(), Path::new("/out/Demo"));
    }
}
