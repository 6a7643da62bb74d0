//! Module discovery from `swift package describe --type json`.

use super::PackageManager;
use crate::bundler::{settings::Language, utils::resolve_path};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Product type of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    /// Importable library target.
    Library,
    /// Executable target.
    Executable,
    /// Tests, plugins, macros and anything else.
    Other,
}

impl ModuleKind {
    fn from_target_type(target_type: &str) -> Self {
        match target_type {
            "library" => Self::Library,
            "executable" => Self::Executable,
            _ => Self::Other,
        }
    }
}

/// One unit of source code found in a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Module name, unique within its checkout.
    pub name: String,
    /// Product type.
    pub kind: ModuleKind,
    /// Source language.
    pub language: Language,
    /// Absolute root of the module's sources.
    pub path: PathBuf,
    /// Source files relative to `path`, in declaration order.
    pub sources: Vec<String>,
}

impl Module {
    /// Whether this module can be added to a bundle targeting `language`.
    pub fn is_bundleable(&self, language: &Language) -> bool {
        self.kind == ModuleKind::Library && &self.language == language
    }
}

#[derive(Debug, Deserialize)]
struct PackageDescription {
    path: PathBuf,
    #[serde(default)]
    targets: Vec<TargetDescription>,
}

#[derive(Debug, Deserialize)]
struct TargetDescription {
    name: String,
    #[serde(rename = "type")]
    target_type: String,
    #[serde(default)]
    module_type: Option<String>,
    path: PathBuf,
    #[serde(default)]
    sources: Vec<String>,
}

/// Parses the JSON package description into modules.
///
/// Anything printed before the opening brace (toolchain warnings) is skipped.
pub fn parse_description(stdout: &str) -> Result<Vec<Module>, serde_json::Error> {
    let json = stdout.find('{').map_or(stdout, |start| &stdout[start..]);
    let description: PackageDescription = serde_json::from_str(json)?;

    Ok(description
        .targets
        .into_iter()
        .map(|target| Module {
            path: module_root(&description.path, &target.path),
            name: target.name,
            kind: ModuleKind::from_target_type(&target.target_type),
            language: target
                .module_type
                .as_deref()
                .map(Language::from_module_type)
                .unwrap_or_default(),
            sources: target.sources,
        })
        .collect())
}

fn module_root(package: &Path, target: &Path) -> PathBuf {
    resolve_path(package, target).unwrap_or_else(|_| package.join(target))
}

/// Describes every checkout and keeps the library modules written in `language`.
///
/// A checkout whose description fails or cannot be parsed contributes no
/// modules. Results keep checkout order, then declaration order.
pub async fn discover<M: PackageManager>(
    manager: &M,
    checkouts: &[PathBuf],
    language: &Language,
) -> Vec<Module> {
    let mut modules = Vec::new();

    for checkout in checkouts {
        let output = match manager.describe(checkout).await {
            Ok(output) if output.is_success() => output,
            Ok(output) => {
                log::warn!(
                    "Describing {} failed with {:?}",
                    checkout.display(),
                    output.code
                );
                continue;
            }
            Err(e) => {
                log::warn!("Describing {} failed: {}", checkout.display(), e);
                continue;
            }
        };

        match parse_description(&output.stdout) {
            Ok(found) => modules.extend(found.into_iter().filter(|module| {
                let keep = module.is_bundleable(language);
                if !keep {
                    log::debug!(
                        "Skipping module {} ({:?}, {})",
                        module.name,
                        module.kind,
                        module.language
                    );
                }
                keep
            })),
            Err(e) => log::warn!("Unreadable description of {}: {}", checkout.display(), e),
        }
    }

    modules
}
