//! Shared fakes for pipeline tests.

#![allow(dead_code)]

use kodegen_bundler_playground::bundler::{
    CommandOutput, LocalStorage, PackageManager, Settings, SettingsBuilder, Storage,
    StorageError,
};
use serde_json::json;
use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tempfile::TempDir;

/// One target in a fake checkout.
#[derive(Debug, Clone)]
pub struct FakeTarget {
    pub name: String,
    pub target_type: String,
    pub module_type: String,
    pub sources: Vec<String>,
}

impl FakeTarget {
    pub fn new(name: &str, target_type: &str, module_type: &str, sources: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            target_type: target_type.to_string(),
            module_type: module_type.to_string(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn swift_library(name: &str, sources: &[&str]) -> Self {
        Self::new(name, "library", "SwiftTarget", sources)
    }

    fn path(&self) -> String {
        format!("Sources/{}", self.name)
    }
}

/// Package manager double that materializes checkouts on resolve.
#[derive(Debug, Default)]
pub struct ScriptedManager {
    /// Checkout names in listing order, tooling checkouts included.
    pub listing: Vec<String>,
    /// Targets per checkout name.
    pub checkouts: BTreeMap<String, Vec<FakeTarget>>,
    /// Exit code returned by resolve.
    pub resolve_code: i32,
    /// Exit code returned by the listing.
    pub list_code: i32,
    /// Checkouts whose describe exits non-zero.
    pub failing_describe: Vec<String>,
    /// Sources that are described but never written to disk.
    pub missing_sources: Vec<String>,
    /// Every command received, in order.
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checkout(mut self, name: &str, targets: Vec<FakeTarget>) -> Self {
        self.listing.push(name.to_string());
        self.checkouts.insert(name.to_string(), targets);
        self
    }

    pub fn tooling(mut self, name: &str) -> Self {
        self.listing.push(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn materialize(&self, build_path: &Path) -> io::Result<()> {
        for name in &self.listing {
            let checkout = build_path.join("checkouts").join(name);
            std::fs::create_dir_all(&checkout)?;
            for target in self.checkouts.get(name).into_iter().flatten() {
                for source in &target.sources {
                    if self.missing_sources.contains(source) {
                        continue;
                    }
                    let file = checkout.join(target.path()).join(source);
                    if let Some(parent) = file.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&file, format!("// {}\n", target.name))?;
                }
            }
        }
        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl PackageManager for ScriptedManager {
    async fn resolve_dependencies(
        &self,
        package_dir: &Path,
        build_path: &Path,
    ) -> io::Result<CommandOutput> {
        self.record(format!("resolve {}", package_dir.display()));
        if self.resolve_code != 0 {
            return Ok(CommandOutput::failure(self.resolve_code, "resolution failed"));
        }
        std::fs::write(package_dir.join("Package.resolved"), "{}")?;
        self.materialize(build_path)?;
        Ok(CommandOutput::success(""))
    }

    async fn list_checkouts(&self, checkout_root: &Path) -> io::Result<CommandOutput> {
        self.record(format!("list {}", checkout_root.display()));
        if self.list_code != 0 {
            return Ok(CommandOutput::failure(self.list_code, "No such file or directory"));
        }
        let mut stdout = self.listing.join("\n");
        stdout.push('\n');
        Ok(CommandOutput::success(stdout))
    }

    async fn describe(&self, checkout: &Path) -> io::Result<CommandOutput> {
        let name = file_name(checkout);
        self.record(format!("describe {name}"));
        if self.failing_describe.contains(&name) {
            return Ok(CommandOutput::failure(1, "error: manifest parse failure"));
        }

        let targets: Vec<_> = self
            .checkouts
            .get(&name)
            .into_iter()
            .flatten()
            .map(|t| {
                json!({
                    "name": t.name,
                    "type": t.target_type,
                    "module_type": t.module_type,
                    "path": t.path(),
                    "sources": t.sources,
                })
            })
            .collect();

        let description = json!({
            "name": name,
            "path": checkout,
            "targets": targets,
        });
        Ok(CommandOutput::success(description.to_string()))
    }
}

/// Local storage that records removals and never performs them.
#[derive(Debug, Default)]
pub struct StickyStorage {
    inner: LocalStorage,
    pub removed: Mutex<Vec<PathBuf>>,
}

impl Storage for StickyStorage {
    async fn create_folder(&self, path: &Path) -> Result<PathBuf, StorageError> {
        self.inner.create_folder(path).await
    }

    async fn create_file(&self, content: &[u8], path: &Path) -> Result<PathBuf, StorageError> {
        self.inner.create_file(content, path).await
    }

    async fn copy(
        &self,
        from: &Path,
        to_dir: &Path,
        overwrite: bool,
    ) -> Result<PathBuf, StorageError> {
        self.inner.copy(from, to_dir, overwrite).await
    }

    async fn remove(&self, path: &Path) {
        self.removed.lock().unwrap().push(path.to_path_buf());
    }
}

/// Temporary project with a package manifest and an output folder.
pub struct TestProject {
    pub temp: TempDir,
    pub package: PathBuf,
    pub output: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("Failed to create temp dir");
        let package_dir = temp.path().join("pkg");
        std::fs::create_dir_all(&package_dir).expect("Failed to create package dir");
        let package = package_dir.join("Package.swift");
        std::fs::write(&package, include_str!("../fixtures/Package.swift"))
            .expect("Failed to write manifest");
        let output = temp.path().join("out");

        Self {
            temp,
            package,
            output,
        }
    }

    pub fn settings(&self, cached: bool) -> Settings {
        SettingsBuilder::new()
            .package_path(&self.package)
            .bundle_name("Demo")
            .output_directory(&self.output)
            .cached(cached)
            .build()
            .expect("valid settings")
    }
}
