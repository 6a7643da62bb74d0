//! Main pipeline orchestration.
//!
//! This module provides the [`Pipeline`] that sequences the stages of a run
//! and owns the cleanup decision.

use super::{
    checksum::{calculate_sha256, total_size},
    progress::ProgressSink,
};
use crate::bundler::{
    book,
    error::{PipelineError, Result, StorageError},
    package::{self, Module, PackageManager},
    settings::Settings,
    utils::Storage,
};
use std::path::{Path, PathBuf};

/// Where a run currently stands.
///
/// A failure in any state ends the run; the last state reached decides what
/// the failure cleanup removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineState {
    /// Nothing has run yet.
    Idle,
    /// Project root and build cache exist.
    StructureReady,
    /// Dependency checkouts are listed.
    DependenciesResolved,
    /// Bundleable modules are known; assembly may have touched the bundle path.
    ModulesDiscovered,
    /// The bundle is complete.
    BundleAssembled,
    /// Transient artifacts are removed and the run succeeded.
    CleanedUp,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledBook {
    /// Bundle folder.
    pub path: PathBuf,
    /// Names of the modules copied into the bundle, in bundle order.
    pub modules: Vec<String>,
    /// SHA-256 over the bundle tree.
    pub checksum: String,
    /// Total size of the bundle's files in bytes.
    pub size: u64,
}

/// Pipeline orchestrator.
///
/// Runs structure creation, dependency resolution, module discovery and
/// bundle assembly in order, stopping at the first failure. Every run ends
/// with a best-effort cleanup that never changes its outcome.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_playground::bundler::{
///     LocalStorage, LogProgress, Pipeline, SettingsBuilder, SwiftPackageManager,
/// };
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = SettingsBuilder::new()
///     .package_path("/pkg/Package.swift")
///     .bundle_name("Demo")
///     .output_directory("/out")
///     .build()?;
///
/// let pipeline = Pipeline::new(
///     settings,
///     LocalStorage::new(),
///     SwiftPackageManager::locate()?,
///     LogProgress,
/// );
/// let book = pipeline.run().await?;
/// println!("Created {} ({})", book.path.display(), book.checksum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Pipeline<S, M, P> {
    settings: Settings,
    storage: S,
    manager: M,
    progress: P,
}

impl<S, M, P> Pipeline<S, M, P>
where
    S: Storage,
    M: PackageManager,
    P: ProgressSink,
{
    /// Creates a pipeline over the given capabilities.
    pub fn new(settings: Settings, storage: S, manager: M, progress: P) -> Self {
        Self {
            settings,
            storage,
            manager,
            progress,
        }
    }

    /// Returns the run settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the progress sink.
    pub fn progress(&self) -> &P {
        &self.progress
    }

    /// Returns the package manager.
    pub fn manager(&self) -> &M {
        &self.manager
    }

    /// Returns the storage capability.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Executes one run.
    ///
    /// Fresh runs first remove any workspace left by a previous run; cached
    /// runs keep it.
    pub async fn run(&self) -> Result<BundledBook> {
        let paths = self.settings.paths();

        if self.settings.cached() {
            log::debug!("Cached run, keeping {}", paths.workspace_root().display());
        } else {
            self.storage.remove(paths.workspace_root()).await;
        }

        let mut state = PipelineState::Idle;
        match self.execute(&mut state).await {
            Ok(book) => {
                self.cleanup(self.settings.cached()).await;
                transition(&mut state, PipelineState::CleanedUp);
                Ok(book)
            }
            Err(e) => {
                log::debug!("Run failed after {:?}: {}", state, e);
                self.cleanup(false).await;
                if state >= PipelineState::ModulesDiscovered {
                    self.storage.remove(paths.bundle_path()).await;
                }
                Err(e)
            }
        }
    }

    async fn execute(&self, state: &mut PipelineState) -> Result<BundledBook> {
        self.progress.step_started(&format!(
            "Creating bundle structure ({})",
            self.settings.bundle_name()
        ));
        let result = self.make_structure().await;
        self.complete(result)?;
        transition(state, PipelineState::StructureReady);

        self.progress.step_started("Downloading dependencies...");
        let result = self.checkouts().await;
        let checkouts = self.complete(result)?;
        transition(state, PipelineState::DependenciesResolved);

        self.progress.step_started("Getting modules from dependencies");
        let result = self.modules(&checkouts).await;
        if let Ok(modules) = &result {
            for module in modules {
                self.progress.substep(&module.name);
            }
        }
        let modules = self.complete(result)?;
        transition(state, PipelineState::ModulesDiscovered);

        self.progress.step_started("Building bundle...");
        let result = self.bundle(&modules).await;
        let book = self.complete(result)?;
        transition(state, PipelineState::BundleAssembled);

        Ok(book)
    }

    fn complete<T>(&self, result: Result<T>) -> Result<T> {
        self.progress.step_completed(result.is_ok());
        result
    }

    async fn make_structure(&self) -> Result<()> {
        let paths = self.settings.paths();
        for folder in [paths.project_root(), paths.build_path()] {
            self.ensure_folder(folder).await?;
        }
        Ok(())
    }

    async fn ensure_folder(&self, folder: &Path) -> Result<()> {
        match self.storage.create_folder(folder).await {
            Ok(_) => Ok(()),
            Err(StorageError::AlreadyExists { .. }) => {
                log::debug!("Reusing {}", folder.display());
                Ok(())
            }
            Err(source) => Err(PipelineError::Structure {
                path: folder.to_path_buf(),
                source,
            }),
        }
    }

    async fn checkouts(&self) -> Result<Vec<PathBuf>> {
        let paths = self.settings.paths();
        let checkouts = package::resolve(&self.storage, &self.manager, paths).await?;

        if checkouts.is_empty() {
            return Err(PipelineError::Checkout {
                reason: format!(
                    "no dependency checkouts found in {}",
                    paths.checkout_root().display()
                ),
            });
        }

        log::debug!("Found {} checkouts", checkouts.len());
        Ok(checkouts)
    }

    async fn modules(&self, checkouts: &[PathBuf]) -> Result<Vec<Module>> {
        let language = self.settings.target_language();
        let modules = package::discover(&self.manager, checkouts, language).await;

        if modules.is_empty() {
            return Err(PipelineError::Checkout {
                reason: format!("no {language} library modules found in dependencies"),
            });
        }
        Ok(modules)
    }

    async fn bundle(&self, modules: &[Module]) -> Result<BundledBook> {
        let bundle_path = self.settings.paths().bundle_path();

        book::assemble(
            &self.storage,
            bundle_path,
            self.settings.bundle_name(),
            modules,
        )
        .await?;

        let checksum = calculate_sha256(bundle_path)
            .await
            .map_err(|e| PipelineError::io("could not hash bundle", e))?;
        let size = total_size(bundle_path)
            .await
            .map_err(|e| PipelineError::io("could not measure bundle", e))?;

        Ok(BundledBook {
            path: bundle_path.to_path_buf(),
            modules: modules.iter().map(|m| m.name.clone()).collect(),
            checksum,
            size,
        })
    }

    /// Removes the lock file and, unless `keep_workspace`, the whole workspace.
    async fn cleanup(&self, keep_workspace: bool) {
        let paths = self.settings.paths();
        self.storage.remove(paths.lock_file()).await;
        if !keep_workspace {
            self.storage.remove(paths.workspace_root()).await;
        }
    }
}

fn transition(state: &mut PipelineState, next: PipelineState) {
    log::debug!("{:?} -> {:?}", state, next);
    *state = next;
}
