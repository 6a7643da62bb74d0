//! Path arithmetic for a pipeline run.

use crate::bundler::book::layout;
use std::path::{Path, PathBuf};

const WORKSPACE_FOLDER: &str = "workspace";
const BUILD_FOLDER: &str = "build";
const CHECKOUTS_FOLDER: &str = "checkouts";
const LOCK_FILE: &str = "Package.resolved";

/// Every location a run reads or writes, derived once from the inputs.
///
/// Stages take paths from here and never join them on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    package_path: PathBuf,
    project_root: PathBuf,
    workspace_root: PathBuf,
    build_path: PathBuf,
    checkout_root: PathBuf,
    bundle_path: PathBuf,
    lock_file: PathBuf,
}

impl ResolvedPaths {
    /// Derives all paths from the package manifest, project name and output root.
    pub fn new(package_path: &Path, project_name: &str, output_root: &Path) -> Self {
        let project_root = output_root.join(project_name);
        let workspace_root = project_root.join(WORKSPACE_FOLDER);
        let build_path = workspace_root.join(BUILD_FOLDER);
        let checkout_root = build_path.join(CHECKOUTS_FOLDER);
        let bundle_path = project_root.join(layout::bundle_folder(project_name));
        let lock_file = workspace_root.join(LOCK_FILE);

        Self {
            package_path: package_path.to_path_buf(),
            project_root,
            workspace_root,
            build_path,
            checkout_root,
            bundle_path,
            lock_file,
        }
    }

    /// Package manifest given as input.
    pub fn package_path(&self) -> &Path {
        &self.package_path
    }

    /// `<output>/<name>`
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Folder the manifest is copied into and resolved from.
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Build cache handed to the package manager.
    pub fn build_path(&self) -> &Path {
        &self.build_path
    }

    /// Folder holding one checkout per resolved dependency.
    pub fn checkout_root(&self) -> &Path {
        &self.checkout_root
    }

    /// Final bundle folder.
    pub fn bundle_path(&self) -> &Path {
        &self.bundle_path
    }

    /// Lock file written by dependency resolution.
    pub fn lock_file(&self) -> &Path {
        &self.lock_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_layout_from_inputs() {
        let paths = ResolvedPaths::new(Path::new("/pkg/Package.swift"), "Demo", Path::new("/out"));

        assert_eq!(paths.project_root(), Path::new("/out/Demo"));
        assert_eq!(paths.workspace_root(), Path::new("/out/Demo/workspace"));
        assert_eq!(paths.build_path(), Path::new("/out/Demo/workspace/build"));
        assert_eq!(
            paths.checkout_root(),
            Path::new("/out/Demo/workspace/build/checkouts")
        );
        assert_eq!(paths.bundle_path(), Path::new("/out/Demo/Demo.bundle"));
        assert_eq!(
            paths.lock_file(),
            Path::new("/out/Demo/workspace/Package.resolved")
        );
    }

    #[test]
    fn distinct_inputs_give_distinct_roots() {
        let a = ResolvedPaths::new(Path::new("/pkg/Package.swift"), "Demo", Path::new("/out"));
        let b = ResolvedPaths::new(Path::new("/pkg/Package.swift"), "Other", Path::new("/out"));
        let c = ResolvedPaths::new(Path::new("/pkg/Package.swift"), "Demo", Path::new("/elsewhere"));

        assert_ne!(a.bundle_path(), b.bundle_path());
        assert_ne!(a.workspace_root(), c.workspace_root());
    }
}
