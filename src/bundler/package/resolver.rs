//! Dependency resolution and checkout listing.

use super::PackageManager;
use crate::bundler::{
    error::{PipelineError, Result},
    settings::ResolvedPaths,
    utils::{Storage, resolve_path},
};
use std::path::PathBuf;

/// Checkouts whose name starts with this prefix belong to the toolchain
/// itself and never contribute modules.
pub const TOOLING_PREFIX: &str = "swift-";

/// Copies the manifest into the workspace, resolves its dependencies and
/// returns the absolute path of every non-tooling checkout.
///
/// An unlistable checkout root yields an empty list; the caller decides
/// what an empty list means. Order follows the listing command.
pub async fn resolve<S, M>(storage: &S, manager: &M, paths: &ResolvedPaths) -> Result<Vec<PathBuf>>
where
    S: Storage,
    M: PackageManager,
{
    let manifest = storage
        .copy(paths.package_path(), paths.workspace_root(), true)
        .await
        .map_err(|e| {
            log::debug!("Copying package manifest failed: {}", e);
            PipelineError::Package {
                path: paths.package_path().to_path_buf(),
            }
        })?;
    log::debug!("Copied package manifest to {}", manifest.display());

    let output = manager
        .resolve_dependencies(paths.workspace_root(), paths.build_path())
        .await
        .map_err(|e| PipelineError::io("could not run dependency resolution", e))?;
    if !output.is_success() {
        log::debug!("Dependency resolution failed: {}", output.stderr.trim());
        return Err(PipelineError::Package {
            path: paths.package_path().to_path_buf(),
        });
    }

    let listing = match manager.list_checkouts(paths.checkout_root()).await {
        Ok(output) if output.is_success() => output.stdout,
        Ok(output) => {
            log::warn!(
                "Listing {} failed with {:?}",
                paths.checkout_root().display(),
                output.code
            );
            return Ok(Vec::new());
        }
        Err(e) => {
            log::warn!("Listing {} failed: {}", paths.checkout_root().display(), e);
            return Ok(Vec::new());
        }
    };

    checkout_names(&listing)
        .map(|name| {
            resolve_path(paths.checkout_root(), name)
                .map_err(|e| PipelineError::io(format!("could not resolve checkout '{name}'"), e))
        })
        .collect()
}

fn checkout_names(listing: &str) -> impl Iterator<Item = &str> {
    listing
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter(|name| {
            let tooling = name.starts_with(TOOLING_PREFIX);
            if tooling {
                log::debug!("Skipping tooling checkout {}", name);
            }
            !tooling
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooling_checkouts_are_dropped() {
        let names: Vec<_> = checkout_names("swift-tools-support\nAlpha\n\nBeta\n").collect();
        assert_eq!(names, ["Alpha", "Beta"]);
    }

    #[test]
    fn listing_order_is_kept() {
        let names: Vec<_> = checkout_names("Zeta\nAlpha\nZeta\n").collect();
        assert_eq!(names, ["Zeta", "Alpha", "Zeta"]);
    }
}
