//! Storage capability used by every pipeline stage.
//!
//! All filesystem mutation goes through [`Storage`]. Stages receive it as a
//! parameter so tests can observe or replace it.

use crate::bundler::error::StorageError;
use std::{
    future::Future,
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Filesystem capability consumed by the pipeline.
pub trait Storage {
    /// Creates `path` and any missing parents.
    ///
    /// Returns [`StorageError::AlreadyExists`] when the path is already present.
    fn create_folder(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<PathBuf, StorageError>> + Send;

    /// Writes `content` to `path`, replacing any existing file.
    fn create_file(
        &self,
        content: &[u8],
        path: &Path,
    ) -> impl Future<Output = Result<PathBuf, StorageError>> + Send;

    /// Copies `from` into the directory `to_dir`, keeping its file name.
    ///
    /// With `overwrite`, an existing item at the destination is removed first;
    /// without it, an existing item is [`StorageError::NotCopied`].
    fn copy(
        &self,
        from: &Path,
        to_dir: &Path,
        overwrite: bool,
    ) -> impl Future<Output = Result<PathBuf, StorageError>> + Send;

    /// Removes a file or directory tree. Never fails.
    fn remove(&self, path: &Path) -> impl Future<Output = ()> + Send;
}

/// [`Storage`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// Creates a new local storage handle.
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn create_folder(&self, path: &Path) -> Result<PathBuf, StorageError> {
        if fs::try_exists(path).await.unwrap_or(false) {
            return Err(StorageError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }

        fs::create_dir_all(path)
            .await
            .map_err(|source| StorageError::NotCreated {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(path.to_path_buf())
    }

    async fn create_file(&self, content: &[u8], path: &Path) -> Result<PathBuf, StorageError> {
        fs::write(path, content)
            .await
            .map_err(|source| StorageError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(path.to_path_buf())
    }

    async fn copy(
        &self,
        from: &Path,
        to_dir: &Path,
        overwrite: bool,
    ) -> Result<PathBuf, StorageError> {
        let not_copied = |to: &Path, source: io::Error| StorageError::NotCopied {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        };

        let file_name = from.file_name().ok_or_else(|| {
            not_copied(
                to_dir,
                io::Error::new(io::ErrorKind::InvalidInput, "source has no file name"),
            )
        })?;
        let destination = to_dir.join(file_name);

        if overwrite {
            self.remove(&destination).await;
        } else if fs::symlink_metadata(&destination).await.is_ok() {
            return Err(not_copied(
                &destination,
                io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists"),
            ));
        }

        let metadata = fs::metadata(from)
            .await
            .map_err(|e| not_copied(&destination, e))?;

        if metadata.is_dir() {
            copy_dir(from, &destination)
                .await
                .map_err(|e| not_copied(&destination, e))?;
        } else {
            fs::copy(from, &destination)
                .await
                .map_err(|e| not_copied(&destination, e))?;
        }

        Ok(destination)
    }

    async fn remove(&self, path: &Path) {
        let result = match fs::symlink_metadata(path).await {
            Ok(metadata) if metadata.is_dir() => fs::remove_dir_all(path).await,
            Ok(_) => fs::remove_file(path).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => log::debug!("Removed {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not remove {}: {}", path.display(), e),
        }
    }
}

/// Makes a symbolic link to a directory.
#[cfg(unix)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a directory.
#[cfg(windows)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}

/// Recursively copies a directory, preserving symlinks.
///
/// The walk is blocking, so it runs on the blocking thread pool.
async fn copy_dir(from: &Path, to: &Path) -> io::Result<()> {
    let from = from.to_path_buf();
    let to = to.to_path_buf();

    tokio::task::spawn_blocking(move || {
        for entry in walkdir::WalkDir::new(&from) {
            let entry = entry.map_err(io::Error::other)?;
            let rel_path = entry
                .path()
                .strip_prefix(&from)
                .map_err(io::Error::other)?;
            let dest_path = to.join(rel_path);

            if entry.file_type().is_symlink() {
                let target = std::fs::read_link(entry.path())?;
                if entry.path().is_dir() {
                    symlink_dir(&target, &dest_path)?;
                } else {
                    symlink_file(&target, &dest_path)?;
                }
            } else if entry.file_type().is_dir() {
                std::fs::create_dir_all(dest_path)?;
            } else {
                std::fs::copy(entry.path(), dest_path)?;
            }
        }

        Ok(())
    })
    .await
    .map_err(|e| io::Error::other(format!("Directory copy task panicked: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_folder_reports_existing_folder() {
        let temp = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new();
        let path = temp.path().join("a/b");

        assert_eq!(storage.create_folder(&path).await.unwrap(), path);
        assert!(matches!(
            storage.create_folder(&path).await,
            Err(StorageError::AlreadyExists { .. })
        ));
        assert!(path.is_dir());
    }

    #[tokio::test]
    async fn copy_overwrites_existing_destination() {
        let temp = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new();
        let source = temp.path().join("Foo.swift");
        let target = temp.path().join("out");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(&source, "new").unwrap();
        std::fs::write(target.join("Foo.swift"), "old").unwrap();

        let copied = storage.copy(&source, &target, true).await.unwrap();

        assert_eq!(copied, target.join("Foo.swift"));
        assert_eq!(std::fs::read_to_string(copied).unwrap(), "new");
    }

    #[tokio::test]
    async fn copy_without_overwrite_keeps_existing_destination() {
        let temp = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new();
        let source = temp.path().join("Foo.swift");
        let target = temp.path().join("out");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(&source, "new").unwrap();
        std::fs::write(target.join("Foo.swift"), "old").unwrap();

        let result = storage.copy(&source, &target, false).await;

        match result {
            Err(StorageError::NotCopied { source, .. }) => {
                assert_eq!(source.kind(), io::ErrorKind::AlreadyExists)
            }
            other => panic!("expected NotCopied, got {other:?}"),
        }
        assert_eq!(
            std::fs::read_to_string(target.join("Foo.swift")).unwrap(),
            "old"
        );
    }

    #[tokio::test]
    async fn copy_without_overwrite_into_empty_destination() {
        let temp = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new();
        let source = temp.path().join("Foo.swift");
        let target = temp.path().join("out");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(&source, "new").unwrap();

        let copied = storage.copy(&source, &target, false).await.unwrap();

        assert_eq!(std::fs::read_to_string(copied).unwrap(), "new");
    }

    #[tokio::test]
    async fn copy_of_missing_source_is_not_copied() {
        let temp = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new();

        let result = storage
            .copy(&temp.path().join("missing.swift"), temp.path(), true)
            .await;

        assert!(matches!(result, Err(StorageError::NotCopied { .. })));
    }

    #[tokio::test]
    async fn copy_recurses_into_directories() {
        let temp = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new();
        let source = temp.path().join("Nested");
        std::fs::create_dir_all(source.join("Inner")).unwrap();
        std::fs::write(source.join("Inner/A.swift"), "a").unwrap();
        let target = temp.path().join("out");
        std::fs::create_dir(&target).unwrap();

        storage.copy(&source, &target, true).await.unwrap();

        assert!(target.join("Nested/Inner/A.swift").is_file());
    }

    #[tokio::test]
    async fn remove_ignores_missing_paths() {
        let temp = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new();
        let dir = temp.path().join("tree");
        std::fs::create_dir_all(dir.join("x")).unwrap();

        storage.remove(&dir).await;
        storage.remove(&dir).await;

        assert!(!dir.exists());
    }
}
