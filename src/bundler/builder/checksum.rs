//! Bundle checksum calculation.
//!
//! Bundles are directory trees, so the digest covers every file's relative
//! path and content in sorted order. Any entry that cannot be read fails the
//! whole digest.

use sha2::{Digest, Sha256};
use std::{io, path::Path};
use tokio::io::AsyncReadExt;

/// Calculates the SHA256 checksum of a directory tree.
///
/// Returns the hex-encoded hash (64 characters).
pub async fn calculate_sha256(path: &Path) -> io::Result<String> {
    let root = path.to_path_buf();
    let files = blocking(move || {
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(&root).follow_links(false) {
            let entry = entry.map_err(io::Error::other)?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    })
    .await?;

    let mut hasher = Sha256::new();
    for file in files {
        if let Ok(rel_path) = file.strip_prefix(path) {
            hasher.update(rel_path.to_string_lossy().as_bytes());
        }
        hash_file(&file, &mut hasher).await?;
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Total size in bytes of every file under `path`.
pub async fn total_size(path: &Path) -> io::Result<u64> {
    let root = path.to_path_buf();
    blocking(move || {
        let mut size = 0u64;
        for entry in walkdir::WalkDir::new(&root).follow_links(false) {
            let entry = entry.map_err(io::Error::other)?;
            if entry.file_type().is_file() {
                size += entry.metadata().map_err(io::Error::other)?.len();
            }
        }
        Ok(size)
    })
    .await
}

async fn blocking<T, F>(walk: F) -> io::Result<T>
where
    F: FnOnce() -> io::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(walk)
        .await
        .map_err(|e| io::Error::other(format!("Bundle walk task panicked: {}", e)))?
}

async fn hash_file(path: &Path, hasher: &mut Sha256) -> io::Result<()> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn directory_digest_depends_on_content() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("b");
        std::fs::create_dir_all(dir.join("x")).unwrap();
        std::fs::write(dir.join("x/a.txt"), "one").unwrap();

        let first = calculate_sha256(&dir).await.unwrap();
        assert_eq!(first, calculate_sha256(&dir).await.unwrap());
        assert_eq!(total_size(&dir).await.unwrap(), 3);

        std::fs::write(dir.join("x/a.txt"), "two").unwrap();
        assert_ne!(first, calculate_sha256(&dir).await.unwrap());
    }

    #[tokio::test]
    async fn digest_depends_on_file_names() {
        let temp = tempfile::tempdir().unwrap();
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        std::fs::create_dir_all(&a).unwrap();
        std::fs::create_dir_all(&b).unwrap();
        std::fs::write(a.join("one.txt"), "same").unwrap();
        std::fs::write(b.join("two.txt"), "same").unwrap();

        assert_ne!(
            calculate_sha256(&a).await.unwrap(),
            calculate_sha256(&b).await.unwrap()
        );
    }

    #[tokio::test]
    async fn unreadable_tree_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("gone");

        assert!(calculate_sha256(&missing).await.is_err());
        assert!(total_size(&missing).await.is_err());
    }
}
