//! Lexical path normalization.

use path_absolutize::Absolutize;
use std::{
    io,
    path::{Path, PathBuf},
};

/// Joins `relative` onto `base` and folds `.` and `..` segments.
///
/// Purely lexical; the filesystem is not consulted. An absolute `relative`
/// replaces `base`.
pub fn resolve_path(base: &Path, relative: impl AsRef<Path>) -> io::Result<PathBuf> {
    Ok(base.join(relative).absolutize()?.into_owned())
}

/// Makes `path` absolute against the current directory.
pub fn absolute(path: &Path) -> io::Result<PathBuf> {
    Ok(path.absolutize()?.into_owned())
}
