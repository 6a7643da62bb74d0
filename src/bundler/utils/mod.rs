//! Filesystem and path helpers.

pub mod fs;
pub mod path;

pub use fs::{LocalStorage, Storage};
pub use path::resolve_path;
