//! Bundle pipeline.
//!
//! Converts a package manifest and its resolved dependency checkouts into a
//! bundle: a fixed folder tree with manifests, one chapter, one content page,
//! one template page, a cover image, and one folder per library module.
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_playground::bundler::{
//!     LocalStorage, LogProgress, Pipeline, SettingsBuilder, SwiftPackageManager,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = SettingsBuilder::new()
//!     .package_path("/home/project/Package.swift")
//!     .bundle_name("Demo")
//!     .output_directory("/home/out")
//!     .cached(true)
//!     .build()?;
//!
//! let book = Pipeline::new(settings, LocalStorage::new(), SwiftPackageManager::locate()?, LogProgress)
//!     .run()
//!     .await?;
//! println!("{} modules bundled", book.modules.len());
//! # Ok(())
//! # }
//! ```

pub mod book;
pub mod builder;
pub mod error;
pub mod package;
pub mod settings;
pub mod utils;

pub use builder::{
    BundledBook, LogProgress, Pipeline, PipelineState, ProgressEvent, ProgressSink,
    RecordingProgress,
};
pub use error::{BookError, PipelineError, Result, SettingsError, StorageError};
pub use package::{CommandOutput, Module, ModuleKind, PackageManager, SwiftPackageManager};
pub use settings::{Language, ResolvedPaths, Settings, SettingsBuilder};
pub use utils::{LocalStorage, Storage};
