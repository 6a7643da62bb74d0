//! Error types for the bundle pipeline.
//!
//! Three layers, innermost first:
//! - [`StorageError`] - a single filesystem capability call failed
//! - [`BookError`] - bundle assembly failed, wrapping the storage failure
//! - [`PipelineError`] - the closed set of outcomes a run can end with

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Invalid input rejected by [`SettingsBuilder`](crate::bundler::SettingsBuilder).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// A required field was not set.
    #[error("{0} is required")]
    Missing(&'static str),

    /// The bundle name cannot be used as a folder name.
    #[error("invalid bundle name '{name}': {reason}")]
    InvalidName {
        /// Rejected name
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Failure reported by a [`Storage`](crate::bundler::Storage) operation.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The folder was already present. Callers building intermediate
    /// structure treat this as success.
    #[error("{} already exists", path.display())]
    AlreadyExists {
        /// Path that was requested
        path: PathBuf,
    },

    /// The folder could not be created.
    #[error("could not create folder {}: {source}", path.display())]
    NotCreated {
        /// Path that was requested
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// The file could not be written.
    #[error("could not write file {}: {source}", path.display())]
    WriteFailed {
        /// Path that was requested
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// The item could not be copied.
    #[error("could not copy {} to {}: {source}", from.display(), to.display())]
    NotCopied {
        /// Source item
        from: PathBuf,
        /// Destination path
        to: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}

/// Failure while assembling the bundle directory tree.
#[derive(Error, Debug)]
pub enum BookError {
    /// A manifest document could not be rendered or written.
    #[error("could not write manifest {}: {reason}", path.display())]
    Manifest {
        /// Manifest path
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// A page body or page manifest could not be written.
    #[error("could not write page {}", path.display())]
    Page {
        /// Page folder
        path: PathBuf,
        /// Underlying storage failure
        #[source]
        source: StorageError,
    },

    /// The embedded cover image could not be decoded or written.
    #[error("could not write resource {}: {reason}", path.display())]
    Resource {
        /// Resource path
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// A module folder could not be created or one of its sources could not be copied.
    #[error("invalid module '{module}'")]
    InvalidModule {
        /// Module name
        module: String,
        /// Underlying storage failure
        #[source]
        source: StorageError,
    },
}

/// Terminal failure of a pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Workspace folders could not be created or verified.
    #[error("could not create project structure at {}", path.display())]
    Structure {
        /// Folder that failed
        path: PathBuf,
        /// Underlying storage failure
        #[source]
        source: StorageError,
    },

    /// The package manifest could not be copied or its dependencies resolved.
    #[error("could not build project package :: {}", path.display())]
    Package {
        /// Package manifest path given as input
        path: PathBuf,
    },

    /// Checkouts could not be listed, or no usable library module was found.
    #[error("could not get modules from dependencies: {reason}")]
    Checkout {
        /// What went wrong
        reason: String,
    },

    /// Bundle assembly failed.
    #[error("could not create bundle: {0}")]
    Book(#[from] BookError),

    /// Unexpected storage or process failure.
    #[error("{context}: {source}")]
    Io {
        /// What was being done
        context: String,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// Short one-line description suitable for console output.
    pub fn information(&self) -> String {
        match self {
            Self::Structure { .. } => "could not create project structure".to_string(),
            Self::Package { path } => {
                format!("could not build project 'Package.swift' :: {}", path.display())
            }
            Self::Checkout { .. } => "command 'swift package describe' failed".to_string(),
            Self::Book(_) => "could not create Swift Playground bundle".to_string(),
            Self::Io { context, .. } => context.clone(),
        }
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Self::Structure { path, .. } => vec![format!(
                "Check that {} is writable",
                path.display()
            )],
            Self::Package { path } => vec![
                format!("Check that {} exists and is a valid package manifest", path.display()),
                "Run `swift package resolve` in the package directory to see the full error"
                    .to_string(),
            ],
            Self::Checkout { .. } => vec![
                "Make sure the package declares at least one dependency with a Swift library"
                    .to_string(),
                "Retry without --cached to discard stale checkouts".to_string(),
            ],
            Self::Book(BookError::InvalidModule { module, .. }) => vec![format!(
                "Check that every source file of module '{module}' exists"
            )],
            Self::Book(_) => vec!["Check that the output directory is writable".to_string()],
            Self::Io { .. } => {
                vec!["Check that the Swift toolchain is installed and on PATH".to_string()]
            }
        }
    }

    /// Builds an [`PipelineError::Io`] from a context message.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
