//! Top-level error types.
//!
//! Pipeline failures carry their own taxonomy ([`PipelineError`]); this module
//! wraps them together with CLI and settings failures for the binary.

use crate::bundler::{PipelineError, SettingsError};
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for the binary
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Invalid run settings
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Pipeline run failed
    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Required external tool is missing
    #[error("Tool not found: {tool} - {reason}")]
    ToolNotFound {
        /// Tool name
        tool: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Self::Pipeline(e) => e.recovery_suggestions(),
            Self::Cli(CliError::ToolNotFound { tool, .. }) => vec![format!(
                "Install {tool} or pass its location with --swift"
            )],
            _ => vec!["Run with --help to see the expected arguments".to_string()],
        }
    }
}
