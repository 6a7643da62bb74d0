//! Package manager collaborator.
//!
//! The pipeline never spawns processes directly. It asks a [`PackageManager`]
//! for three queries and only inspects their exit code and stdout:
//!
//! - resolve the dependency graph into a build cache
//! - list the checkout folders the resolution produced
//! - describe the module graph of one checkout

mod discovery;
mod resolver;
mod swiftpm;

pub use discovery::{Module, ModuleKind, discover, parse_description};
pub use resolver::{TOOLING_PREFIX, resolve};
pub use swiftpm::SwiftPackageManager;

use std::{future::Future, io, path::Path};

/// Captured result of one external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Successful run with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed run with the given exit code and stderr.
    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Whether the command exited with status 0.
    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::Output> for CommandOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// External package manager queries.
///
/// `Err` means the command could not be run at all; a command that ran and
/// failed is an `Ok` with a non-zero [`CommandOutput::code`].
pub trait PackageManager {
    /// Resolves the dependencies of the package in `package_dir` into `build_path`.
    fn resolve_dependencies(
        &self,
        package_dir: &Path,
        build_path: &Path,
    ) -> impl Future<Output = io::Result<CommandOutput>> + Send;

    /// Lists the entries of `checkout_root`, one name per stdout line.
    fn list_checkouts(
        &self,
        checkout_root: &Path,
    ) -> impl Future<Output = io::Result<CommandOutput>> + Send;

    /// Describes the module graph of the package checked out at `checkout`.
    fn describe(&self, checkout: &Path) -> impl Future<Output = io::Result<CommandOutput>> + Send;
}
