//! [`PackageManager`] backed by the Swift toolchain.

use super::{CommandOutput, PackageManager};
use std::{
    ffi::OsStr,
    io,
    path::{Path, PathBuf},
};
use tokio::process::Command;

/// Runs `swift package` subcommands.
#[derive(Debug, Clone)]
pub struct SwiftPackageManager {
    swift: PathBuf,
}

impl SwiftPackageManager {
    /// Uses the given `swift` executable.
    pub fn new(swift: impl Into<PathBuf>) -> Self {
        Self {
            swift: swift.into(),
        }
    }

    /// Finds `swift` on `PATH`.
    pub fn locate() -> io::Result<Self> {
        let swift = which::which("swift").map_err(|e| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("swift not found in PATH: {}", e),
            )
        })?;
        log::debug!("Using swift at {}", swift.display());
        Ok(Self::new(swift))
    }

    /// Path of the `swift` executable in use.
    pub fn swift(&self) -> &Path {
        &self.swift
    }

    /// First line of `swift --version`.
    ///
    /// Fails when the executable cannot be run or exits non-zero.
    pub async fn version(&self) -> io::Result<String> {
        let output = run(&self.swift, ["--version"]).await?;
        if !output.is_success() {
            return Err(io::Error::other(format!(
                "{} --version exited with {:?}",
                self.swift.display(),
                output.code
            )));
        }
        Ok(output.stdout.lines().next().unwrap_or_default().trim().to_string())
    }
}

async fn run<I, S>(program: &Path, args: I) -> io::Result<CommandOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command.args(args);
    log::debug!("Running {:?}", command.as_std());

    let output: CommandOutput = command.output().await?.into();
    if !output.is_success() {
        log::debug!(
            "{} exited with {:?}: {}",
            program.display(),
            output.code,
            output.stderr.trim()
        );
    }
    Ok(output)
}

impl PackageManager for SwiftPackageManager {
    async fn resolve_dependencies(
        &self,
        package_dir: &Path,
        build_path: &Path,
    ) -> io::Result<CommandOutput> {
        run(
            &self.swift,
            [
                OsStr::new("package"),
                OsStr::new("--package-path"),
                package_dir.as_os_str(),
                OsStr::new("--build-path"),
                build_path.as_os_str(),
                OsStr::new("resolve"),
            ],
        )
        .await
    }

    async fn list_checkouts(&self, checkout_root: &Path) -> io::Result<CommandOutput> {
        run(Path::new("ls"), [OsStr::new("-1"), checkout_root.as_os_str()]).await
    }

    async fn describe(&self, checkout: &Path) -> io::Result<CommandOutput> {
        run(
            &self.swift,
            [
                OsStr::new("package"),
                OsStr::new("--package-path"),
                checkout.as_os_str(),
                OsStr::new("describe"),
                OsStr::new("--type"),
                OsStr::new("json"),
            ],
        )
        .await
    }
}
