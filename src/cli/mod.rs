//! Command line interface for the playground bundler.
//!
//! This module parses arguments, wires the pipeline to the Swift toolchain
//! and the local filesystem, and renders the outcome.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::{ConsoleProgress, OutputManager};

use crate::{
    bundler::{
        LocalStorage, Pipeline, Settings, SettingsBuilder, SwiftPackageManager,
        utils::path::absolute,
    },
    error::{CliError, Result},
};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let config = RuntimeConfig::from(&args);
    let settings = create_settings(&args)?;
    config.verbose_println(&format!(
        "Bundle will be written to {}",
        settings.paths().bundle_path().display()
    ))?;

    let manager = match &args.swift {
        Some(swift) => SwiftPackageManager::new(absolute(swift)?),
        None => SwiftPackageManager::locate().map_err(|e| CliError::ToolNotFound {
            tool: "swift".to_string(),
            reason: e.to_string(),
        })?,
    };

    match manager.version().await {
        Ok(version) => log::info!("Using {}", version),
        Err(e) => config.warn(&format!(
            "{}, dependency resolution will likely fail",
            e
        ))?,
    }

    let pipeline = Pipeline::new(
        settings,
        LocalStorage::new(),
        manager,
        ConsoleProgress::new(config.output().clone()),
    );

    match pipeline.run().await {
        Ok(book) => {
            config.success(&format!("Created {}", book.path.display()))?;
            config.indent(&format!("modules: {}", book.modules.join(", ")))?;
            config.indent(&format!("size: {} bytes", book.size))?;
            config.indent(&format!("sha256: {}", book.checksum))?;
            Ok(0)
        }
        Err(e) => {
            config.error(&format!("information: {}", e))?;
            config.error(&format!(
                "could not build bundle '{}' ({})",
                pipeline.settings().bundle_name(),
                e.information()
            ))?;
            for suggestion in e.recovery_suggestions() {
                config.indent(&suggestion)?;
            }
            Ok(1)
        }
    }
}

/// Builds pipeline settings from arguments, making paths absolute.
pub fn create_settings(args: &Args) -> Result<Settings> {
    Ok(SettingsBuilder::new()
        .package_path(absolute(&args.package)?)
        .output_directory(absolute(&args.to)?)
        .bundle_name(args.name.trim())
        .cached(args.cached)
        .build()?)
}
