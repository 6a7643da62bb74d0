//! Kodegen Bundler Playground - builds Swift Playground-style bundles.
//!
//! This binary resolves a package's dependencies and bundles their library
//! modules, exiting non-zero when any stage fails.

use kodegen_bundler_playground::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  - {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
