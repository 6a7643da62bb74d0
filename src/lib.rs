//! Swift Playground-style bundle builder.
//!
//! Takes a package manifest, resolves its dependencies with the package
//! manager, discovers the library modules written in the target language and
//! assembles them into a bundle.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
