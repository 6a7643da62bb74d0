//! Configuration for a pipeline run.
//!
//! [`Settings`] carries the caller's inputs, [`ResolvedPaths`] derives every
//! location the stages touch from them.

mod builder;
mod core;
mod language;
mod paths;

pub use builder::SettingsBuilder;
pub use self::core::Settings;
pub use language::Language;
pub use paths::ResolvedPaths;
