//! Pipeline orchestration and coordination.
//!
//! This module provides the [`Pipeline`] orchestrator that turns a package
//! manifest into a bundle.
//!
//! # Overview
//!
//! A run:
//! 1. Creates the project root and build cache
//! 2. Resolves dependencies and lists their checkouts
//! 3. Discovers library modules in the target language
//! 4. Assembles the bundle and hashes it
//! 5. Cleans up transient build artifacts
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 digest of the finished bundle
//! - [`orchestrator`] - Main [`Pipeline`] struct and its state machine
//! - [`progress`] - Progress events and sinks

pub mod checksum;
mod orchestrator;
pub mod progress;

pub use orchestrator::{BundledBook, Pipeline, PipelineState};
pub use progress::{LogProgress, ProgressEvent, ProgressSink, RecordingProgress};
