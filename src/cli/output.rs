//! Colored terminal output.

use crate::bundler::ProgressSink;
use console::{Term, style};
use std::io;

/// Writes user-facing messages to stderr.
#[derive(Debug, Clone)]
pub struct OutputManager {
    term: Term,
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            verbose,
            quiet,
        }
    }

    /// Whether `--verbose` output is shown.
    pub fn shows_detail(&self) -> bool {
        self.verbose && !self.quiet
    }

    /// Printed only with `--verbose`.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.shows_detail() {
            self.term.write_line(&format!("{}", style(message).dim()))?;
        }
        Ok(())
    }

    /// Indented detail line, printed only with `--verbose`.
    pub fn detail(&self, message: &str) -> io::Result<()> {
        if self.shows_detail() {
            self.term
                .write_line(&format!("    {}", style(message).dim()))?;
        }
        Ok(())
    }

    /// Step header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term
            .write_line(&format!("{} {}", style("▸").cyan(), style(title).bold()))
    }

    /// Success message.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term
            .write_line(&format!("{} {}", style("✓").green().bold(), message))
    }

    /// Warning message.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term
            .write_line(&format!("{} {}", style("⚠").yellow().bold(), message))
    }

    /// Error message, printed even in quiet mode.
    pub fn error(&self, message: &str) -> io::Result<()> {
        self.term
            .write_line(&format!("{} {}", style("✗").red().bold(), message))
    }

    /// Indented detail line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&format!("    {}", message))
    }
}

/// Renders pipeline progress on the terminal.
#[derive(Debug, Clone)]
pub struct ConsoleProgress {
    output: OutputManager,
}

impl ConsoleProgress {
    /// Creates a console sink writing through `output`.
    pub fn new(output: OutputManager) -> Self {
        Self { output }
    }
}

fn report(result: io::Result<()>) {
    if let Err(e) = result {
        log::debug!("Could not write progress: {}", e);
    }
}

impl ProgressSink for ConsoleProgress {
    fn step_started(&self, label: &str) {
        report(self.output.section(label));
    }

    fn substep(&self, label: &str) {
        report(self.output.detail(label));
    }

    fn step_completed(&self, success: bool) {
        if success {
            report(self.output.success("done"));
        } else {
            report(self.output.error("failed"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_needs_verbose_without_quiet() {
        assert!(!OutputManager::new(false, false).shows_detail());
        assert!(OutputManager::new(true, false).shows_detail());
        assert!(!OutputManager::new(true, true).shows_detail());
    }

    #[test]
    fn substeps_are_hidden_without_verbose() {
        let progress = ConsoleProgress::new(OutputManager::new(false, false));
        assert!(!progress.output.shows_detail());
        progress.substep("AlphaCore");
    }
}
