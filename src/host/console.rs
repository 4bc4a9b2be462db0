//! Stock host implementations for processes without a real UI.

use super::{LogSink, Notifier};
use crate::failure::Severity;
use anyhow::Result;
use std::io::Write;
use tracing::info;

/// Routes audit lines into whatever `tracing` subscriber the host process
/// installed.
pub struct TracingSink;

impl LogSink for TracingSink {
    fn line(&self, line: &str) {
        info!("{line}");
    }
}

/// Messagebox stand-in: prints the notification to stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, severity: Severity, message: &str) -> Result<()> {
        let label = match severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "[{label}] {message}")?;
        Ok(())
    }
}

/// Swallows notifications entirely, for runs where the audit log is the
/// only wanted surface.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _severity: Severity, _message: &str) -> Result<()> {
        Ok(())
    }
}
