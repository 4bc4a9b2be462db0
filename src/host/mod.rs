//! Host-supplied output primitives.
//!
//! The reporter writes through these seams instead of calling a global log
//! or a concrete UI directly, so a disassembler plugin, a headless harness,
//! and the test suite can each supply their own.

pub mod console;

use crate::failure::Severity;
use anyhow::Result;

pub use console::{ConsoleNotifier, NullNotifier, TracingSink};

/// Append-only destination for audit-log lines.
///
/// Assumed always available: a sink that could itself fail would have
/// nowhere left to report the failure.
pub trait LogSink {
    fn line(&self, line: &str);
}

/// Interactive notification surface (messagebox, modal, toast).
///
/// May fail, since headless hosts have none; the reporter logs the miss
/// and moves on.
pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str) -> Result<()>;
}
