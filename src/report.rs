//! Batch reporting: one grouped audit log plus at most one popup per kind.

use crate::batch::Batch;
use crate::failure::FailureKind;
use crate::host::{LogSink, Notifier};

/// Presents a completed [`Batch`] to the operator.
///
/// Both outputs are injected: `log` receives every line of the grouped
/// audit trail and `notifier` raises the per-kind popup. Reporting itself
/// never fails; a dead notifier is logged and skipped, since failing while
/// reporting failures would abort the very run that produced them.
pub struct Reporter<L: LogSink, N: Notifier> {
    log: L,
    notifier: N,
}

impl<L: LogSink, N: Notifier> Reporter<L, N> {
    pub fn new(log: L, notifier: N) -> Self {
        Self { log, notifier }
    }

    /// Log every failure in `batch` grouped by kind, then raise one popup
    /// per kind not listed in `suppress`.
    ///
    /// An empty batch produces no output at all. Suppression only silences
    /// popups; the audit lines for a suppressed kind are still written.
    pub fn report(&self, batch: &Batch, suppress: &[FailureKind]) {
        if batch.is_empty() {
            return;
        }

        let separator = "-".repeat(50);

        for (kind, failures) in batch.iter() {
            self.log.line(&separator);
            self.log.line(&format!("Files reporting {}:", kind.name()));
            for failure in failures {
                self.log.line(&format!(" - {}", failure.filepath().display()));
            }

            if suppress.contains(&kind) {
                continue;
            }

            // One popup describes the whole class of problem; the per-file
            // detail is already in the log above.
            if let Some(last) = failures.last() {
                if let Err(err) = self.notifier.notify(kind.severity(), &last.verbose()) {
                    self.log.line(&format!("notifier unavailable: {err:#}"));
                }
            }
        }

        self.log.line(&separator);
    }
}
