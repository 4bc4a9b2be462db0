//! Failure triage for coverage-file ingestion.
//!
//! An upstream pipeline attempts to load and map a batch of coverage files
//! against the binary under analysis. Every attempt that goes wrong yields
//! exactly one [`Failure`], classified into the closed [`FailureKind`]
//! taxonomy and collected into a [`Batch`]. Once the whole batch has been
//! attempted, a [`Reporter`] emits one grouped audit log and at most one
//! popup per kind. Inputs here are routinely wrong (wrong binary, stale
//! build, truncated trace), so nothing fails fast: classify, keep going,
//! report once at the end.

pub mod batch;
pub mod config;
pub mod failure;
pub mod host;
pub mod report;

pub use batch::Batch;
pub use failure::{CoverageSource, Failure, FailureKind, ParseAttempt, Severity};
pub use report::Reporter;
