//! The closed taxonomy of coverage-ingestion failures.
//!
//! Each attempted coverage file either loads cleanly or produces exactly one
//! [`Failure`]. The kind set is deliberately closed and flat: every consumer
//! (log formatting, popup dispatch) matches exhaustively, so adding a kind is
//! a compile-time event at each consumption site instead of a runtime
//! fallback branch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Read access to the host's coverage object.
///
/// The object's schema lives with the host; the taxonomy only needs the path
/// the data came from, so mapping warnings always name the file that actually
/// triggered them.
pub trait CoverageSource: fmt::Debug + Send + Sync {
    fn filepath(&self) -> &Path;
}

/// How badly a failure taints the file that produced it.
///
/// `Error` kinds exclude the file entirely; `Warning` kinds leave the file
/// loaded but flagged untrustworthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// The fixed set of recognized ingestion failure kinds.
///
/// The serde names double as the machine-stable identifiers used in config
/// files and logs; they must never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// Every registered parser rejected the file.
    #[serde(rename = "PARSE_FAILURE")]
    ParseFailure,
    /// The file parsed, but zero coverage records came out.
    #[serde(rename = "NO_COVERAGE_ERROR")]
    MissingCoverage,
    /// Records were extracted, but none fell inside a known code region.
    #[serde(rename = "NO_COVERAGE_MAPPED")]
    MappingAbsent,
    /// Mapped coverage exists but looks implausible for this binary.
    #[serde(rename = "BAD_COVERAGE_MAPPING")]
    MappingSuspicious,
}

impl FailureKind {
    /// Machine-stable identifier, shared read-only by every instance.
    pub fn name(self) -> &'static str {
        match self {
            FailureKind::ParseFailure => "PARSE_FAILURE",
            FailureKind::MissingCoverage => "NO_COVERAGE_ERROR",
            FailureKind::MappingAbsent => "NO_COVERAGE_MAPPED",
            FailureKind::MappingSuspicious => "BAD_COVERAGE_MAPPING",
        }
    }

    /// Short summary used in the one-line rendering.
    pub fn message(self) -> &'static str {
        match self {
            FailureKind::ParseFailure => "Failed to parse coverage file",
            FailureKind::MissingCoverage => "No coverage extracted from file",
            FailureKind::MappingAbsent => "No coverage data could be mapped",
            FailureKind::MappingSuspicious => "Coverage data appears badly mapped",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            FailureKind::ParseFailure | FailureKind::MissingCoverage => Severity::Error,
            FailureKind::MappingAbsent | FailureKind::MappingSuspicious => Severity::Warning,
        }
    }

    /// Verbose operator-facing template. Explains the kind, never the
    /// instance; per-file detail belongs to the batch log.
    pub fn description(self) -> &'static str {
        match self {
            FailureKind::ParseFailure => PARSE_FAILURE_DESC,
            FailureKind::MissingCoverage => MISSING_COVERAGE_DESC,
            FailureKind::MappingAbsent => MAPPING_ABSENT_DESC,
            FailureKind::MappingSuspicious => MAPPING_SUSPICIOUS_DESC,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One rejected candidate-parser attempt behind a parse failure.
#[derive(Debug)]
pub struct ParseAttempt {
    pub parser: String,
    pub error: anyhow::Error,
}

impl ParseAttempt {
    pub fn new(parser: &str, error: anyhow::Error) -> Self {
        Self {
            parser: parser.to_string(),
            error,
        }
    }
}

/// A single file's classified ingestion failure.
///
/// Built once at the moment the file's attempt is judged failed, immutable
/// afterwards. The payload shape is fixed per kind. Classification is
/// terminal: any retry (say, with a different parser) happens upstream
/// before a `Failure` is ever constructed.
#[derive(Debug, Error)]
pub enum Failure {
    /// Hard failure: the file contributes nothing.
    #[error("Failed to parse coverage file '{}'", .filepath.display())]
    ParseFailure {
        filepath: PathBuf,
        attempts: Vec<ParseAttempt>,
    },

    /// Hard failure: the file parsed fine but held no usable records.
    #[error("No coverage extracted from file '{}'", .filepath.display())]
    MissingCoverage { filepath: PathBuf },

    /// Warning: the file stays loaded, flagged unreliable.
    #[error("No coverage data could be mapped '{}'", .coverage.filepath().display())]
    MappingAbsent { coverage: Arc<dyn CoverageSource> },

    /// Warning: results may be shown but are explicitly untrustworthy.
    #[error("Coverage data appears badly mapped '{}'", .coverage.filepath().display())]
    MappingSuspicious { coverage: Arc<dyn CoverageSource> },
}

impl Failure {
    pub fn parse_failure(filepath: &Path, attempts: Vec<ParseAttempt>) -> Self {
        Failure::ParseFailure {
            filepath: filepath.to_path_buf(),
            attempts,
        }
    }

    pub fn missing_coverage(filepath: &Path) -> Self {
        Failure::MissingCoverage {
            filepath: filepath.to_path_buf(),
        }
    }

    /// The reported path comes from the coverage object itself, so the
    /// warning can never name a different file than the one that tripped it,
    /// even if the caller's own path tracking has drifted.
    pub fn mapping_absent(coverage: Arc<dyn CoverageSource>) -> Self {
        Failure::MappingAbsent { coverage }
    }

    pub fn mapping_suspicious(coverage: Arc<dyn CoverageSource>) -> Self {
        Failure::MappingSuspicious { coverage }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Failure::ParseFailure { .. } => FailureKind::ParseFailure,
            Failure::MissingCoverage { .. } => FailureKind::MissingCoverage,
            Failure::MappingAbsent { .. } => FailureKind::MappingAbsent,
            Failure::MappingSuspicious { .. } => FailureKind::MappingSuspicious,
        }
    }

    /// Path of the input file this failure is about.
    pub fn filepath(&self) -> &Path {
        match self {
            Failure::ParseFailure { filepath, .. } => filepath,
            Failure::MissingCoverage { filepath } => filepath,
            Failure::MappingAbsent { coverage } => coverage.filepath(),
            Failure::MappingSuspicious { coverage } => coverage.filepath(),
        }
    }

    pub fn message(&self) -> &'static str {
        self.kind().message()
    }

    pub fn severity(&self) -> Severity {
        self.kind().severity()
    }

    /// Multi-line text the notifier shows: stable name plus the kind's full
    /// description.
    pub fn verbose(&self) -> String {
        let kind = self.kind();
        format!("Error: {}\n\n{}", kind.name(), kind.description())
    }
}

const PARSE_FAILURE_DESC: &str = "\
One or more of the selected coverage files could not be parsed!

 Possible reasons:
 - The file is not actually a coverage file.
 - The coverage file is malformed or truncated.
 - No installed parser understands this format.

Please see the log for more details...";

const MISSING_COVERAGE_DESC: &str = "\
No usable coverage data was extracted from one of the selected files.

 Possible reasons:
 - The coverage file was collected against a different binary.
 - The executable name recorded at collection time does not match
   the module the pipeline was told to look for.
 - The instrumentation tool failed to record anything for this binary.

Please see the log for more details...";

const MAPPING_ABSENT_DESC: &str = "\
One of the loaded coverage files has no visibly mapped data.

 Possible reasons:
 - None of the recorded addresses fall within defined functions.
 - An absolute address trace was recorded with a different imagebase.
 - The coverage data is corrupt or malformed.

Please see the log for more details...";

const MAPPING_SUSPICIOUS_DESC: &str = "\
One of the loaded coverage files appears to be badly mapped.

 Possible reasons:
 - Coverage was loaded against the wrong binary or module.
 - The coverage was recorded on a different build of the binary
   than the one currently being analyzed.
 - The trace captured self-modifying code or something with very
   abnormal control flow (obfuscated code, malware, packers).
 - The coverage data is corrupt or malformed.

Any results derived from this file are PROBABLY WRONG and should not
be trusted, because the recorded addresses do not appear to match the
code layout of the binary under analysis.";
