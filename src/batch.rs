//! Per-run accumulation of ingestion failures, grouped by kind.

use crate::failure::{Failure, FailureKind};

/// Everything that went wrong across one batch of attempted coverage files.
///
/// Append-only: the ingestion loop `push`es failures as files are attempted,
/// then hands the whole batch to the reporter once at the end of the run.
/// Kinds appear in first-occurrence order and instances within a kind keep
/// their processing order, so the same run always reports identically.
#[derive(Debug, Default)]
pub struct Batch {
    groups: Vec<Group>,
}

#[derive(Debug)]
struct Group {
    kind: FailureKind,
    failures: Vec<Failure>,
}

impl Batch {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// File a failure under its own kind.
    pub fn push(&mut self, failure: Failure) {
        let kind = failure.kind();
        match self.groups.iter_mut().find(|g| g.kind == kind) {
            Some(group) => group.failures.push(failure),
            None => self.groups.push(Group {
                kind,
                failures: vec![failure],
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total failure instances across all kinds.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.failures.len()).sum()
    }

    /// Distinct kinds present with at least one instance.
    pub fn kind_count(&self) -> usize {
        self.groups.len()
    }

    /// Instances recorded for `kind`, oldest first. Empty if none.
    pub fn get(&self, kind: FailureKind) -> &[Failure] {
        self.groups
            .iter()
            .find(|g| g.kind == kind)
            .map(|g| g.failures.as_slice())
            .unwrap_or(&[])
    }

    /// Groups in first-occurrence order; every yielded slice is non-empty.
    pub fn iter(&self) -> impl Iterator<Item = (FailureKind, &[Failure])> {
        self.groups.iter().map(|g| (g.kind, g.failures.as_slice()))
    }
}
