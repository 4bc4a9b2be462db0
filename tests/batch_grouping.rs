use cov_triage::{Batch, Failure, FailureKind};
use std::path::Path;

fn parse(path: &str) -> Failure {
    Failure::parse_failure(Path::new(path), Vec::new())
}

fn missing(path: &str) -> Failure {
    Failure::missing_coverage(Path::new(path))
}

#[test]
fn starts_empty() {
    let batch = Batch::new();
    assert!(batch.is_empty());
    assert_eq!(batch.len(), 0);
    assert_eq!(batch.kind_count(), 0);
    assert!(batch.get(FailureKind::ParseFailure).is_empty());
}

#[test]
fn groups_by_kind_in_first_occurrence_order() {
    let mut batch = Batch::new();
    batch.push(missing("a.cov"));
    batch.push(parse("b.cov"));
    batch.push(missing("c.cov"));

    let kinds: Vec<FailureKind> = batch.iter().map(|(kind, _)| kind).collect();
    assert_eq!(
        kinds,
        vec![FailureKind::MissingCoverage, FailureKind::ParseFailure]
    );
    assert_eq!(batch.kind_count(), 2);
    assert_eq!(batch.len(), 3);
    assert!(!batch.is_empty());
}

#[test]
fn instances_keep_processing_order_within_a_kind() {
    let mut batch = Batch::new();
    batch.push(parse("first.cov"));
    batch.push(missing("other.cov"));
    batch.push(parse("second.cov"));
    batch.push(parse("third.cov"));

    let files: Vec<String> = batch
        .get(FailureKind::ParseFailure)
        .iter()
        .map(|f| f.filepath().display().to_string())
        .collect();
    assert_eq!(files, ["first.cov", "second.cov", "third.cov"]);
}

#[test]
fn absent_kind_yields_an_empty_slice() {
    let mut batch = Batch::new();
    batch.push(parse("a.cov"));
    assert!(batch.get(FailureKind::MappingSuspicious).is_empty());
}
