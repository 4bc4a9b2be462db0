use cov_triage::FailureKind;
use cov_triage::config::Config;
use std::io::Write;

#[test]
fn parse_example_config() {
    let raw = include_str!("../cov-triage.example.toml");
    let cfg: Config = toml::from_str(raw).expect("parse TOML");
    assert_eq!(cfg.report.suppress, vec![FailureKind::MappingAbsent]);
}

#[test]
fn empty_config_suppresses_nothing() {
    let cfg: Config = toml::from_str("").expect("parse TOML");
    assert!(cfg.report.suppress.is_empty());
}

#[test]
fn unknown_kind_names_are_rejected() {
    let raw = "[report]\nsuppress = [\"SOMETHING_ELSE\"]\n";
    assert!(toml::from_str::<Config>(raw).is_err());
}

#[test]
fn load_reads_a_config_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "[report]\nsuppress = [\"PARSE_FAILURE\", \"NO_COVERAGE_ERROR\"]"
    )
    .expect("write config");

    let cfg = Config::load(file.path()).expect("load config");
    assert_eq!(
        cfg.report.suppress,
        vec![FailureKind::ParseFailure, FailureKind::MissingCoverage]
    );
}

#[test]
fn load_reports_missing_file() {
    let err = Config::load(std::path::Path::new("no-such-file.toml"))
        .err()
        .expect("missing file should fail");
    assert!(format!("{err:#}").contains("no-such-file.toml"));
}
