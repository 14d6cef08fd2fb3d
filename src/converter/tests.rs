use super::*;
use std::path::Path;

#[test]
fn test_policy_parsing() {
    assert_eq!("ignore".parse::<FailurePolicy>(), Ok(FailurePolicy::Ignore));
    assert_eq!("WARN".parse::<FailurePolicy>(), Ok(FailurePolicy::Warn));
    assert_eq!("fail".parse::<FailurePolicy>(), Ok(FailurePolicy::Fail));

    let err = "panic".parse::<FailurePolicy>().unwrap_err();
    assert!(err.contains("unknown failure policy"));
}

#[test]
fn test_policy_default_is_ignore() {
    assert_eq!(FailurePolicy::default(), FailurePolicy::Ignore);
}

#[test]
fn test_policy_display_round_trips() {
    for policy in [FailurePolicy::Ignore, FailurePolicy::Warn, FailurePolicy::Fail] {
        assert_eq!(policy.to_string().parse::<FailurePolicy>(), Ok(policy));
    }
}

#[test]
fn test_outcome_failure_classification() {
    assert!(!ConversionOutcome::Converted.is_failure());
    assert!(!ConversionOutcome::Skipped.is_failure());
    assert!(ConversionOutcome::Failed { code: Some(1) }.is_failure());
    assert!(ConversionOutcome::Unavailable {
        reason: "missing".to_string()
    }
    .is_failure());
}

#[test]
fn test_outcome_serializes_with_status_tag() {
    let json = serde_json::to_string(&ConversionOutcome::Failed { code: Some(3) }).unwrap();
    assert_eq!(json, r#"{"status":"failed","code":3}"#);

    let json = serde_json::to_string(&ConversionOutcome::Converted).unwrap();
    assert_eq!(json, r#"{"status":"converted"}"#);
}

#[test]
fn test_disabled_converter_skips() {
    let outcome = DisabledConverter.convert(Path::new("0.pvr"), Path::new("0.jpg"));
    assert_eq!(outcome, ConversionOutcome::Skipped);
}

#[test]
fn test_default_external_converter_program() {
    assert_eq!(
        ExternalConverter::default().program(),
        Path::new(DEFAULT_CONVERTER)
    );
}

#[test]
fn test_missing_converter_is_unavailable() {
    let tmp = tempfile::tempdir().unwrap();
    let converter = ExternalConverter::new(tmp.path().join("no-such-converter"));

    let outcome = converter.convert(&tmp.path().join("0.pvr"), &tmp.path().join("0.jpg"));
    assert!(matches!(outcome, ConversionOutcome::Unavailable { .. }));
    assert!(!tmp.path().join("0.jpg").exists());
}

#[cfg(unix)]
#[test]
fn test_external_converter_receives_both_paths() {
    let tmp = tempfile::tempdir().unwrap();
    let pvr = tmp.path().join("0.pvr");
    let jpg = tmp.path().join("0.jpg");
    std::fs::write(&pvr, b"container").unwrap();

    // `cp <pvr> <jpg>` stands in for a real converter
    let outcome = ExternalConverter::new("cp").convert(&pvr, &jpg);
    assert_eq!(outcome, ConversionOutcome::Converted);
    assert_eq!(std::fs::read(&jpg).unwrap(), b"container");
}

#[cfg(unix)]
#[test]
fn test_external_converter_reports_exit_code() {
    let tmp = tempfile::tempdir().unwrap();
    let outcome =
        ExternalConverter::new("false").convert(&tmp.path().join("0.pvr"), &tmp.path().join("0.jpg"));
    assert_eq!(outcome, ConversionOutcome::Failed { code: Some(1) });
}
