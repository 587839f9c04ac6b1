//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd project team.

use zimetric::{ZiError, ZiMetric, ZiParam, ZiParamKind};

fn schema_message(err: ZiError) -> String {
    match err {
        ZiError::Schema { message } => message,
        other => panic!("expected schema error, got {other:?}"),
    }
}

fn digits_only(value: &str) -> zimetric::Result<()> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ZiError::validation("value must be a number"))
    }
}

#[test]
fn test_metric_accepts_session_connection_general_layout() {
    let metric = ZiMetric::new(
        "Returns replication status.",
        vec![
            ZiParam::connection("URI").as_session(),
            ZiParam::connection("User"),
            ZiParam::connection("Password"),
            ZiParam::general("Master"),
        ],
        false,
    )
    .unwrap();

    assert_eq!(metric.description(), "Returns replication status.");
    assert_eq!(metric.params().len(), 4);
    assert!(metric.has_session());
    assert!(!metric.is_variadic());
    assert_eq!(metric.param("User").unwrap().kind(), ZiParamKind::Connection);
    assert!(metric.param("user").is_none());
}

#[test]
fn test_metric_duplicate_name_rejected() {
    let err = ZiMetric::new(
        "dup",
        vec![ZiParam::general("Key"), ZiParam::general("Key")],
        false,
    )
    .unwrap_err();

    assert!(schema_message(err).contains("\"Key\" must be unique"));
}

#[test]
fn test_metric_session_must_be_first() {
    let err = ZiMetric::new(
        "misplaced",
        vec![
            ZiParam::connection("User"),
            ZiParam::connection("URI").as_session(),
        ],
        false,
    )
    .unwrap_err();

    assert!(schema_message(err).contains("session must be placed first"));
}

#[test]
fn test_metric_connection_run_must_start_first() {
    let err = ZiMetric::new(
        "late",
        vec![ZiParam::general("Key"), ZiParam::connection("User")],
        false,
    )
    .unwrap_err();

    assert!(schema_message(err).contains("placed in a row"));
}

#[test]
fn test_metric_connection_run_must_be_contiguous() {
    let err = ZiMetric::new(
        "gap",
        vec![
            ZiParam::connection("URI").as_session(),
            ZiParam::connection("User"),
            ZiParam::general("Key"),
            ZiParam::connection("Password"),
        ],
        false,
    )
    .unwrap_err();

    let message = schema_message(err);
    assert!(message.contains("placed in a row"));
    assert!(message.contains("4th parameter \"Password\""));
}

#[test]
fn test_metric_invalid_default_rejected_at_construction() {
    let err = ZiMetric::new(
        "bad default",
        vec![
            ZiParam::general("Host"),
            ZiParam::general("Port")
                .with_default("http")
                .with_validator(digits_only),
        ],
        false,
    )
    .unwrap_err();

    assert_eq!(
        schema_message(err),
        "invalid default value \"http\" for 2nd parameter \"Port\": value must be a number"
    );
}

#[test]
fn test_metric_valid_default_accepted() {
    let metric = ZiMetric::new(
        "good default",
        vec![ZiParam::general("Port")
            .with_default("10050")
            .with_validator(digits_only)],
        true,
    )
    .unwrap();

    assert!(metric.is_variadic());
    assert_eq!(metric.params()[0].default_value(), Some("10050"));
}

#[test]
fn test_metric_builder_fault_propagates() {
    let err = ZiMetric::new(
        "fault",
        vec![ZiParam::general("Key"), ZiParam::general("Other").as_session()],
        false,
    )
    .unwrap_err();

    assert!(err.is_schema());
}

#[test]
fn test_metric_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ZiMetric>();
}
