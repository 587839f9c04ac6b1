//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd project team.

use zimetric::{ZiError, ZiParam, ZiParamKind};

fn schema_message(err: ZiError) -> String {
    match err {
        ZiError::Schema { message } => message,
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_param_general_defaults() {
    let param = ZiParam::general("Key").build().unwrap();

    assert_eq!(param.name(), "Key");
    assert_eq!(param.kind(), ZiParamKind::General);
    assert!(!param.is_required());
    assert_eq!(param.default_value(), None);
    assert!(!param.has_validator());
    assert!(param.validate("anything").is_ok());
}

#[test]
fn test_param_empty_name_rejected() {
    let message = schema_message(ZiParam::general("").build().unwrap_err());
    assert!(message.contains("name cannot be empty"));

    assert!(ZiParam::connection("").build().is_err());
}

#[test]
fn test_param_session_only_from_connection() {
    let session = ZiParam::connection("URI").as_session().build().unwrap();
    assert_eq!(session.kind(), ZiParamKind::Session);

    let message = schema_message(ZiParam::general("URI").as_session().build().unwrap_err());
    assert!(message.contains("only connection typed parameter"));

    let twice = ZiParam::connection("URI").as_session().as_session().build();
    assert!(twice.is_err());
}

#[test]
fn test_param_default_on_required_rejected() {
    let message = schema_message(
        ZiParam::general("Key")
            .required()
            .with_default("x")
            .build()
            .unwrap_err(),
    );
    assert!(message.contains("default value cannot be applied"));
}

#[test]
fn test_param_required_with_default_rejected() {
    let message = schema_message(
        ZiParam::general("Key")
            .with_default("x")
            .required()
            .build()
            .unwrap_err(),
    );
    assert!(message.contains("cannot have a default value"));
}

#[test]
fn test_param_validator_replaced() {
    let param = ZiParam::general("Port")
        .with_validator(|_: &str| -> zimetric::Result<()> { Err(ZiError::validation("first")) })
        .with_validator(|v: &str| {
            if v == "80" {
                Ok(())
            } else {
                Err(ZiError::validation("second"))
            }
        })
        .build()
        .unwrap();

    assert!(param.has_validator());
    assert!(param.validate("80").is_ok());
    assert_eq!(
        param.validate("81").unwrap_err(),
        ZiError::validation("second")
    );
}

#[test]
fn test_param_default_kept() {
    let param = ZiParam::connection("URI")
        .with_default("tcp://localhost")
        .build()
        .unwrap();

    assert_eq!(param.default_value(), Some("tcp://localhost"));
    assert!(!param.is_required());
}
