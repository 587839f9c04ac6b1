//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd project team.

use zimetric::{ZiError, ZiMetric, ZiMetricSet, ZiNoSessions, ZiParam};

fn metric(description: &str) -> ZiMetric {
    ZiMetric::new(description, vec![ZiParam::general("Key").required()], false).unwrap()
}

#[test]
fn test_registry_list_alternates_keys_and_descriptions() {
    let mut set = ZiMetricSet::new();
    set.register("mysql.ping", metric("Tests if connection is alive.")).unwrap();
    set.register("mysql.get_status_variables", metric("Returns status.")).unwrap();
    set.register("mysql.db.size", metric("Database size in bytes.")).unwrap();

    assert_eq!(
        set.list(),
        vec![
            "mysql.db.size",
            "Database size in bytes.",
            "mysql.get_status_variables",
            "Returns status.",
            "mysql.ping",
            "Tests if connection is alive.",
        ]
    );
    assert_eq!(set.len(), 3);
    assert_eq!(set.keys()[0], "mysql.db.size");
}

#[test]
fn test_registry_empty_list() {
    let set = ZiMetricSet::new();
    assert!(set.is_empty());
    assert!(set.list().is_empty());
}

#[test]
fn test_registry_duplicate_key_rejected() {
    let mut set = ZiMetricSet::new();
    set.register("k", metric("a")).unwrap();

    let err = set.register("k", metric("b")).unwrap_err();
    assert!(err.is_schema());
    assert_eq!(set.get("k").unwrap().description(), "a");
}

#[test]
fn test_registry_eval_by_key() {
    let set = ZiMetricSet::from_pairs(vec![("k", metric("a"))]).unwrap();

    let out = set.eval_params("k", &["v"], &ZiNoSessions).unwrap();
    assert_eq!(out["Key"], "v");

    let err = set.eval_params("missing", &["v"], &ZiNoSessions).unwrap_err();
    assert_eq!(err, ZiError::UnknownMetric("missing".to_string()));
}

#[test]
fn test_registry_from_pairs_rejects_duplicate_keys() {
    let set = ZiMetricSet::from_pairs(vec![("a", metric("x")), ("b", metric("y"))]).unwrap();
    assert_eq!(set.keys(), vec!["a", "b"]);

    let err = ZiMetricSet::from_pairs(vec![("k", metric("first")), ("k", metric("second"))])
        .unwrap_err();
    assert_eq!(
        err,
        ZiError::schema("metric \"k\" is already registered")
    );
}
