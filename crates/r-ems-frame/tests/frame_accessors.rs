//! ---
//! ems_section: "02-messaging-ipc-data-model"
//! ems_subsection: "integration-tests"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Typed accessors over data frame messages."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use r_ems_frame::{DataFrame, DataFrameExt, FrameError, FrameValue, Payload, SchemaError, Source};
use r_ems_frame_schema::MAX_SOURCES;

fn frame_with(payload: Payload) -> DataFrame {
    DataFrame {
        payload: payload as i32,
        value_numeric: 42,
        value_measurement: 229.7,
        value_textual: "breaker closed".into(),
        value_blob: vec![0x01, 0xfe],
        source: Vec::new(),
    }
}

fn pairs(frame: &DataFrame) -> Vec<(&str, &str)> {
    frame
        .source
        .iter()
        .map(|s| (s.field.as_str(), s.value.as_str()))
        .collect()
}

#[test]
fn value_follows_discriminant() -> Result<()> {
    assert_eq!(frame_with(Payload::Empty).value()?, None);
    assert_eq!(
        frame_with(Payload::Number).value()?,
        Some(FrameValue::Number(42))
    );
    assert_eq!(
        frame_with(Payload::Real).value()?,
        Some(FrameValue::Real(229.7))
    );
    assert_eq!(
        frame_with(Payload::Text).value()?,
        Some(FrameValue::from("breaker closed"))
    );
    assert_eq!(
        frame_with(Payload::Binary).value()?,
        Some(FrameValue::from(vec![0x01, 0xfe]))
    );
    Ok(())
}

#[test]
fn unknown_discriminant_fails_fast() {
    let mut frame = frame_with(Payload::Number);
    frame.payload = 9;
    let err = frame.value().unwrap_err();
    assert!(matches!(err, FrameError::UnknownPayloadKind { discriminant: 9 }));
    assert_eq!(err.to_string(), "unknown payload kind: 9");
}

#[test]
fn empty_frame_has_empty_source_map() {
    let frame = DataFrame::default();
    assert!(frame.source_map().is_empty());
    assert_eq!(frame.value().ok(), Some(None));
}

#[test]
fn set_then_get_round_trips_on_fresh_frame() -> Result<()> {
    let mut frame = DataFrame::default();
    let mut entries = BTreeMap::new();
    entries.insert("a", "1");
    entries.insert("b", "2");
    frame.extend_sources(entries)?;

    let map = frame.source_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map["a"], "1");
    assert_eq!(map["b"], "2");
    Ok(())
}

#[test]
fn later_duplicate_wins_in_map_view() {
    let frame = DataFrame {
        source: vec![
            Source {
                field: "x".into(),
                value: "1".into(),
            },
            Source {
                field: "x".into(),
                value: "2".into(),
            },
        ],
        ..DataFrame::default()
    };
    let map = frame.source_map();
    assert_eq!(map.len(), 1);
    assert_eq!(map["x"], "2");
    assert_eq!(frame.source.len(), 2, "map view must not rewrite the list");
}

#[test]
fn extend_appends_without_replacing() -> Result<()> {
    let mut frame = DataFrame::default();
    frame.extend_sources([("x", "1")])?;

    let mut entries = HashMap::new();
    entries.insert("y".to_string(), "2".to_string());
    frame.extend_sources(entries)?;

    assert_eq!(pairs(&frame), [("x", "1"), ("y", "2")]);
    let map = frame.source_map();
    assert_eq!(map["x"], "1");
    assert_eq!(map["y"], "2");

    frame.extend_sources([("x", "3")])?;
    assert_eq!(pairs(&frame), [("x", "1"), ("y", "2"), ("x", "3")]);
    assert_eq!(frame.source_map()["x"], "3");
    Ok(())
}

#[test]
fn extend_preserves_iteration_order() -> Result<()> {
    let mut frame = DataFrame::default();
    frame.extend_sources(vec![("z", "1"), ("a", "2"), ("m", "3")])?;
    assert_eq!(pairs(&frame), [("z", "1"), ("a", "2"), ("m", "3")]);
    let keys: Vec<_> = frame.source_map().into_keys().collect();
    assert_eq!(keys, ["z", "a", "m"]);
    Ok(())
}

#[test]
fn map_view_is_idempotent() -> Result<()> {
    let mut frame = DataFrame::default();
    frame.extend_sources([("site", "north"), ("feeder", "f7"), ("site", "south")])?;
    assert_eq!(frame.source_map(), frame.source_map());
    Ok(())
}

#[test]
fn limit_error_propagates_from_schema() {
    let mut frame = DataFrame::default();
    let entries = (0..=MAX_SOURCES).map(|idx| (format!("f{idx}"), "v"));
    let err = frame.extend_sources(entries).unwrap_err();
    assert!(matches!(
        err,
        FrameError::Schema(SchemaError::AnnotationLimitExceeded { limit }) if limit == MAX_SOURCES
    ));
    assert_eq!(frame.source.len(), MAX_SOURCES);
}

#[test]
fn set_value_round_trips_through_value() -> Result<()> {
    let mut frame = DataFrame::default();
    for value in [
        FrameValue::from(-3i64),
        FrameValue::from(49.98f64),
        FrameValue::from("tap 5"),
        FrameValue::from(vec![0u8, 1, 2]),
    ] {
        frame.set_value(Some(value.clone()));
        assert_eq!(frame.payload_kind()?, value.payload());
        assert_eq!(frame.value()?, Some(value));
    }
    frame.set_value(None);
    assert_eq!(frame.value()?, None);
    Ok(())
}
