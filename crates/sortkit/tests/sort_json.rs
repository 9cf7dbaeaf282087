use serde_json::{Value as JsonValue, json};
use sortkit::{
    error::{ErrorKind, ErrorOrigin},
    prelude::*,
    sort_json, sort_json_with, sorter,
};

fn names(rows: &[JsonValue]) -> Vec<&str> {
    rows.iter()
        .map(|row| row["name"].as_str().unwrap_or("<none>"))
        .collect()
}

#[test]
fn sorts_documents_by_multiple_keys() {
    let mut rows = vec![
        json!({ "name": "Ann", "age": 30 }),
        json!({ "name": "Cid", "age": 25 }),
        json!({ "name": "Bob", "age": 30 }),
    ];

    sort_json(&mut rows, &json!({ "age": 1, "name": -1 })).unwrap();

    assert_eq!(names(&rows), ["Cid", "Bob", "Ann"]);
}

#[test]
fn missing_nested_fields_sort_first() {
    let mut rows = vec![
        json!({ "name": "oslo", "address": { "city": "Oslo" } }),
        json!({ "name": "nowhere" }),
        json!({ "name": "null-city", "address": { "city": null } }),
        json!({ "name": "bergen", "address": { "city": "Bergen" } }),
    ];

    sort_json(
        &mut rows,
        &json!([{ "field": "address.city", "direction": "asc" }]),
    )
    .unwrap();

    // missing and null are the same absent value, so input order is kept
    assert_eq!(names(&rows), ["nowhere", "null-city", "bergen", "oslo"]);
}

#[test]
fn mixed_types_order_by_variant_then_value() {
    let mut rows = vec![
        json!({ "name": "object", "v": { "a": 1 } }),
        json!({ "name": "true", "v": true }),
        json!({ "name": "array", "v": [1, 2] }),
        json!({ "name": "string", "v": "10" }),
        json!({ "name": "big", "v": 10 }),
        json!({ "name": "small", "v": 2 }),
        json!({ "name": "false", "v": false }),
        json!({ "name": "none" }),
    ];

    sort_json(&mut rows, &json!({ "v": 1 })).unwrap();

    assert_eq!(
        names(&rows),
        ["none", "small", "big", "string", "false", "true", "array", "object"]
    );
}

#[test]
fn invalid_direction_is_rejected_up_front() {
    let mut rows = vec![json!({ "name": "b" }), json!({ "name": "a" })];
    let err = sort_json(&mut rows, &json!({ "name": 2 })).unwrap_err();

    assert_eq!(err.kind, ErrorKind::InvalidSpec);
    assert_eq!(err.origin, ErrorOrigin::Spec);
    assert_eq!(names(&rows), ["b", "a"]);
}

#[test]
fn sorter_builds_a_plain_closure() {
    let cmp = sorter([("score", -1)]).unwrap();
    let mut rows: Vec<Value> = [3, 1, 2]
        .into_iter()
        .map(|score| Value::record([("score", score)]))
        .collect();

    rows.sort_by(cmp);

    let scores: Vec<Value> = rows
        .iter()
        .filter_map(|row| row.field("score").cloned())
        .collect();
    assert_eq!(scores, [Value::from(3), Value::from(2), Value::from(1)]);

    assert!(sorter([("score", 0)]).is_err());
}

#[test]
fn config_drives_collation_and_paging() {
    let config = SortConfig::from_toml_str(
        r#"
        collation = "case_insensitive"
        default_limit = 2
        "#,
    )
    .unwrap();
    let mut rows = vec![
        json!({ "name": "carl" }),
        json!({ "name": "Bob" }),
        json!({ "name": "amy" }),
    ];

    sort_json_with(&mut rows, &json!({ "name": 1 }), &config).unwrap();

    assert_eq!(names(&rows), ["amy", "Bob"]);
}

#[test]
fn deep_documents_are_rejected_without_reordering() {
    let config = SortConfig::from_toml_str("max_depth = 3").unwrap();
    let mut rows = vec![
        json!({ "name": "b" }),
        json!({ "name": "deep", "x": { "y": { "z": 1 } } }),
        json!({ "name": "a" }),
    ];

    let err = sort_json_with(&mut rows, &json!({ "x": 1 }), &config).unwrap_err();

    assert_eq!(err.kind, ErrorKind::LimitExceeded);
    assert_eq!(err.origin, ErrorOrigin::Sort);
    assert_eq!(names(&rows), ["b", "deep", "a"]);
}

fn nested_json(depth: usize) -> JsonValue {
    let mut value = json!(1);
    for _ in 0..depth {
        value = json!([value]);
    }

    value
}

#[test]
fn sort_json_enforces_default_depth_limit() {
    let mut rows = vec![
        json!({ "name": "b", "v": 2 }),
        json!({ "name": "deep", "v": nested_json(1_000) }),
        json!({ "name": "a", "v": 1 }),
    ];

    let err = sort_json(&mut rows, &json!({ "v": 1 })).unwrap_err();

    assert_eq!(err.kind, ErrorKind::LimitExceeded);
    assert_eq!(err.origin, ErrorOrigin::Sort);
    assert_eq!(names(&rows), ["b", "deep", "a"]);
}

#[test]
fn sort_json_accepts_nesting_within_limit() {
    let mut rows = vec![
        json!({ "name": "b", "v": nested_json(100) }),
        json!({ "name": "a", "v": nested_json(50) }),
    ];

    sort_json(&mut rows, &json!({ "v": -1 })).unwrap();

    // the deeper list holds a list where the shallower one holds a number
    assert_eq!(names(&rows), ["b", "a"]);
}

#[test]
fn fields_outside_the_sort_keys_are_not_inspected() {
    let mut rows = vec![
        json!({ "name": "b", "blob": nested_json(1_000) }),
        json!({ "name": "a", "blob": nested_json(1_000) }),
    ];

    sort_json(&mut rows, &json!({ "name": 1 })).unwrap();

    assert_eq!(names(&rows), ["a", "b"]);
    assert_eq!(rows[0]["blob"], nested_json(1_000));
}

#[test]
fn float_directions_are_accepted() {
    let mut rows = vec![
        json!({ "name": "a", "age": 1 }),
        json!({ "name": "b", "age": 2 }),
    ];

    sort_json(&mut rows, &json!({ "age": -1.0 })).unwrap();
    assert_eq!(names(&rows), ["b", "a"]);

    let err = sort_json(&mut rows, &json!({ "age": 2.0 })).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidSpec);
}

#[test]
fn chained_builder_orders_nested_keys() {
    let spec = SortSpec::new()
        .then_desc("stats.wins")
        .unwrap()
        .then_asc("name")
        .unwrap();
    let cmp = SortComparator::new(spec);
    let mut rows: Vec<Value> = vec![
        json!({ "name": "b", "stats": { "wins": 1 } }).into(),
        json!({ "name": "a", "stats": { "wins": 1 } }).into(),
        json!({ "name": "c", "stats": { "wins": 4 } }).into(),
    ];

    sort_rows(&mut rows, &cmp);

    let order: Vec<&str> = rows
        .iter()
        .filter_map(|row| row.field("name").and_then(Value::as_text))
        .collect();
    assert_eq!(order, ["c", "a", "b"]);
}
