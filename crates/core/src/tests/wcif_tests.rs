// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{load_object, registry};
use crate::{Qualification, dump, dump_to_string, load, wcif_json_schema};
use serde_json::{Value, json};
use std::collections::HashSet;
use time::macros::date;

fn valid_qualifications() -> Vec<Qualification> {
    vec![
        Qualification::ranking(date!(2021 - 06 - 01), 50),
        Qualification::single(date!(2021 - 02 - 15), 1200),
        Qualification::average(date!(2020 - 12 - 31), 1500),
    ]
}

#[test]
fn test_dump_none_is_none() {
    assert_eq!(dump(None), None);
    assert_eq!(dump_to_string(None), None);
}

#[test]
fn test_dump_produces_canonical_object() {
    let qualification: Qualification = Qualification::single(date!(2021 - 02 - 15), 1200);
    assert_eq!(
        dump(Some(&qualification)),
        Some(json!({ "type": "single", "when": "2021-02-15", "single": 1200 }))
    );
}

#[test]
fn test_dump_has_exactly_three_keys() {
    for qualification in valid_qualifications() {
        let Some(Value::Object(object)) = dump(Some(&qualification)) else {
            panic!("dump should produce an object");
        };
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("type"));
        assert!(object.contains_key("when"));
        assert!(object.contains_key(qualification.kind().value_key()));
    }
}

#[test]
fn test_dump_drops_foreign_keys() {
    let qualification: Qualification = load_object(&json!({
        "type": "ranking",
        "when": "2021-06-01",
        "ranking": 50,
        "single": 1000,
        "extra": "ignored"
    }));
    assert_eq!(
        qualification.to_wcif(),
        json!({ "type": "ranking", "when": "2021-06-01", "ranking": 50 })
    );
}

#[test]
fn test_round_trip_through_value() {
    for qualification in valid_qualifications() {
        let dumped: Option<Value> = dump(Some(&qualification));
        let loaded: Option<Qualification> = load(registry(), dumped.unwrap()).unwrap();
        assert_eq!(loaded, Some(qualification));
    }
}

#[test]
fn test_round_trip_through_storage_text() {
    for qualification in valid_qualifications() {
        let blob: String = dump_to_string(Some(&qualification)).unwrap();
        let loaded: Option<Qualification> = load(registry(), blob).unwrap();
        assert_eq!(loaded, Some(qualification));
    }
}

#[test]
fn test_equality_follows_canonical_form() {
    let from_wire: Qualification = load_object(&json!({
        "type": "average",
        "when": "2020-12-31",
        "average": 1500,
        "note": "not part of the canonical form"
    }));
    let built: Qualification = Qualification::average(date!(2020 - 12 - 31), 1500);
    assert_eq!(from_wire, built);

    let other: Qualification = Qualification::single(date!(2020 - 12 - 31), 1500);
    assert_ne!(built, other);
}

#[test]
fn test_equal_values_hash_identically() {
    let mut seen: HashSet<Qualification> = HashSet::new();
    seen.insert(Qualification::single(date!(2021 - 02 - 15), 1200));
    seen.insert(load_object(&json!({
        "type": "single",
        "when": "2021-02-15",
        "single": 1200
    })));
    assert_eq!(seen.len(), 1);
}

#[test]
fn test_dump_of_invalid_value_keeps_nulls() {
    let qualification: Qualification = load_object(&json!({ "type": "single" }));
    assert_eq!(
        qualification.to_wcif(),
        json!({ "type": "single", "when": null, "single": null })
    );
}

#[test]
fn test_schema_lists_registered_types() {
    let schema: Value = wcif_json_schema(registry());
    assert_eq!(schema["type"], json!(["object", "null"]));
    assert_eq!(
        schema["properties"]["type"]["enum"],
        json!(["ranking", "single", "average"])
    );
    assert_eq!(schema["properties"]["when"]["type"], json!("string"));
    assert_eq!(schema["required"], json!(["type", "when"]));
}
