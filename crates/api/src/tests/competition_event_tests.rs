// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_history, event, registry, test_person};
use crate::{ApiError, CompetitionEvent};
use qualifier::{Qualification, ResultHistory};
use serde_json::{Value, json};
use time::macros::date;

#[test]
fn test_from_wcif_with_qualification() {
    let event: CompetitionEvent = CompetitionEvent::from_wcif(
        registry(),
        &json!({
            "id": "333",
            "qualification": { "type": "single", "when": "2021-02-15", "single": 1200 }
        }),
    )
    .unwrap();

    assert_eq!(event.event_id().value(), "333");
    assert_eq!(
        event.qualification(),
        Some(&Qualification::single(date!(2021 - 02 - 15), 1200))
    );
}

#[test]
fn test_from_wcif_with_stringified_qualification() {
    let event: CompetitionEvent = CompetitionEvent::from_wcif(
        registry(),
        &json!({
            "id": "333",
            "qualification": r#"{"type":"average","when":"2021-02-15","average":1500}"#
        }),
    )
    .unwrap();

    assert_eq!(
        event.qualification(),
        Some(&Qualification::average(date!(2021 - 02 - 15), 1500))
    );
}

#[test]
fn test_from_wcif_without_qualification() {
    let with_null: CompetitionEvent =
        CompetitionEvent::from_wcif(registry(), &json!({ "id": "333", "qualification": null }))
            .unwrap();
    assert_eq!(with_null.qualification(), None);

    let absent: CompetitionEvent =
        CompetitionEvent::from_wcif(registry(), &json!({ "id": "333" })).unwrap();
    assert_eq!(absent.qualification(), None);
}

#[test]
fn test_from_wcif_requires_id() {
    let result = CompetitionEvent::from_wcif(registry(), &json!({ "qualification": null }));
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_from_wcif_rejects_invalid_qualification() {
    let result = CompetitionEvent::from_wcif(
        registry(),
        &json!({ "id": "333", "qualification": { "type": "single", "single": 1200 } }),
    );
    let Err(ApiError::InvalidQualification { errors }) = result else {
        panic!("expected invalid qualification");
    };
    assert!(errors.get("cutoffDate").is_some());
}

#[test]
fn test_from_wcif_rejects_unknown_type() {
    let result = CompetitionEvent::from_wcif(
        registry(),
        &json!({ "id": "333", "qualification": { "type": "podium", "when": "2021-02-15" } }),
    );
    assert_eq!(
        result,
        Err(ApiError::UnknownQualificationType {
            tag: Some(String::from("podium"))
        })
    );
}

#[test]
fn test_to_wcif_round_trip() {
    let wcif: Value = json!({
        "id": "333oh",
        "qualification": { "type": "ranking", "when": "2021-03-15", "ranking": 100 }
    });
    let event: CompetitionEvent = CompetitionEvent::from_wcif(registry(), &wcif).unwrap();
    assert_eq!(event.to_wcif(), wcif);
}

#[test]
fn test_rejected_update_keeps_previous_qualification() {
    let mut event: CompetitionEvent = CompetitionEvent::new(event("333"));
    event
        .set_qualification(registry(), Qualification::average(date!(2021 - 02 - 15), 1500))
        .unwrap();

    let result = event.set_qualification(registry(), json!({ "type": "average", "average": 0 }));
    assert!(result.is_err());
    assert_eq!(
        event.qualification(),
        Some(&Qualification::average(date!(2021 - 02 - 15), 1500))
    );
}

#[test]
fn test_set_null_clears_qualification() {
    let mut event: CompetitionEvent = CompetitionEvent::new(event("333"));
    event
        .set_qualification(registry(), Qualification::ranking(date!(2021 - 02 - 15), 10))
        .unwrap();
    event.set_qualification(registry(), Value::Null).unwrap();
    assert_eq!(event.qualification(), None);
}

#[test]
fn test_clear_qualification() {
    let mut event: CompetitionEvent = CompetitionEvent::new(event("333"));
    event
        .set_qualification(registry(), Qualification::ranking(date!(2021 - 02 - 15), 10))
        .unwrap();
    event.clear_qualification();
    assert_eq!(event.qualification_blob(), None);
}

#[test]
fn test_storage_blob_round_trip() {
    let mut configured: CompetitionEvent = CompetitionEvent::new(event("333"));
    configured
        .set_qualification(registry(), Qualification::single(date!(2021 - 03 - 01), 1150))
        .unwrap();

    let blob: Option<String> = configured.qualification_blob();
    let restored: CompetitionEvent =
        CompetitionEvent::from_stored(registry(), event("333"), blob.as_deref()).unwrap();
    assert_eq!(restored, configured);

    let empty: CompetitionEvent =
        CompetitionEvent::from_stored(registry(), event("333"), None).unwrap();
    assert_eq!(empty.qualification(), None);
}

#[test]
fn test_qualification_to_s() {
    let mut event: CompetitionEvent = CompetitionEvent::new(event("333"));
    assert_eq!(event.qualification_to_s(), None);

    event
        .set_qualification(registry(), Qualification::single(date!(2021 - 02 - 15), 1200))
        .unwrap();
    assert_eq!(
        event.qualification_to_s(),
        Some(String::from("Single of 12.00 by 2021-02-15"))
    );
}

#[test]
fn test_event_without_qualification_admits_everyone() {
    let event: CompetitionEvent = CompetitionEvent::new(event("333"));
    let history: ResultHistory = ResultHistory::new();
    assert!(event.competitor_meets_qualification(&history, None));
}

#[test]
fn test_competitor_meets_qualification_uses_history() {
    let history: ResultHistory = create_test_history();
    let person = test_person();

    let mut event: CompetitionEvent = CompetitionEvent::new(event("333"));
    event
        .set_qualification(registry(), Qualification::single(date!(2021 - 03 - 01), 1150))
        .unwrap();
    assert!(event.competitor_meets_qualification(&history, Some(&person)));
    assert!(!event.competitor_meets_qualification(&history, None));

    event
        .set_qualification(registry(), Qualification::single(date!(2021 - 02 - 28), 1150))
        .unwrap();
    assert!(!event.competitor_meets_qualification(&history, Some(&person)));
}

#[test]
fn test_event_schema_embeds_qualification_schema() {
    let schema: Value = CompetitionEvent::wcif_json_schema(registry());
    assert_eq!(
        schema["properties"]["qualification"],
        qualifier::wcif_json_schema(registry())
    );
}
