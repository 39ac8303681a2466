// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, EventCategory, EventId, PersonId};

#[test]
fn test_event_id_accepts_wca_identifier() {
    let event: EventId = EventId::new("333oh").unwrap();
    assert_eq!(event.value(), "333oh");
    assert_eq!(event.to_string(), "333oh");
}

#[test]
fn test_event_id_trims_surrounding_whitespace() {
    let event: EventId = EventId::new("  333  ").unwrap();
    assert_eq!(event.value(), "333");
}

#[test]
fn test_event_id_rejects_empty_value() {
    let result: Result<EventId, DomainError> = EventId::new("   ");
    assert!(matches!(result, Err(DomainError::InvalidEventId(_))));
}

#[test]
fn test_event_id_rejects_inner_whitespace() {
    let result: Result<EventId, DomainError> = EventId::new("333 oh");
    assert!(matches!(result, Err(DomainError::InvalidEventId(_))));
}

#[test]
fn test_event_category_classification() {
    assert_eq!(
        EventId::new("333").unwrap().category(),
        EventCategory::Timed
    );
    assert_eq!(
        EventId::new("333bf").unwrap().category(),
        EventCategory::Timed
    );
    assert_eq!(
        EventId::new("333fm").unwrap().category(),
        EventCategory::FewestMoves
    );
    assert_eq!(
        EventId::new("333mbf").unwrap().category(),
        EventCategory::MultipleBlindfolded
    );
}

#[test]
fn test_person_id_is_normalized_to_uppercase() {
    let person: PersonId = PersonId::new("2012smit01").unwrap();
    assert_eq!(person.value(), "2012SMIT01");
    assert_eq!(person, "2012SMIT01".parse::<PersonId>().unwrap());
}

#[test]
fn test_person_id_rejects_empty_value() {
    let result: Result<PersonId, DomainError> = PersonId::new("");
    assert!(matches!(result, Err(DomainError::InvalidPersonId(_))));
}

#[test]
fn test_identifiers_deserialize_through_validation() {
    let event: Result<EventId, _> = serde_json::from_str::<EventId>("\"\"");
    assert!(event.is_err());
}
