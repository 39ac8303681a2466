// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Qualification, QualificationRegistry, load};
use qualifier_domain::{EventId, PersonId};
use serde_json::Value;

pub fn registry() -> &'static QualificationRegistry {
    QualificationRegistry::global()
}

pub fn load_object(value: &Value) -> Qualification {
    load(registry(), value)
        .expect("payload should construct")
        .expect("payload should not be null")
}

pub fn person(id: &str) -> PersonId {
    PersonId::new(id).unwrap()
}

pub fn event(id: &str) -> EventId {
    EventId::new(id).unwrap()
}
