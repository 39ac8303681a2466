// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use qualifier::{QualificationRegistry, ResultHistory};
use qualifier_domain::{EventId, PersonId};

use crate::load_result_history;

pub const RESULTS_CSV: &str = "\
person_id,event_id,competition_start_date,best,average
2019TEST01,333,2021-02-01,1200,1300
2019TEST01,333,2021-03-01,1100,1250
2019TEST01,333oh,2021-02-01,-1,-1
2019TEST01,333oh,2021-03-01,2500,2800
";

pub fn registry() -> &'static QualificationRegistry {
    QualificationRegistry::global()
}

pub fn create_test_history() -> ResultHistory {
    load_result_history(RESULTS_CSV).expect("fixture CSV should load")
}

pub fn test_person() -> PersonId {
    PersonId::new("2019TEST01").unwrap()
}

pub fn event(id: &str) -> EventId {
    EventId::new(id).unwrap()
}
