// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Eligibility evaluation of a qualification against result history.
//!
//! ## Invariants
//!
//! - Only results from competitions starting on or before the cutoff count
//! - Lower attempt results are better; non-positive values never qualify
//! - A person without result history never qualifies
//! - Evaluation is a single pass with no side effects
//!
//! Ranking qualifications only check for any successful single. They do not
//! compute a rank among competitors.

use qualifier_domain::{CompetitionResult, EventId, PersonId};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use time::Date;
use tracing::debug;

use crate::qualification::{Qualification, Requirement};

/// Read-only provider of historical results.
pub trait ResultSource {
    /// Returns the results of `person` in `event`.
    ///
    /// Returns `None` if the person has no result history at all.
    fn query<'a>(
        &'a self,
        person: &PersonId,
        event: &EventId,
    ) -> Option<Box<dyn Iterator<Item = CompetitionResult> + 'a>>;
}

impl Requirement {
    /// Returns whether a single result satisfies this requirement.
    ///
    /// The cutoff date is not considered here.
    #[must_use]
    pub fn is_satisfied_by(&self, result: &CompetitionResult) -> bool {
        match self {
            Self::Ranking { ranking } => {
                ranking.positive_integer().is_some() && result.has_successful_single()
            }
            Self::Single { threshold } => threshold
                .positive_integer()
                .is_some_and(|limit| result.has_successful_single() && result.single < limit),
            Self::Average { threshold } => threshold
                .positive_integer()
                .is_some_and(|limit| result.has_successful_average() && result.average < limit),
        }
    }
}

impl Qualification {
    /// Returns whether any of `results` meets this qualification.
    ///
    /// The qualification must already be valid; an invalid value never
    /// meets.
    #[must_use]
    pub fn meets<I>(&self, results: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<CompetitionResult>,
    {
        let Some(cutoff) = self.cutoff_date() else {
            return false;
        };

        results.into_iter().any(|result| {
            let result: &CompetitionResult = result.borrow();
            result.achieved_by(cutoff) && self.requirement().is_satisfied_by(result)
        })
    }
}

/// Answers whether `person` currently meets `qualification` for `event`.
///
/// A person without a linked identity (`None`) or without any result history
/// does not meet any qualification.
#[must_use]
pub fn meets_for_person(
    qualification: &Qualification,
    source: &dyn ResultSource,
    person: Option<&PersonId>,
    event: &EventId,
) -> bool {
    let Some(person) = person else {
        debug!(event = %event, "No linked person, qualification not met");
        return false;
    };

    let Some(results) = source.query(person, event) else {
        debug!(person = %person, event = %event, "No result history, qualification not met");
        return false;
    };

    let met: bool = qualification.meets(results);
    debug!(
        person = %person,
        event = %event,
        qualification_type = %qualification.kind(),
        met,
        "Evaluated qualification"
    );
    met
}

/// An in-memory [`ResultSource`] indexed by person and event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultHistory {
    results: BTreeMap<PersonId, BTreeMap<EventId, Vec<CompetitionResult>>>,
}

impl ResultHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            results: BTreeMap::new(),
        }
    }

    /// Records a result of `person` in `event`.
    pub fn record(&mut self, person: PersonId, event: EventId, result: CompetitionResult) {
        self.results
            .entry(person)
            .or_default()
            .entry(event)
            .or_default()
            .push(result);
    }

    /// Convenience wrapper around [`ResultHistory::record`].
    pub fn record_result(
        &mut self,
        person: PersonId,
        event: EventId,
        competition_start_date: Date,
        single: i64,
        average: i64,
    ) {
        self.record(
            person,
            event,
            CompetitionResult::new(competition_start_date, single, average),
        );
    }

    /// Returns the number of recorded results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Returns whether no results are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl ResultSource for ResultHistory {
    fn query<'a>(
        &'a self,
        person: &PersonId,
        event: &EventId,
    ) -> Option<Box<dyn Iterator<Item = CompetitionResult> + 'a>> {
        let events: &BTreeMap<EventId, Vec<CompetitionResult>> = self.results.get(person)?;
        let results: &[CompetitionResult] = events.get(event).map(Vec::as_slice).unwrap_or_default();
        Some(Box::new(results.iter().copied()))
    }
}
