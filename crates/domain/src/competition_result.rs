// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::FormatItem;

const CALENDAR_DATE: &[FormatItem<'_>] = time::macros::format_description!("[year]-[month]-[day]");

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid calendar date.
pub fn parse_calendar_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, CALENDAR_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns `DomainError::DateFormatError` if the date cannot be rendered.
pub fn format_calendar_date(date: Date) -> Result<String, DomainError> {
    date.format(CALENDAR_DATE).map_err(|e| DomainError::DateFormatError {
        error: e.to_string(),
    })
}

/// A single historical result of a person in one event.
///
/// `single` and `average` use the WCA encoding: lower is better and any
/// non-positive value means there was no successful attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompetitionResult {
    /// The start date of the competition the result was achieved at.
    pub competition_start_date: Date,
    /// The best single attempt.
    pub single: i64,
    /// The average of the round.
    pub average: i64,
}

impl CompetitionResult {
    /// Creates a new `CompetitionResult`.
    #[must_use]
    pub const fn new(competition_start_date: Date, single: i64, average: i64) -> Self {
        Self {
            competition_start_date,
            single,
            average,
        }
    }

    /// Returns whether the result contains at least one successful attempt.
    #[must_use]
    pub const fn has_successful_single(&self) -> bool {
        self.single > 0
    }

    /// Returns whether the result has a completed average.
    #[must_use]
    pub const fn has_successful_average(&self) -> bool {
        self.average > 0
    }

    /// Returns whether the competition started on or before `cutoff`.
    #[must_use]
    pub fn achieved_by(&self, cutoff: Date) -> bool {
        self.competition_start_date <= cutoff
    }
}
