// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV import of historical results.
//!
//! The expected columns are `person_id`, `event_id`,
//! `competition_start_date`, `best` and `average`. Header names are matched
//! case-insensitively and may appear in any order.

use csv::StringRecord;
use qualifier::ResultHistory;
use qualifier_domain::{CompetitionResult, EventId, PersonId, parse_calendar_date};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;
use time::Date;

use crate::error::ApiError;

const REQUIRED_HEADERS: &[&str] = &[
    "person_id",
    "event_id",
    "competition_start_date",
    "best",
    "average",
];

/// Result CSV errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResultsCsvError {
    /// The header row could not be read.
    #[error("Failed to read CSV headers: {0}")]
    UnreadableHeaders(String),

    /// Required columns are missing.
    #[error("Missing required headers: {}", .0.join(", "))]
    MissingHeaders(Vec<String>),

    /// A data row could not be parsed.
    #[error("Row {row}: {reason}")]
    InvalidRow {
        /// The 1-based data row number.
        row: usize,
        /// Why the row was rejected.
        reason: String,
    },
}

impl From<ResultsCsvError> for ApiError {
    fn from(err: ResultsCsvError) -> Self {
        Self::InvalidCsvFormat {
            reason: err.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ResultRow {
    person_id: String,
    event_id: String,
    competition_start_date: String,
    best: i64,
    average: i64,
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace([' ', '-'], "_")
}

fn validate_headers(headers: &StringRecord) -> Result<StringRecord, ResultsCsvError> {
    let normalized: StringRecord = headers.iter().map(normalize_header).collect();
    let present: HashSet<&str> = normalized.iter().collect();

    let missing: Vec<String> = REQUIRED_HEADERS
        .iter()
        .filter(|required| !present.contains(**required))
        .map(|required| String::from(*required))
        .collect();

    if missing.is_empty() {
        Ok(normalized)
    } else {
        Err(ResultsCsvError::MissingHeaders(missing))
    }
}

fn parse_row(
    row: usize,
    record: &ResultRow,
) -> Result<(PersonId, EventId, CompetitionResult), ResultsCsvError> {
    let invalid = |reason: String| ResultsCsvError::InvalidRow { row, reason };

    let person: PersonId =
        PersonId::new(&record.person_id).map_err(|e| invalid(e.to_string()))?;
    let event: EventId = EventId::new(&record.event_id).map_err(|e| invalid(e.to_string()))?;
    let start_date: Date = parse_calendar_date(record.competition_start_date.trim())
        .map_err(|e| invalid(e.to_string()))?;

    Ok((
        person,
        event,
        CompetitionResult::new(start_date, record.best, record.average),
    ))
}

/// Reads a result history from CSV content.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content, including a header row
///
/// # Returns
///
/// * `Ok(ResultHistory)` containing every row
/// * `Err(ApiError::InvalidCsvFormat)` if headers are missing or any row is invalid
///
/// # Errors
///
/// Returns an error if a required header is missing, or if any row has an
/// invalid identifier, date or attempt result.
pub fn load_result_history(csv_content: &str) -> Result<ResultHistory, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ResultsCsvError::UnreadableHeaders(e.to_string()))?
        .clone();
    let headers: StringRecord = validate_headers(&headers)?;

    let mut history: ResultHistory = ResultHistory::new();
    for (idx, record) in reader.records().enumerate() {
        let row_number: usize = idx + 1;
        let record: StringRecord = record.map_err(|e| ResultsCsvError::InvalidRow {
            row: row_number,
            reason: e.to_string(),
        })?;
        let row: ResultRow = record.deserialize(Some(&headers)).map_err(|e| {
            ResultsCsvError::InvalidRow {
                row: row_number,
                reason: e.to_string(),
            }
        })?;

        let (person, event, result) = parse_row(row_number, &row)?;
        history.record(person, event, result);
    }

    Ok(history)
}
