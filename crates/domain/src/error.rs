// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Event identifier is empty or invalid.
    InvalidEventId(String),
    /// Person identifier is empty or invalid.
    InvalidPersonId(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to render a date.
    DateFormatError {
        /// The formatting error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEventId(msg) => write!(f, "Invalid event id: {msg}"),
            Self::InvalidPersonId(msg) => write!(f, "Invalid person id: {msg}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateFormatError { error } => write!(f, "Failed to format date: {error}"),
        }
    }
}

impl std::error::Error for DomainError {}
