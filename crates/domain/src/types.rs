// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How results in an event are measured.
///
/// The category decides how an attempt result value is rendered for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    /// Results are centiseconds.
    Timed,
    /// Results are move counts (averages are stored multiplied by 100).
    FewestMoves,
    /// Results use the multiple blindfolded encoding.
    MultipleBlindfolded,
}

/// Represents a WCA event identifier (e.g. `333`, `333oh`, `333fm`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventId {
    value: String,
}

impl EventId {
    /// Creates a new `EventId`.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or contains whitespace.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidEventId(String::from(
                "Event id cannot be empty",
            )));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidEventId(format!(
                "Event id '{trimmed}' cannot contain whitespace"
            )));
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the measurement category of this event.
    #[must_use]
    pub fn category(&self) -> EventCategory {
        match self.value.as_str() {
            "333fm" => EventCategory::FewestMoves,
            "333mbf" | "333mbo" => EventCategory::MultipleBlindfolded,
            _ => EventCategory::Timed,
        }
    }
}

impl FromStr for EventId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EventId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<EventId> for String {
    fn from(event: EventId) -> Self {
        event.value
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a WCA person identifier (e.g. `2012SMIT01`).
///
/// Identifiers are normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonId {
    value: String,
}

impl PersonId {
    /// Creates a new `PersonId`.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidPersonId(String::from(
                "Person id cannot be empty",
            )));
        }
        Ok(Self {
            value: trimmed.to_uppercase(),
        })
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for PersonId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PersonId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PersonId> for String {
    fn from(person: PersonId) -> Self {
        person.value
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
