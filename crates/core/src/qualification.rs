// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The qualification value type.
//!
//! A qualification is a cutoff date plus exactly one variant-specific
//! requirement. Values are constructed leniently (see [`crate::load`]) and
//! only become trustworthy after [`Qualification::validate`] returns no
//! errors.
//!
//! ## Invariants
//!
//! - The variant set is closed: ranking, single and average
//! - Equality and hashing follow the canonical WCIF form, not field identity
//! - Values are never mutated after construction; owners replace them whole

use qualifier_domain::{AttemptKind, EventId, format_attempt_result, format_calendar_date};
use serde_json::Value;
use std::str::FromStr;
use time::Date;

use crate::error::CoreError;

/// The closed set of qualification variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QualificationKind {
    /// The competitor must be ranked within the top N.
    Ranking,
    /// The competitor must have a single better than a threshold.
    Single,
    /// The competitor must have an average better than a threshold.
    Average,
}

impl QualificationKind {
    /// Every variant, in registry order.
    pub const ALL: [Self; 3] = [Self::Ranking, Self::Single, Self::Average];

    /// Returns the WCIF `type` discriminator of this variant.
    #[must_use]
    pub const fn wcif_type(&self) -> &'static str {
        match self {
            Self::Ranking => "ranking",
            Self::Single => "single",
            Self::Average => "average",
        }
    }

    /// Returns the WCIF key holding this variant's numeric requirement.
    #[must_use]
    pub const fn value_key(&self) -> &'static str {
        self.wcif_type()
    }
}

impl FromStr for QualificationKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.wcif_type() == s)
            .ok_or_else(|| CoreError::UnknownQualificationType {
                tag: Some(s.to_string()),
            })
    }
}

impl std::fmt::Display for QualificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wcif_type())
    }
}

/// The numeric payload of a variant, exactly as it arrived.
///
/// The raw JSON value is kept so validation can distinguish a missing value
/// from a non-integer or non-positive one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericField(Option<Value>);

impl NumericField {
    /// A field that was not supplied.
    #[must_use]
    pub const fn missing() -> Self {
        Self(None)
    }

    /// Captures a raw JSON value. JSON `null` counts as missing.
    #[must_use]
    pub fn from_raw(raw: Option<&Value>) -> Self {
        match raw {
            None | Some(Value::Null) => Self(None),
            Some(value) => Self(Some(value.clone())),
        }
    }

    /// Returns the value if it is a strictly positive integer.
    #[must_use]
    pub fn positive_integer(&self) -> Option<i64> {
        self.0.as_ref().and_then(Value::as_i64).filter(|v| *v > 0)
    }

    /// Returns whether any value was supplied.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the WCIF representation of the field.
    #[must_use]
    pub fn to_wcif(&self) -> Value {
        self.0.clone().unwrap_or(Value::Null)
    }
}

impl From<i64> for NumericField {
    fn from(value: i64) -> Self {
        Self(Some(Value::from(value)))
    }
}

/// The variant-specific part of a qualification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Top `ranking` competitors.
    Ranking {
        /// The number of competitors admitted.
        ranking: NumericField,
    },
    /// A single strictly better than `threshold`.
    Single {
        /// The attempt result to beat.
        threshold: NumericField,
    },
    /// An average strictly better than `threshold`.
    Average {
        /// The attempt result to beat.
        threshold: NumericField,
    },
}

impl Requirement {
    /// Builds the requirement of `kind` from its numeric field.
    #[must_use]
    pub const fn new(kind: QualificationKind, value: NumericField) -> Self {
        match kind {
            QualificationKind::Ranking => Self::Ranking { ranking: value },
            QualificationKind::Single => Self::Single { threshold: value },
            QualificationKind::Average => Self::Average { threshold: value },
        }
    }

    /// Returns the variant of this requirement.
    #[must_use]
    pub const fn kind(&self) -> QualificationKind {
        match self {
            Self::Ranking { .. } => QualificationKind::Ranking,
            Self::Single { .. } => QualificationKind::Single,
            Self::Average { .. } => QualificationKind::Average,
        }
    }

    /// Returns the numeric field of this requirement.
    #[must_use]
    pub const fn value(&self) -> &NumericField {
        match self {
            Self::Ranking { ranking } => ranking,
            Self::Single { threshold } | Self::Average { threshold } => threshold,
        }
    }
}

/// A rule gating entry to a competition event.
#[derive(Debug, Clone)]
pub struct Qualification {
    cutoff_date: Option<Date>,
    requirement: Requirement,
}

impl Qualification {
    /// Creates a qualification from its parts without validating it.
    #[must_use]
    pub const fn new(cutoff_date: Option<Date>, requirement: Requirement) -> Self {
        Self {
            cutoff_date,
            requirement,
        }
    }

    /// Creates a ranking qualification.
    #[must_use]
    pub fn ranking(cutoff_date: Date, ranking: i64) -> Self {
        Self::new(
            Some(cutoff_date),
            Requirement::Ranking {
                ranking: NumericField::from(ranking),
            },
        )
    }

    /// Creates a single qualification.
    #[must_use]
    pub fn single(cutoff_date: Date, threshold: i64) -> Self {
        Self::new(
            Some(cutoff_date),
            Requirement::Single {
                threshold: NumericField::from(threshold),
            },
        )
    }

    /// Creates an average qualification.
    #[must_use]
    pub fn average(cutoff_date: Date, threshold: i64) -> Self {
        Self::new(
            Some(cutoff_date),
            Requirement::Average {
                threshold: NumericField::from(threshold),
            },
        )
    }

    /// Returns the variant of this qualification.
    #[must_use]
    pub const fn kind(&self) -> QualificationKind {
        self.requirement.kind()
    }

    /// Returns the cutoff date, if one was parsed.
    #[must_use]
    pub const fn cutoff_date(&self) -> Option<Date> {
        self.cutoff_date
    }

    /// Returns the variant-specific requirement.
    #[must_use]
    pub const fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    /// Returns the canonical WCIF object for this qualification.
    ///
    /// The object has exactly three keys: `type`, `when` and the variant key.
    #[must_use]
    pub fn to_wcif(&self) -> Value {
        let kind: QualificationKind = self.kind();
        let mut object = serde_json::Map::new();
        object.insert(
            String::from("type"),
            Value::String(kind.wcif_type().to_string()),
        );
        object.insert(
            String::from("when"),
            self.cutoff_date
                .and_then(|date| format_calendar_date(date).ok())
                .map_or(Value::Null, Value::String),
        );
        object.insert(
            kind.value_key().to_string(),
            self.requirement.value().to_wcif(),
        );
        Value::Object(object)
    }

    /// Returns a human-readable description of the rule for `event`.
    #[must_use]
    pub fn describe(&self, event: &EventId) -> String {
        let when: String = self
            .cutoff_date
            .and_then(|date| format_calendar_date(date).ok())
            .unwrap_or_else(|| String::from("-"));

        match &self.requirement {
            Requirement::Ranking { ranking } => {
                let top: String = ranking
                    .positive_integer()
                    .map_or_else(|| String::from("-"), |n| n.to_string());
                format!("Top {top} competitors by {when}")
            }
            Requirement::Single { threshold } => format!(
                "Single of {} by {when}",
                describe_threshold(event, threshold, AttemptKind::Single)
            ),
            Requirement::Average { threshold } => format!(
                "Average of {} by {when}",
                describe_threshold(event, threshold, AttemptKind::Average)
            ),
        }
    }
}

fn describe_threshold(event: &EventId, threshold: &NumericField, kind: AttemptKind) -> String {
    threshold.positive_integer().map_or_else(
        || String::from("-"),
        |value| format_attempt_result(event, value, kind),
    )
}

// Two qualifications are the same rule when their canonical forms match.
impl PartialEq for Qualification {
    fn eq(&self, other: &Self) -> bool {
        self.to_wcif() == other.to_wcif()
    }
}

impl Eq for Qualification {}

impl std::hash::Hash for Qualification {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_wcif().to_string().hash(state);
    }
}
