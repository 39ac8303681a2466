// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! WCIF intake and output for qualifications.
//!
//! Intake is lenient: an unparseable or missing `when` date leaves the
//! cutoff unset instead of failing, so that validation reports it as a
//! field error. Only an unknown `type` (or unreadable JSON text) rejects
//! the payload outright.

use qualifier_domain::parse_calendar_date;
use serde_json::{Value, json};
use time::Date;
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::qualification::{Qualification, Requirement};
use crate::registry::{QualificationRegistry, VariantDescriptor};

/// Anything [`load`] accepts.
#[derive(Debug, Clone)]
pub enum RawQualification {
    /// No qualification configured.
    Null,
    /// A value that has already been constructed.
    Loaded(Qualification),
    /// A decoded JSON value.
    Json(Value),
    /// JSON text, e.g. a stored blob.
    Text(String),
}

impl From<Option<Qualification>> for RawQualification {
    fn from(value: Option<Qualification>) -> Self {
        value.map_or(Self::Null, Self::Loaded)
    }
}

impl From<Qualification> for RawQualification {
    fn from(value: Qualification) -> Self {
        Self::Loaded(value)
    }
}

impl From<Value> for RawQualification {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<&Value> for RawQualification {
    fn from(value: &Value) -> Self {
        Self::Json(value.clone())
    }
}

impl From<&str> for RawQualification {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawQualification {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Constructs a qualification from `raw` without validating it.
///
/// # Returns
///
/// * `Ok(None)` if `raw` is null
/// * `Ok(Some(q))` with the constructed, not yet validated qualification
///
/// # Errors
///
/// Returns an error if:
/// - The text is not valid JSON (`CoreError::MalformedPayload`)
/// - The payload is not an object, or its `type` is missing or unknown
///   (`CoreError::UnknownQualificationType`)
pub fn load(
    registry: &QualificationRegistry,
    raw: impl Into<RawQualification>,
) -> Result<Option<Qualification>, CoreError> {
    let value: Value = match raw.into() {
        RawQualification::Null => return Ok(None),
        RawQualification::Loaded(qualification) => return Ok(Some(qualification)),
        RawQualification::Json(value) => value,
        RawQualification::Text(text) => serde_json::from_str(&text)?,
    };

    // Stored blobs sometimes arrive as a JSON string inside a WCIF document.
    let value: Value = match value {
        Value::String(text) => serde_json::from_str(&text)?,
        other => other,
    };

    let object = match value {
        Value::Object(object) => object,
        Value::Null => return Ok(None),
        _ => return Err(CoreError::UnknownQualificationType { tag: None }),
    };

    let tag: &str = match object.get("type") {
        Some(Value::String(tag)) => tag.as_str(),
        Some(other) => {
            return Err(CoreError::UnknownQualificationType {
                tag: Some(other.to_string()),
            });
        }
        None => return Err(CoreError::UnknownQualificationType { tag: None }),
    };

    let descriptor: &VariantDescriptor = registry.resolve(tag)?;
    let requirement: Requirement = descriptor.parse_requirement(&object);
    let cutoff_date: Option<Date> = parse_cutoff_date(object.get("when"));

    debug!(
        qualification_type = descriptor.wcif_type(),
        has_cutoff_date = cutoff_date.is_some(),
        "Loaded qualification"
    );

    Ok(Some(Qualification::new(cutoff_date, requirement)))
}

fn parse_cutoff_date(raw: Option<&Value>) -> Option<Date> {
    match raw {
        Some(Value::String(text)) => match parse_calendar_date(text) {
            Ok(date) => Some(date),
            Err(err) => {
                warn!(%err, "Ignoring malformed qualification cutoff date");
                None
            }
        },
        Some(Value::Null) | None => None,
        Some(other) => {
            warn!(value = %other, "Ignoring non-string qualification cutoff date");
            None
        }
    }
}

/// Returns the canonical WCIF value of `qualification`, or `None` for none.
#[must_use]
pub fn dump(qualification: Option<&Qualification>) -> Option<Value> {
    qualification.map(Qualification::to_wcif)
}

/// Returns the storage form of `qualification`: its canonical WCIF as text.
#[must_use]
pub fn dump_to_string(qualification: Option<&Qualification>) -> Option<String> {
    dump(qualification).map(|value| value.to_string())
}

/// Returns the JSON schema describing a WCIF qualification.
#[must_use]
pub fn wcif_json_schema(registry: &QualificationRegistry) -> Value {
    json!({
        "type": ["object", "null"],
        "properties": {
            "type": { "type": "string", "enum": registry.tags() },
            "when": { "type": "string", "format": "date" },
            "ranking": { "type": "integer", "minimum": 1 },
            "single": { "type": "integer", "minimum": 1 },
            "average": { "type": "integer", "minimum": 1 }
        },
        "required": ["type", "when"]
    })
}
