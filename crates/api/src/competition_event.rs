// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The competition event that owns a qualification.
//!
//! The event holds at most one qualification and stores it as an opaque
//! JSON blob. Every change goes through load and validate before the whole
//! value is replaced; a rejected update leaves the previous value intact.

use qualifier::{
    Qualification, QualificationRegistry, RawQualification, ResultSource, dump, dump_to_string,
    load_validated, meets_for_person, wcif_json_schema,
};
use qualifier_domain::{EventId, PersonId};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::error::{ApiError, translate_domain_error};

/// A competition event and its optional qualification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitionEvent {
    event_id: EventId,
    qualification: Option<Qualification>,
}

impl CompetitionEvent {
    /// Creates an event without a qualification.
    #[must_use]
    pub const fn new(event_id: EventId) -> Self {
        Self {
            event_id,
            qualification: None,
        }
    }

    /// Returns the event identifier.
    #[must_use]
    pub const fn event_id(&self) -> &EventId {
        &self.event_id
    }

    /// Returns the qualification, if one is configured.
    #[must_use]
    pub const fn qualification(&self) -> Option<&Qualification> {
        self.qualification.as_ref()
    }

    /// Builds an event from its WCIF object.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `id` is missing or invalid
    /// - The qualification cannot be constructed or is invalid
    pub fn from_wcif(registry: &QualificationRegistry, wcif: &Value) -> Result<Self, ApiError> {
        let id: &str = wcif
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::InvalidInput {
                field: String::from("id"),
                message: String::from("Event id is required"),
            })?;
        let event_id: EventId = EventId::new(id).map_err(translate_domain_error)?;

        let mut event: Self = Self::new(event_id);
        event.set_qualification(registry, wcif.get("qualification").unwrap_or(&Value::Null))?;
        Ok(event)
    }

    /// Returns the WCIF object of this event.
    #[must_use]
    pub fn to_wcif(&self) -> Value {
        json!({
            "id": self.event_id.value(),
            "qualification": dump(self.qualification.as_ref()).unwrap_or(Value::Null)
        })
    }

    /// Rebuilds an event from its stored qualification blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored blob no longer loads or validates.
    pub fn from_stored(
        registry: &QualificationRegistry,
        event_id: EventId,
        blob: Option<&str>,
    ) -> Result<Self, ApiError> {
        let mut event: Self = Self::new(event_id);
        if let Some(blob) = blob {
            event.set_qualification(registry, blob)?;
        }
        Ok(event)
    }

    /// Returns the storage form of the qualification.
    #[must_use]
    pub fn qualification_blob(&self) -> Option<String> {
        dump_to_string(self.qualification.as_ref())
    }

    /// Replaces the qualification with `raw` after loading and validating it.
    ///
    /// A null `raw` clears the qualification.
    ///
    /// # Errors
    ///
    /// Returns an error if the qualification cannot be constructed or is
    /// invalid. The current qualification is kept in that case.
    pub fn set_qualification(
        &mut self,
        registry: &QualificationRegistry,
        raw: impl Into<RawQualification>,
    ) -> Result<(), ApiError> {
        match load_validated(registry, raw) {
            Ok(qualification) => {
                info!(
                    event = %self.event_id,
                    qualification_type = qualification.as_ref().map(|q| q.kind().wcif_type()),
                    "Replaced event qualification"
                );
                self.qualification = qualification;
                Ok(())
            }
            Err(err) => {
                warn!(event = %self.event_id, %err, "Rejected event qualification");
                Err(ApiError::from(err))
            }
        }
    }

    /// Removes the qualification.
    pub fn clear_qualification(&mut self) {
        self.qualification = None;
    }

    /// Returns a human-readable description of the qualification.
    #[must_use]
    pub fn qualification_to_s(&self) -> Option<String> {
        self.qualification
            .as_ref()
            .map(|qualification| qualification.describe(&self.event_id))
    }

    /// Returns whether `person` may enter this event.
    ///
    /// An event without a qualification admits everyone.
    #[must_use]
    pub fn competitor_meets_qualification(
        &self,
        source: &dyn ResultSource,
        person: Option<&PersonId>,
    ) -> bool {
        self.qualification.as_ref().is_none_or(|qualification| {
            meets_for_person(qualification, source, person, &self.event_id)
        })
    }

    /// Returns the JSON schema describing a WCIF event with its qualification.
    #[must_use]
    pub fn wcif_json_schema(registry: &QualificationRegistry) -> Value {
        json!({
            "type": "object",
            "properties": {
                "id": { "type": "string" },
                "qualification": wcif_json_schema(registry)
            },
            "required": ["id"]
        })
    }
}
