// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod competition_event;
mod error;
mod request_response;
mod results_csv;

#[cfg(test)]
mod tests;

use qualifier::{Qualification, QualificationRegistry, ResultSource, ValidationErrors, load};
use qualifier_domain::{EventId, PersonId};
use std::collections::BTreeMap;
use tracing::info;

pub use competition_event::CompetitionEvent;
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use request_response::{
    CheckEligibilityRequest, CheckEligibilityResponse, DescribeQualificationRequest,
    DescribeQualificationResponse, ValidateQualificationRequest, ValidateQualificationResponse,
};
pub use results_csv::{ResultsCsvError, load_result_history};

/// Validates a WCIF qualification without storing it.
///
/// Validation failures are reported in the response rather than as an error,
/// so callers can show every field problem at once.
///
/// # Arguments
///
/// * `registry` - The qualification registry
/// * `request` - The validate request
///
/// # Returns
///
/// * `Ok(ValidateQualificationResponse)` describing the outcome
/// * `Err(ApiError)` if the qualification cannot be constructed at all
///
/// # Errors
///
/// Returns an error if the `type` is missing or unknown.
pub fn validate_qualification(
    registry: &QualificationRegistry,
    request: &ValidateQualificationRequest,
) -> Result<ValidateQualificationResponse, ApiError> {
    let qualification: Option<Qualification> =
        load(registry, &request.qualification).map_err(translate_core_error)?;

    let Some(qualification) = qualification else {
        return Ok(ValidateQualificationResponse {
            valid: true,
            qualification: None,
            errors: BTreeMap::new(),
        });
    };

    let errors: ValidationErrors = qualification.validate();
    let valid: bool = errors.is_empty();

    info!(
        qualification_type = qualification.kind().wcif_type(),
        valid, "Validated qualification"
    );

    Ok(ValidateQualificationResponse {
        valid,
        qualification: valid.then(|| qualification.to_wcif()),
        errors: errors
            .iter()
            .map(|(field, messages)| (field.to_string(), messages.to_vec()))
            .collect(),
    })
}

/// Describes a qualification in the context of an event.
///
/// # Errors
///
/// Returns an error if:
/// - The event identifier is invalid
/// - The qualification cannot be constructed or is invalid
pub fn describe_qualification(
    registry: &QualificationRegistry,
    request: &DescribeQualificationRequest,
) -> Result<DescribeQualificationResponse, ApiError> {
    let event: CompetitionEvent = build_event(registry, &request.event_id, &request.qualification)?;

    Ok(DescribeQualificationResponse {
        event_id: event.event_id().to_string(),
        description: event.qualification_to_s(),
    })
}

/// Checks whether a person currently meets an event qualification.
///
/// # Errors
///
/// Returns an error if:
/// - The event or person identifier is invalid
/// - The qualification cannot be constructed or is invalid
pub fn check_eligibility(
    registry: &QualificationRegistry,
    source: &dyn ResultSource,
    request: &CheckEligibilityRequest,
) -> Result<CheckEligibilityResponse, ApiError> {
    let event: CompetitionEvent = build_event(registry, &request.event_id, &request.qualification)?;
    let person: Option<PersonId> = request
        .person_id
        .as_deref()
        .map(PersonId::new)
        .transpose()
        .map_err(translate_domain_error)?;

    let eligible: bool = event.competitor_meets_qualification(source, person.as_ref());

    info!(
        event = %event.event_id(),
        person = person.as_ref().map(PersonId::value),
        eligible,
        "Checked qualification eligibility"
    );

    Ok(CheckEligibilityResponse {
        event_id: event.event_id().to_string(),
        person_id: person.map(String::from),
        description: event.qualification_to_s(),
        eligible,
    })
}

fn build_event(
    registry: &QualificationRegistry,
    event_id: &str,
    qualification: &serde_json::Value,
) -> Result<CompetitionEvent, ApiError> {
    let event_id: EventId = EventId::new(event_id).map_err(translate_domain_error)?;
    let mut event: CompetitionEvent = CompetitionEvent::new(event_id);
    event.set_qualification(registry, qualification)?;
    Ok(event)
}
