// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde_json::Value;
use std::collections::BTreeMap;

/// API request to validate a WCIF qualification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateQualificationRequest {
    /// The raw WCIF qualification (object or null).
    pub qualification: Value,
}

/// API response describing whether a qualification is valid.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidateQualificationResponse {
    /// Whether the qualification passed validation.
    pub valid: bool,
    /// The canonical WCIF form, present only when valid.
    pub qualification: Option<Value>,
    /// Field-level validation errors.
    pub errors: BTreeMap<String, Vec<String>>,
}

/// API request to describe an event qualification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeQualificationRequest {
    /// The WCA event identifier.
    pub event_id: String,
    /// The raw WCIF qualification (object or null).
    pub qualification: Value,
}

/// API response with the human-readable qualification.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DescribeQualificationResponse {
    /// The WCA event identifier.
    pub event_id: String,
    /// The description, or `None` if the event has no qualification.
    pub description: Option<String>,
}

/// API request to check whether a person meets an event qualification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEligibilityRequest {
    /// The WCA event identifier.
    pub event_id: String,
    /// The WCA person identifier, if the competitor has one.
    pub person_id: Option<String>,
    /// The raw WCIF qualification (object or null).
    pub qualification: Value,
}

/// API response for an eligibility check.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckEligibilityResponse {
    /// The WCA event identifier.
    pub event_id: String,
    /// The normalized WCA person identifier.
    pub person_id: Option<String>,
    /// The human-readable qualification, if any.
    pub description: Option<String>,
    /// Whether the person may enter the event.
    pub eligible: bool,
}
