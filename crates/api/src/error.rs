// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use qualifier::{CoreError, LoadError, ValidationErrors};
use qualifier_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The qualification `type` is not one of the known variants.
    UnknownQualificationType {
        /// The tag that was supplied, if any.
        tag: Option<String>,
    },
    /// The qualification was constructed but failed validation.
    InvalidQualification {
        /// The field-level validation errors.
        errors: ValidationErrors,
    },
    /// The CSV input could not be read.
    InvalidCsvFormat {
        /// Why the CSV was rejected.
        reason: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::UnknownQualificationType { tag: Some(tag) } => {
                write!(f, "Unknown qualification type '{tag}'")
            }
            Self::UnknownQualificationType { tag: None } => {
                write!(f, "Qualification type is missing")
            }
            Self::InvalidQualification { errors } => {
                write!(f, "Invalid qualification: {errors}")
            }
            Self::InvalidCsvFormat { reason } => write!(f, "Invalid CSV format: {reason}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<LoadError> for ApiError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Construction(core_err) => translate_core_error(core_err),
            LoadError::Invalid(errors) => Self::InvalidQualification { errors },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidEventId(msg) => ApiError::InvalidInput {
            field: String::from("id"),
            message: msg,
        },
        DomainError::InvalidPersonId(msg) => ApiError::InvalidInput {
            field: String::from("person_id"),
            message: msg,
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::DateFormatError { error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to format date: {error}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::UnknownQualificationType { tag } => ApiError::UnknownQualificationType { tag },
        CoreError::MalformedPayload(msg) => ApiError::InvalidInput {
            field: String::from("qualification"),
            message: msg,
        },
    }
}
