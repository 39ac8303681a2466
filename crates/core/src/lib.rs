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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod eligibility;
mod error;
mod qualification;
mod registry;
mod validation;
mod wcif;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use eligibility::{ResultHistory, ResultSource, meets_for_person};
pub use error::{CoreError, ValidationErrors};
pub use qualification::{NumericField, Qualification, QualificationKind, Requirement};
pub use registry::{QualificationRegistry, VariantDescriptor};
pub use validation::{CUTOFF_DATE_FIELD, POSITIVE_INTEGER_MESSAGE, REQUIRED_MESSAGE};
pub use wcif::{RawQualification, dump, dump_to_string, load, wcif_json_schema};

/// Loads `raw` and validates the result in one step.
///
/// # Returns
///
/// * `Ok(None)` if no qualification is configured
/// * `Ok(Some(q))` if the qualification is valid
///
/// # Errors
///
/// Returns an error if:
/// - The payload cannot be constructed (`LoadError::Construction`)
/// - The constructed value fails validation (`LoadError::Invalid`)
pub fn load_validated(
    registry: &QualificationRegistry,
    raw: impl Into<RawQualification>,
) -> Result<Option<Qualification>, LoadError> {
    match load(registry, raw)? {
        None => Ok(None),
        Some(qualification) => Ok(Some(qualification.validated()?)),
    }
}

/// Failure of [`load_validated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The payload could not be turned into a qualification.
    Construction(CoreError),
    /// The qualification was constructed but is invalid.
    Invalid(ValidationErrors),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Construction(err) => write!(f, "{err}"),
            Self::Invalid(errors) => write!(f, "Invalid qualification: {errors}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<CoreError> for LoadError {
    fn from(err: CoreError) -> Self {
        Self::Construction(err)
    }
}

impl From<ValidationErrors> for LoadError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Invalid(errors)
    }
}
