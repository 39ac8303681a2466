// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ValidationErrors;
use crate::qualification::Qualification;

/// Field name reported when the cutoff date is missing.
pub const CUTOFF_DATE_FIELD: &str = "cutoffDate";

/// Message for a missing required field.
pub const REQUIRED_MESSAGE: &str = "required";

/// Message for a numeric field that is missing, non-integer or not above zero.
pub const POSITIVE_INTEGER_MESSAGE: &str = "must be a positive integer";

impl Qualification {
    /// Validates the field constraints of this qualification.
    ///
    /// This function is pure and never queries result data.
    ///
    /// # Returns
    ///
    /// The field-level errors. An empty collection means the value is valid.
    ///
    /// Rules:
    /// - The cutoff date must be set
    /// - The variant's numeric field must be a strictly positive integer
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        let mut errors: ValidationErrors = ValidationErrors::new();

        if self.cutoff_date().is_none() {
            errors.add(CUTOFF_DATE_FIELD, REQUIRED_MESSAGE);
        }

        if self.requirement().value().positive_integer().is_none() {
            errors.add(self.kind().value_key(), POSITIVE_INTEGER_MESSAGE);
        }

        errors
    }

    /// Returns whether [`Qualification::validate`] reports no errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Consumes the value, returning it only if it is valid.
    ///
    /// # Errors
    ///
    /// Returns the validation errors if any field constraint fails.
    pub fn validated(self) -> Result<Self, ValidationErrors> {
        self.validate().into_result()?;
        Ok(self)
    }
}
