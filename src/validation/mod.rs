/*!
 * Record validation.
 *
 * Checks run in a fixed order and stop at the first failure:
 * - `MissingMandatoryField`: the file name field is blank
 * - `InvalidEmail`: coarse `x@y.z` prefix check
 * - `InvalidPhone`: at least nine leading digits
 *
 * # Architecture
 *
 * - `rules`: the email and phone patterns
 * - `RecordValidator`: applies the rules to a record
 */

pub mod rules;

use log::debug;

use crate::errors::ValidationError;
use crate::record::{Record, EMAIL_FIELD, MANDATORY_FIELD, PHONE_FIELD};

/// Validates a submitted record. Stateless and side-effect free.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordValidator;

impl RecordValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate the record, returning the first failed check
    pub fn validate(&self, record: &Record) -> Result<(), ValidationError> {
        if record.get(MANDATORY_FIELD).trim().is_empty() {
            return Err(ValidationError::MissingMandatoryField);
        }

        if !rules::is_valid_email(record.get(EMAIL_FIELD)) {
            return Err(ValidationError::InvalidEmail);
        }

        if !rules::is_valid_phone(record.get(PHONE_FIELD)) {
            return Err(ValidationError::InvalidPhone);
        }

        debug!("Record '{}' passed validation", record.get(MANDATORY_FIELD));
        Ok(())
    }
}

/// Validate a record with the default validator
pub fn validate(record: &Record) -> Result<(), ValidationError> {
    RecordValidator::new().validate(record)
}
