//! Submission validation.
//!
//! A [`SubmissionForm`] holds the raw text a form collects. [`SubmissionForm::validate`]
//! turns it into a name plus a [`VitalReading`], or rejects it. The interpretation engine is
//! only ever called with the output of a successful validation.

use crate::interpretation::VitalReading;
use crate::{VitalsError, VitalsResult};
use serde::{Deserialize, Serialize};
use vitals_types::PatientName;

/// Raw, unvalidated form input. Every field is text as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionForm {
    pub name: String,
    pub systolic_bp: String,
    pub diastolic_bp: String,
    pub cardiac_rate: String,
    pub pulse_rate: String,
    pub respiratory_rate: String,
    pub temperature: String,
}

/// A submission that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidSubmission {
    pub name: PatientName,
    pub reading: VitalReading,
}

impl SubmissionForm {
    /// Validates the form.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::InvalidSubmission`] naming the first field that is missing or
    /// not a number.
    pub fn validate(&self) -> VitalsResult<ValidSubmission> {
        let name = PatientName::new(&self.name).map_err(|e| VitalsError::InvalidSubmission {
            field: "name",
            reason: e.to_string(),
        })?;

        Ok(ValidSubmission {
            name,
            reading: self.validate_reading()?,
        })
    }

    /// Validates only the six vital-sign fields; the name is ignored.
    pub fn validate_reading(&self) -> VitalsResult<VitalReading> {
        Ok(VitalReading {
            systolic_bp: parse_whole("systolic_bp", &self.systolic_bp)?,
            diastolic_bp: parse_whole("diastolic_bp", &self.diastolic_bp)?,
            cardiac_rate: parse_whole("cardiac_rate", &self.cardiac_rate)?,
            pulse_rate: parse_whole("pulse_rate", &self.pulse_rate)?,
            respiratory_rate: parse_whole("respiratory_rate", &self.respiratory_rate)?,
            temperature: parse_celsius(&self.temperature)?,
        })
    }
}

fn parse_whole(field: &'static str, raw: &str) -> VitalsResult<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(VitalsError::InvalidSubmission {
            field,
            reason: "value is required".into(),
        });
    }
    raw.parse::<i32>()
        .map_err(|_| VitalsError::InvalidSubmission {
            field,
            reason: format!("'{}' is not a whole number", raw),
        })
}

fn parse_celsius(raw: &str) -> VitalsResult<f64> {
    const FIELD: &str = "temperature";

    let raw = raw.trim();
    if raw.is_empty() {
        return Err(VitalsError::InvalidSubmission {
            field: FIELD,
            reason: "value is required".into(),
        });
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(VitalsError::InvalidSubmission {
            field: FIELD,
            reason: format!("'{}' is not a number", raw),
        }),
    }
}
