//! Stored patient records.

use crate::interpretation::{InterpretationResult, Severity, VitalReading};
use crate::validation::ValidSubmission;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitals_types::PatientName;
use vitals_uuid::RecordId;

/// One submitted set of vitals with its cached interpretation.
///
/// The interpretation is computed once, when the record is created, and never
/// recomputed from the stored reading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: RecordId,
    pub name: PatientName,
    pub reading: VitalReading,
    pub created_at: DateTime<Utc>,
    pub interpretation: InterpretationResult,
}

impl PatientRecord {
    /// Builds a new record from a validated submission, running the interpretation engine.
    pub fn create(submission: ValidSubmission, created_at: DateTime<Utc>) -> Self {
        let interpretation = submission.reading.interpret();
        Self {
            id: RecordId::new(),
            name: submission.name,
            reading: submission.reading,
            created_at,
            interpretation,
        }
    }

    pub fn overall_severity(&self) -> Severity {
        self.interpretation.overall_severity()
    }
}
