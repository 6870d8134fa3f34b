//! Vitals service.
//!
//! The entry point used by the CLI and the REST API. It ties submission validation, the
//! interpretation engine and the record store together.

use crate::dashboard::Dashboard;
use crate::export;
use crate::interpretation::InterpretationResult;
use crate::record::PatientRecord;
use crate::store::RecordStore;
use crate::validation::SubmissionForm;
use crate::{CoreConfig, VitalsError, VitalsResult};
use chrono::Utc;
use std::sync::Arc;
use vitals_uuid::RecordId;

/// Pure record operations - no API concerns
#[derive(Clone, Debug)]
pub struct VitalsService {
    cfg: Arc<CoreConfig>,
    store: RecordStore,
}

impl VitalsService {
    /// Creates a new instance of VitalsService.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        let store = RecordStore::new(&cfg);
        Self { cfg, store }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    /// Validates a submission, interprets it and stores the resulting record.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::InvalidSubmission`] if the form is incomplete or not numeric;
    /// nothing is stored in that case. Storage failures are returned as-is.
    pub fn submit(&self, form: &SubmissionForm) -> VitalsResult<PatientRecord> {
        let submission = form.validate()?;
        let record = PatientRecord::create(submission, Utc::now());
        self.store.append(record.clone())?;

        tracing::info!(
            record_id = %record.id,
            overall = %record.overall_severity(),
            "stored vitals record"
        );
        Ok(record)
    }

    /// Validates and interprets the six vitals in `form` without storing anything.
    pub fn interpret_only(&self, form: &SubmissionForm) -> VitalsResult<InterpretationResult> {
        Ok(form.validate_reading()?.interpret())
    }

    pub fn list_records(&self) -> VitalsResult<Vec<PatientRecord>> {
        self.store.list()
    }

    /// Deletes one record.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::RecordNotFound`] if no record has this id.
    pub fn delete_record(&self, id: &RecordId) -> VitalsResult<()> {
        if !self.store.delete(id)? {
            return Err(VitalsError::RecordNotFound(*id));
        }
        tracing::info!(record_id = %id, "deleted vitals record");
        Ok(())
    }

    /// Deletes every record and returns how many were removed.
    pub fn clear_records(&self) -> VitalsResult<usize> {
        let removed = self.store.clear()?;
        tracing::info!(removed, "cleared all vitals records");
        Ok(removed)
    }

    pub fn dashboard(&self) -> VitalsResult<Dashboard> {
        Ok(Dashboard::build(&self.store.list()?))
    }

    /// CSV export of every stored record.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::NothingToExport`] when the store is empty.
    pub fn export_csv(&self) -> VitalsResult<String> {
        export::export_csv(&self.store.list()?)
    }
}
