//! # Vitals Core
//!
//! Core logic for the patient vital-signs tracker.
//!
//! - [`interpretation`]: the interpretation engine, a pure classifier from six vital signs
//!   to five severity findings
//! - [`reference`]: the fixed reference ranges the engine compares against
//! - [`validation`]: turning raw form text into a reading the engine accepts
//! - [`store`]: the flat, file-backed record collection
//! - [`dashboard`] and [`export`]: aggregate views over stored records
//! - [`service`]: the facade used by the CLI and REST API
//!
//! **No API concerns**: HTTP servers and command-line parsing belong in `api-rest`,
//! `api-shared` and `vitals-cli`.

pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod interpretation;
pub mod record;
pub mod reference;
pub mod service;
pub mod store;
pub mod validation;

pub use config::CoreConfig;
pub use constants::DEFAULT_DATA_DIR;
pub use dashboard::Dashboard;
pub use error::{VitalsError, VitalsResult};
pub use interpretation::{
    interpret, overall_severity, Finding, InterpretationResult, Parameter, Severity,
    VitalReading,
};
pub use record::PatientRecord;
pub use service::VitalsService;
pub use validation::SubmissionForm;
pub use vitals_types::PatientName;
pub use vitals_uuid::RecordId;
