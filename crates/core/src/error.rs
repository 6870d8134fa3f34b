#[derive(Debug, thiserror::Error)]
pub enum VitalsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("Please fill all fields with valid values ({field}: {reason})")]
    InvalidSubmission { field: &'static str, reason: String },
    #[error("invalid record id: {0}")]
    InvalidRecordId(#[from] vitals_uuid::UuidError),
    #[error("record not found: {0}")]
    RecordNotFound(vitals_uuid::RecordId),
    #[error("No data to export")]
    NothingToExport,
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to read record store: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write record store: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize records: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to decode record store: {0}")]
    StoreDecode(#[source] serde_path_to_error::Error<serde_json::Error>),
}

impl VitalsError {
    /// True when the error was caused by the caller's input rather than the system.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            VitalsError::InvalidInput(_)
                | VitalsError::InvalidSubmission { .. }
                | VitalsError::InvalidRecordId(_)
                | VitalsError::RecordNotFound(_)
                | VitalsError::NothingToExport
        )
    }
}

pub type VitalsResult<T> = std::result::Result<T, VitalsError>;
