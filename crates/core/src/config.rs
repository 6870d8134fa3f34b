//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services as
//! an `Arc<CoreConfig>`. Request handling never reads process-wide environment variables.

use crate::constants::{DEFAULT_DATA_DIR, RECORDS_FILENAME};
use crate::{VitalsError, VitalsResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::InvalidInput`] if `data_dir` is empty or points at an
    /// existing non-directory.
    pub fn new(data_dir: PathBuf) -> VitalsResult<Self> {
        if data_dir.as_os_str().is_empty() {
            return Err(VitalsError::InvalidInput(
                "data directory cannot be empty".into(),
            ));
        }
        if data_dir.exists() && !data_dir.is_dir() {
            return Err(VitalsError::InvalidInput(format!(
                "data directory is not a directory: {}",
                data_dir.display()
            )));
        }

        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the JSON record collection.
    pub fn records_file(&self) -> PathBuf {
        self.data_dir.join(RECORDS_FILENAME)
    }
}

/// Resolve the data directory from an optional override value.
///
/// `None`, empty and whitespace-only values fall back to [`DEFAULT_DATA_DIR`].
pub fn data_dir_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}
