//! Constants used throughout the vitals core crate.

/// Default directory for record storage when no explicit directory is configured.
pub const DEFAULT_DATA_DIR: &str = "patient_data";

/// Environment variable naming the record storage directory.
pub const DATA_DIR_ENV: &str = "VITALS_DATA_DIR";

/// Filename of the flat JSON record collection inside the data directory.
pub const RECORDS_FILENAME: &str = "patients.json";

/// Suggested filename for CSV exports.
pub const EXPORT_FILENAME: &str = "patient_data.csv";

/// Header row of the CSV export. Column order is fixed.
pub const CSV_HEADER: [&str; 9] = [
    "Name",
    "Systolic BP",
    "Diastolic BP",
    "Cardiac Rate",
    "Pulse Rate",
    "Respiratory Rate",
    "Temperature",
    "Status",
    "Date",
];

/// Number of most recent records plotted on the temperature trend.
pub const TEMPERATURE_TREND_LEN: usize = 10;
