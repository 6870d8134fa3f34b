//! CSV export of the record collection.
//!
//! Columns, in order: Name, Systolic BP, Diastolic BP, Cardiac Rate, Pulse Rate,
//! Respiratory Rate, Temperature, Status, Date.

use crate::constants::CSV_HEADER;
use crate::record::PatientRecord;
use crate::{VitalsError, VitalsResult};
use std::borrow::Cow;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders `records` as CSV text, header first, one line per record.
///
/// # Errors
///
/// Returns [`VitalsError::NothingToExport`] when `records` is empty.
pub fn export_csv(records: &[PatientRecord]) -> VitalsResult<String> {
    if records.is_empty() {
        return Err(VitalsError::NothingToExport);
    }

    let mut out = CSV_HEADER.join(",");
    out.push('\n');
    for record in records {
        out.push_str(&csv_row(record));
        out.push('\n');
    }
    Ok(out)
}

fn csv_row(record: &PatientRecord) -> String {
    let r = &record.reading;
    let fields = [
        escape(record.name.as_str()).into_owned(),
        r.systolic_bp.to_string(),
        r.diastolic_bp.to_string(),
        r.cardiac_rate.to_string(),
        r.pulse_rate.to_string(),
        r.respiratory_rate.to_string(),
        one_decimal(r.temperature),
        record.overall_severity().overall_label().to_string(),
        record.created_at.format(DATE_FORMAT).to_string(),
    ];
    fields.join(",")
}

/// Formats `value` with one decimal place, rounding exact ties away from zero.
///
/// `{:.1}` alone breaks ties to even, so 36.25 would come out as 36.2. Only values that are
/// whole multiples of 0.25 can sit exactly on a tie.
fn one_decimal(value: f64) -> String {
    let tenths = value * 10.0;
    if (value * 4.0).fract() == 0.0 && tenths.fract().abs() == 0.5 {
        format!("{:.1}", tenths.round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}

/// Quotes a field if it contains a delimiter, quote or line break.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
