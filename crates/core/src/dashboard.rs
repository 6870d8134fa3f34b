//! Dashboard aggregation.
//!
//! Pure functions that turn the stored record collection into the figures a dashboard
//! plots. Each works from the interpretation cached on the records; none of them re-runs
//! the engine. [`Dashboard::build`] bundles them for callers that want everything at once.

use crate::constants::TEMPERATURE_TREND_LEN;
use crate::interpretation::{status, InterpretationResult, Parameter, Severity};
use crate::record::PatientRecord;
use crate::reference::REFERENCE_RANGES;
use serde::Serialize;

/// Whole-number percentage of `part` in `total`, rounded half away from zero.
///
/// Returns 0 when `total` is 0.
pub fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

/// Record counts by overall severity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SeveritySummary {
    pub total: usize,
    pub critical: usize,
    pub abnormal: usize,
    pub normal: usize,
    pub critical_percent: u32,
    pub abnormal_percent: u32,
    pub normal_percent: u32,
}

pub fn severity_summary<'a, I>(results: I) -> SeveritySummary
where
    I: IntoIterator<Item = &'a InterpretationResult>,
{
    let mut summary = SeveritySummary::default();
    for result in results {
        summary.total += 1;
        match result.overall_severity() {
            Severity::Danger => summary.critical += 1,
            Severity::Warning => summary.abnormal += 1,
            Severity::Normal => summary.normal += 1,
        }
    }
    summary.critical_percent = percent(summary.critical, summary.total);
    summary.abnormal_percent = percent(summary.abnormal, summary.total);
    summary.normal_percent = percent(summary.normal, summary.total);
    summary
}

/// Normal/abnormal split for one parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub parameter: Parameter,
    pub label: &'static str,
    pub normal_percent: u32,
    pub abnormal_percent: u32,
}

/// Percentage of records normal vs abnormal, per parameter, in [`Parameter::ALL`] order.
pub fn category_breakdown<'a, I>(results: I) -> Vec<CategoryBreakdown>
where
    I: IntoIterator<Item = &'a InterpretationResult>,
{
    let mut total = 0usize;
    let mut abnormal = [0usize; 5];
    for result in results {
        total += 1;
        for finding in result {
            if !finding.is_normal() {
                abnormal[finding.parameter.index()] += 1;
            }
        }
    }

    Parameter::ALL
        .iter()
        .map(|&parameter| {
            let abnormal = abnormal[parameter.index()];
            CategoryBreakdown {
                parameter,
                label: parameter.display_name(),
                normal_percent: percent(total - abnormal, total),
                abnormal_percent: percent(abnormal, total),
            }
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BloodPressureDistribution {
    pub hypotension: usize,
    pub normal: usize,
    pub hypertension: usize,
    pub hypertensive_crisis: usize,
}

pub fn blood_pressure_distribution<'a, I>(results: I) -> BloodPressureDistribution
where
    I: IntoIterator<Item = &'a InterpretationResult>,
{
    let mut dist = BloodPressureDistribution::default();
    for result in results {
        match result.get(Parameter::BloodPressure).status.as_str() {
            status::HYPOTENSION => dist.hypotension += 1,
            status::HYPERTENSION => dist.hypertension += 1,
            status::HYPERTENSIVE_CRISIS => dist.hypertensive_crisis += 1,
            _ => dist.normal += 1,
        }
    }
    dist
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CardiacRateDistribution {
    pub bradycardia: usize,
    pub normal: usize,
    pub tachycardia: usize,
}

pub fn cardiac_rate_distribution<'a, I>(results: I) -> CardiacRateDistribution
where
    I: IntoIterator<Item = &'a InterpretationResult>,
{
    let mut dist = CardiacRateDistribution::default();
    for result in results {
        match result.get(Parameter::CardiacRate).status.as_str() {
            status::BRADYCARDIA => dist.bradycardia += 1,
            status::TACHYCARDIA => dist.tachycardia += 1,
            _ => dist.normal += 1,
        }
    }
    dist
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TemperaturePoint {
    pub name: String,
    pub temperature: f64,
}

/// Horizontal reference lines drawn on the temperature chart, in °C.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TemperatureReferenceLines {
    pub fever: f64,
    pub normal_low: f64,
    pub normal_high: f64,
}

impl Default for TemperatureReferenceLines {
    fn default() -> Self {
        let t = REFERENCE_RANGES.temperature;
        Self {
            fever: t.fever,
            normal_low: t.min,
            normal_high: t.max,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TemperatureTrend {
    pub points: Vec<TemperaturePoint>,
    pub reference_lines: TemperatureReferenceLines,
}

/// The most recent [`TEMPERATURE_TREND_LEN`] records, oldest first.
pub fn temperature_trend(records: &[PatientRecord]) -> TemperatureTrend {
    let mut sorted: Vec<&PatientRecord> = records.iter().collect();
    // Stable sort keeps insertion order for identical timestamps.
    sorted.sort_by_key(|r| r.created_at);
    let skip = sorted.len().saturating_sub(TEMPERATURE_TREND_LEN);

    TemperatureTrend {
        points: sorted
            .into_iter()
            .skip(skip)
            .map(|r| TemperaturePoint {
                name: r.name.to_string(),
                temperature: r.reading.temperature,
            })
            .collect(),
        reference_lines: TemperatureReferenceLines::default(),
    }
}

/// Everything the dashboard shows, computed from one snapshot of the store.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard {
    pub summary: SeveritySummary,
    pub categories: Vec<CategoryBreakdown>,
    pub blood_pressure: BloodPressureDistribution,
    pub cardiac_rate: CardiacRateDistribution,
    pub temperature: TemperatureTrend,
}

impl Dashboard {
    pub fn build(records: &[PatientRecord]) -> Self {
        let results = || records.iter().map(|r| &r.interpretation);
        Self {
            summary: severity_summary(results()),
            categories: category_breakdown(results()),
            blood_pressure: blood_pressure_distribution(results()),
            cardiac_rate: cardiac_rate_distribution(results()),
            temperature: temperature_trend(records),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.total == 0
    }
}
