//! Request and response bodies for the REST API.
//!
//! These are flat, string-friendly mirrors of the core types. Enums are rendered as their
//! display labels (`"Blood Pressure"`, `"warning"`) so clients never depend on Rust variant
//! names. `From` impls translate core values into wire values.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vitals_core::dashboard::{
    BloodPressureDistribution, CardiacRateDistribution, CategoryBreakdown, SeveritySummary,
    TemperatureTrend,
};
use vitals_core::{Dashboard, Finding, InterpretationResult, PatientRecord, SubmissionForm};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub message: String,
}

/// Raw form values. Numbers are sent as text exactly as typed; the server validates them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct VitalsFormReq {
    /// Patient name. Ignored by `/interpret`.
    pub name: String,
    pub systolic_bp: String,
    pub diastolic_bp: String,
    pub cardiac_rate: String,
    pub pulse_rate: String,
    pub respiratory_rate: String,
    pub temperature: String,
}

impl From<VitalsFormReq> for SubmissionForm {
    fn from(req: VitalsFormReq) -> Self {
        SubmissionForm {
            name: req.name,
            systolic_bp: req.systolic_bp,
            diastolic_bp: req.diastolic_bp,
            cardiac_rate: req.cardiac_rate,
            pulse_rate: req.pulse_rate,
            respiratory_rate: req.respiratory_rate,
            temperature: req.temperature,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FindingRes {
    pub parameter: String,
    pub status: String,
    pub message: String,
    /// One of `normal`, `warning`, `danger`.
    pub severity: String,
}

impl From<&Finding> for FindingRes {
    fn from(f: &Finding) -> Self {
        Self {
            parameter: f.parameter.display_name().to_string(),
            status: f.status.clone(),
            message: f.message.clone(),
            severity: f.severity.as_str().to_string(),
        }
    }
}

fn findings(result: &InterpretationResult) -> Vec<FindingRes> {
    result.iter().map(FindingRes::from).collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InterpretRes {
    pub findings: Vec<FindingRes>,
    /// Worst severity across the findings.
    pub overall_severity: String,
    /// `Normal`, `Abnormal` or `Critical`.
    pub overall_status: String,
}

impl From<&InterpretationResult> for InterpretRes {
    fn from(result: &InterpretationResult) -> Self {
        let overall = result.overall_severity();
        Self {
            findings: findings(result),
            overall_severity: overall.as_str().to_string(),
            overall_status: overall.overall_label().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecordRes {
    pub id: String,
    pub name: String,
    pub systolic_bp: i32,
    pub diastolic_bp: i32,
    pub cardiac_rate: i32,
    pub pulse_rate: i32,
    pub respiratory_rate: i32,
    pub temperature: f64,
    /// RFC 3339 creation time.
    pub created_at: String,
    pub findings: Vec<FindingRes>,
    pub overall_severity: String,
    pub overall_status: String,
}

impl From<&PatientRecord> for RecordRes {
    fn from(record: &PatientRecord) -> Self {
        let r = &record.reading;
        let overall = record.overall_severity();
        Self {
            id: record.id.to_string(),
            name: record.name.to_string(),
            systolic_bp: r.systolic_bp,
            diastolic_bp: r.diastolic_bp,
            cardiac_rate: r.cardiac_rate,
            pulse_rate: r.pulse_rate,
            respiratory_rate: r.respiratory_rate,
            temperature: r.temperature,
            created_at: record.created_at.to_rfc3339(),
            findings: findings(&record.interpretation),
            overall_severity: overall.as_str().to_string(),
            overall_status: overall.overall_label().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateRecordRes {
    pub record: RecordRes,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListRecordsRes {
    pub records: Vec<RecordRes>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteRecordRes {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClearRecordsRes {
    pub removed: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeveritySummaryRes {
    pub total: usize,
    pub critical: usize,
    pub abnormal: usize,
    pub normal: usize,
    pub critical_percent: u32,
    pub abnormal_percent: u32,
    pub normal_percent: u32,
}

impl From<&SeveritySummary> for SeveritySummaryRes {
    fn from(s: &SeveritySummary) -> Self {
        Self {
            total: s.total,
            critical: s.critical,
            abnormal: s.abnormal,
            normal: s.normal,
            critical_percent: s.critical_percent,
            abnormal_percent: s.abnormal_percent,
            normal_percent: s.normal_percent,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryBreakdownRes {
    pub parameter: String,
    pub normal_percent: u32,
    pub abnormal_percent: u32,
}

impl From<&CategoryBreakdown> for CategoryBreakdownRes {
    fn from(c: &CategoryBreakdown) -> Self {
        Self {
            parameter: c.label.to_string(),
            normal_percent: c.normal_percent,
            abnormal_percent: c.abnormal_percent,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BloodPressureDistributionRes {
    pub hypotension: usize,
    pub normal: usize,
    pub hypertension: usize,
    pub hypertensive_crisis: usize,
}

impl From<&BloodPressureDistribution> for BloodPressureDistributionRes {
    fn from(d: &BloodPressureDistribution) -> Self {
        Self {
            hypotension: d.hypotension,
            normal: d.normal,
            hypertension: d.hypertension,
            hypertensive_crisis: d.hypertensive_crisis,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CardiacRateDistributionRes {
    pub bradycardia: usize,
    pub normal: usize,
    pub tachycardia: usize,
}

impl From<&CardiacRateDistribution> for CardiacRateDistributionRes {
    fn from(d: &CardiacRateDistribution) -> Self {
        Self {
            bradycardia: d.bradycardia,
            normal: d.normal,
            tachycardia: d.tachycardia,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemperaturePointRes {
    pub name: String,
    pub temperature: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemperatureTrendRes {
    /// Up to ten most recent readings, oldest first.
    pub points: Vec<TemperaturePointRes>,
    pub fever_line: f64,
    pub normal_low_line: f64,
    pub normal_high_line: f64,
}

impl From<&TemperatureTrend> for TemperatureTrendRes {
    fn from(t: &TemperatureTrend) -> Self {
        Self {
            points: t
                .points
                .iter()
                .map(|p| TemperaturePointRes {
                    name: p.name.clone(),
                    temperature: p.temperature,
                })
                .collect(),
            fever_line: t.reference_lines.fever,
            normal_low_line: t.reference_lines.normal_low,
            normal_high_line: t.reference_lines.normal_high,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardRes {
    pub summary: SeveritySummaryRes,
    pub categories: Vec<CategoryBreakdownRes>,
    pub blood_pressure: BloodPressureDistributionRes,
    pub cardiac_rate: CardiacRateDistributionRes,
    pub temperature: TemperatureTrendRes,
}

impl From<&Dashboard> for DashboardRes {
    fn from(d: &Dashboard) -> Self {
        Self {
            summary: (&d.summary).into(),
            categories: d.categories.iter().map(CategoryBreakdownRes::from).collect(),
            blood_pressure: (&d.blood_pressure).into(),
            cardiac_rate: (&d.cardiac_rate).into(),
            temperature: (&d.temperature).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitals_core::{interpret, PatientName, VitalReading};

    #[test]
    fn interpret_res_uses_display_labels() {
        let res = InterpretRes::from(&interpret(190, 125, 75, 70, 16, 37.0));

        assert_eq!(res.findings.len(), 5);
        assert_eq!(res.findings[0].parameter, "Blood Pressure");
        assert_eq!(res.findings[0].status, "Hypertensive Crisis");
        assert_eq!(res.findings[0].severity, "danger");
        assert_eq!(res.overall_severity, "danger");
        assert_eq!(res.overall_status, "Critical");
    }

    #[test]
    fn record_res_flattens_reading() {
        let record = PatientRecord::create(
            vitals_core::validation::ValidSubmission {
                name: PatientName::new("Ada").unwrap(),
                reading: VitalReading {
                    systolic_bp: 120,
                    diastolic_bp: 80,
                    cardiac_rate: 75,
                    pulse_rate: 70,
                    respiratory_rate: 16,
                    temperature: 37.0,
                },
            },
            chrono::Utc::now(),
        );
        let res = RecordRes::from(&record);

        assert_eq!(res.id, record.id.to_string());
        assert_eq!(res.name, "Ada");
        assert_eq!(res.systolic_bp, 120);
        assert_eq!(res.overall_status, "Normal");

        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["findings"][4]["parameter"], "Temperature");
    }

    #[test]
    fn form_request_converts_to_submission_form() {
        let req: VitalsFormReq =
            serde_json::from_str(r#"{"name":"Ada","systolic_bp":"120"}"#).unwrap();
        let form = SubmissionForm::from(req);
        assert_eq!(form.name, "Ada");
        assert_eq!(form.systolic_bp, "120");
        assert_eq!(form.temperature, "");
    }

    #[test]
    fn dashboard_res_carries_reference_lines() {
        let res = DashboardRes::from(&Dashboard::build(&[]));
        assert_eq!(res.summary.total, 0);
        assert_eq!(res.categories.len(), 5);
        assert_eq!(res.temperature.fever_line, 38.0);
        assert_eq!(res.temperature.normal_low_line, 36.5);
        assert_eq!(res.temperature.normal_high_line, 37.5);
    }
}
