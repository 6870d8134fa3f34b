//! Vital-signs interpretation engine.
//!
//! [`interpret`] maps six raw vital-sign values to exactly five [`Finding`]s, one per
//! [`Parameter`], always in the order given by [`Parameter::ALL`]. Each category is
//! classified independently against [`REFERENCE_RANGES`] and the first matching rule wins.
//!
//! The engine is a total pure function. It performs no validation: missing or non-numeric
//! input must be rejected before calling it (see [`crate::validation`]), and values such as
//! negative rates are simply compared against the thresholds.

use crate::reference::{ReferenceRanges, REFERENCE_RANGES};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status labels attached to findings.
///
/// Dashboard aggregation matches on these, so they are the single source of truth.
pub mod status {
    pub const NORMAL: &str = "Normal";
    pub const HYPOTENSION: &str = "Hypotension";
    pub const HYPERTENSION: &str = "Hypertension";
    pub const HYPERTENSIVE_CRISIS: &str = "Hypertensive Crisis";
    pub const BRADYCARDIA: &str = "Bradycardia";
    pub const TACHYCARDIA: &str = "Tachycardia";
    pub const LOW: &str = "Low";
    pub const ELEVATED: &str = "Elevated";
    pub const BRADYPNEA: &str = "Bradypnea";
    pub const TACHYPNEA: &str = "Tachypnea";
    pub const HYPOTHERMIA: &str = "Hypothermia";
    pub const FEVER: &str = "Fever";
}

/// One measured vital-sign category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    BloodPressure,
    CardiacRate,
    PulseRate,
    RespiratoryRate,
    Temperature,
}

impl Parameter {
    /// Every parameter, in the order findings are emitted.
    pub const ALL: [Parameter; 5] = [
        Parameter::BloodPressure,
        Parameter::CardiacRate,
        Parameter::PulseRate,
        Parameter::RespiratoryRate,
        Parameter::Temperature,
    ];

    /// Position of this parameter within an [`InterpretationResult`].
    pub fn index(self) -> usize {
        match self {
            Parameter::BloodPressure => 0,
            Parameter::CardiacRate => 1,
            Parameter::PulseRate => 2,
            Parameter::RespiratoryRate => 3,
            Parameter::Temperature => 4,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Parameter::BloodPressure => "Blood Pressure",
            Parameter::CardiacRate => "Cardiac Rate",
            Parameter::PulseRate => "Pulse Rate",
            Parameter::RespiratoryRate => "Respiratory Rate",
            Parameter::Temperature => "Temperature",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How far a finding is from normal. Ordered `Normal < Warning < Danger`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }

    /// Label used when this severity summarises a whole record (tables, CSV export).
    pub fn overall_label(self) -> &'static str {
        match self {
            Severity::Normal => "Normal",
            Severity::Warning => "Abnormal",
            Severity::Danger => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a single category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub parameter: Parameter,
    pub status: String,
    pub message: String,
    pub severity: Severity,
}

impl Finding {
    fn new(parameter: Parameter, status: &str, message: &str, severity: Severity) -> Self {
        Self {
            parameter,
            status: status.to_owned(),
            message: message.to_owned(),
            severity,
        }
    }

    pub fn is_normal(&self) -> bool {
        self.severity == Severity::Normal
    }
}

/// Exactly five findings, one per [`Parameter`], in [`Parameter::ALL`] order.
///
/// Serialises as a plain JSON array. Deserialisation rejects anything that does not hold
/// the five categories in order, so a cached result read back from storage keeps the same
/// shape as a freshly computed one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Finding>")]
pub struct InterpretationResult([Finding; 5]);

impl InterpretationResult {
    pub fn findings(&self) -> &[Finding; 5] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
        self.0.iter()
    }

    /// Finding for `parameter`.
    pub fn get(&self, parameter: Parameter) -> &Finding {
        &self.0[parameter.index()]
    }

    /// Worst severity across the five findings.
    pub fn overall_severity(&self) -> Severity {
        overall_severity(self)
    }
}

impl TryFrom<Vec<Finding>> for InterpretationResult {
    type Error = String;

    fn try_from(findings: Vec<Finding>) -> Result<Self, Self::Error> {
        let found: Vec<Parameter> = findings.iter().map(|f| f.parameter).collect();
        if found != Parameter::ALL {
            return Err(format!(
                "expected one finding per parameter in order {:?}, got {:?}",
                Parameter::ALL,
                found
            ));
        }
        let array: [Finding; 5] = findings
            .try_into()
            .map_err(|_| "expected exactly 5 findings".to_string())?;
        Ok(Self(array))
    }
}

impl<'a> IntoIterator for &'a InterpretationResult {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The six raw inputs to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VitalReading {
    /// mmHg
    pub systolic_bp: i32,
    /// mmHg
    pub diastolic_bp: i32,
    /// beats per minute
    pub cardiac_rate: i32,
    /// beats per minute
    pub pulse_rate: i32,
    /// breaths per minute
    pub respiratory_rate: i32,
    /// °C
    pub temperature: f64,
}

impl VitalReading {
    pub fn interpret(&self) -> InterpretationResult {
        interpret(
            self.systolic_bp,
            self.diastolic_bp,
            self.cardiac_rate,
            self.pulse_rate,
            self.respiratory_rate,
            self.temperature,
        )
    }
}

/// Classifies a set of vital signs.
///
/// Always returns five findings in [`Parameter::ALL`] order. Never fails.
pub fn interpret(
    systolic_bp: i32,
    diastolic_bp: i32,
    cardiac_rate: i32,
    pulse_rate: i32,
    respiratory_rate: i32,
    temperature: f64,
) -> InterpretationResult {
    let ranges = &REFERENCE_RANGES;
    InterpretationResult([
        blood_pressure(ranges, systolic_bp, diastolic_bp),
        cardiac(ranges, cardiac_rate),
        pulse(ranges, pulse_rate),
        respiratory(ranges, respiratory_rate),
        body_temperature(ranges, temperature),
    ])
}

/// Danger if any finding is Danger, else Warning if any is Warning, else Normal.
pub fn overall_severity(result: &InterpretationResult) -> Severity {
    result
        .iter()
        .map(|f| f.severity)
        .max()
        .unwrap_or(Severity::Normal)
}

fn blood_pressure(ranges: &ReferenceRanges, systolic: i32, diastolic: i32) -> Finding {
    let (sys, dia) = (&ranges.systolic, &ranges.diastolic);
    let p = Parameter::BloodPressure;

    // Low pressure is checked first: 85/130 is hypotension, not a crisis.
    if systolic < sys.min || diastolic < dia.min {
        Finding::new(
            p,
            status::HYPOTENSION,
            "Blood pressure is below normal range. Monitor for dizziness or fatigue.",
            Severity::Warning,
        )
    } else if systolic >= sys.crisis || diastolic >= dia.crisis {
        Finding::new(
            p,
            status::HYPERTENSIVE_CRISIS,
            "Blood pressure is critically high. Immediate medical attention required.",
            Severity::Danger,
        )
    } else if systolic >= sys.high || diastolic >= dia.high {
        Finding::new(
            p,
            status::HYPERTENSION,
            "Blood pressure is elevated. Monitor and consider interventions.",
            Severity::Warning,
        )
    } else {
        Finding::new(
            p,
            status::NORMAL,
            "Blood pressure is within normal range.",
            Severity::Normal,
        )
    }
}

fn cardiac(ranges: &ReferenceRanges, rate: i32) -> Finding {
    let p = Parameter::CardiacRate;
    if ranges.cardiac_rate.is_below(rate) {
        Finding::new(
            p,
            status::BRADYCARDIA,
            "Heart rate is slower than normal. Monitor for symptoms.",
            Severity::Warning,
        )
    } else if ranges.cardiac_rate.is_above(rate) {
        Finding::new(
            p,
            status::TACHYCARDIA,
            "Heart rate is faster than normal. Assess for causes.",
            Severity::Warning,
        )
    } else {
        Finding::new(
            p,
            status::NORMAL,
            "Heart rate is within normal range.",
            Severity::Normal,
        )
    }
}

fn pulse(ranges: &ReferenceRanges, rate: i32) -> Finding {
    let p = Parameter::PulseRate;
    if ranges.pulse_rate.is_below(rate) {
        Finding::new(
            p,
            status::LOW,
            "Pulse rate is below normal range. Monitor cardiovascular status.",
            Severity::Warning,
        )
    } else if ranges.pulse_rate.is_above(rate) {
        Finding::new(
            p,
            status::ELEVATED,
            "Pulse rate is above normal range. Check for exertion, anxiety, or other causes.",
            Severity::Warning,
        )
    } else {
        Finding::new(
            p,
            status::NORMAL,
            "Pulse rate is within normal range.",
            Severity::Normal,
        )
    }
}

fn respiratory(ranges: &ReferenceRanges, rate: i32) -> Finding {
    let p = Parameter::RespiratoryRate;
    if ranges.respiratory_rate.is_below(rate) {
        Finding::new(
            p,
            status::BRADYPNEA,
            "Breathing rate is slower than normal. Monitor oxygen status.",
            Severity::Warning,
        )
    } else if ranges.respiratory_rate.is_above(rate) {
        Finding::new(
            p,
            status::TACHYPNEA,
            "Breathing rate is faster than normal. Assess for respiratory distress.",
            Severity::Warning,
        )
    } else {
        Finding::new(
            p,
            status::NORMAL,
            "Breathing rate is within normal range.",
            Severity::Normal,
        )
    }
}

fn body_temperature(ranges: &ReferenceRanges, celsius: f64) -> Finding {
    let t = &ranges.temperature;
    let p = Parameter::Temperature;

    // `t.max` (37.5) is not a boundary: 37.5..38.0 reads as normal.
    if celsius < t.hypothermia {
        Finding::new(
            p,
            status::HYPOTHERMIA,
            "Body temperature is dangerously low. Immediate warming measures required.",
            Severity::Danger,
        )
    } else if celsius < t.min {
        Finding::new(
            p,
            status::LOW,
            "Body temperature is below normal range. Monitor for signs of hypothermia.",
            Severity::Warning,
        )
    } else if celsius >= t.fever {
        Finding::new(
            p,
            status::FEVER,
            "Body temperature is elevated. Assess for infection or other causes.",
            Severity::Warning,
        )
    } else {
        Finding::new(
            p,
            status::NORMAL,
            "Body temperature is within normal range.",
            Severity::Normal,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_and_severity(result: &InterpretationResult, p: Parameter) -> (&str, Severity) {
        let f = result.get(p);
        (f.status.as_str(), f.severity)
    }

    #[test]
    fn all_normal_reading() {
        let result = interpret(120, 80, 75, 70, 16, 37.0);

        assert!(result.iter().all(|f| f.severity == Severity::Normal));
        assert!(result.iter().all(|f| f.status == status::NORMAL));
        assert_eq!(overall_severity(&result), Severity::Normal);
    }

    #[test]
    fn low_systolic_is_hypotension() {
        let result = interpret(85, 55, 75, 70, 16, 37.0);

        assert_eq!(
            status_and_severity(&result, Parameter::BloodPressure),
            (status::HYPOTENSION, Severity::Warning)
        );
        assert_eq!(result.overall_severity(), Severity::Warning);
    }

    #[test]
    fn crisis_pressure_is_danger() {
        let result = interpret(190, 125, 75, 70, 16, 37.0);

        assert_eq!(
            status_and_severity(&result, Parameter::BloodPressure),
            (status::HYPERTENSIVE_CRISIS, Severity::Danger)
        );
        assert_eq!(result.overall_severity(), Severity::Danger);
    }

    #[test]
    fn hypotension_check_precedes_crisis_check() {
        let result = interpret(85, 130, 75, 70, 16, 37.0);

        assert_eq!(
            status_and_severity(&result, Parameter::BloodPressure),
            (status::HYPOTENSION, Severity::Warning)
        );
        assert_eq!(result.overall_severity(), Severity::Warning);
    }

    #[test]
    fn slow_heart_and_fast_pulse() {
        let result = interpret(120, 80, 50, 110, 16, 37.0);

        assert_eq!(
            status_and_severity(&result, Parameter::CardiacRate),
            (status::BRADYCARDIA, Severity::Warning)
        );
        assert_eq!(
            status_and_severity(&result, Parameter::PulseRate),
            (status::ELEVATED, Severity::Warning)
        );
        assert_eq!(result.overall_severity(), Severity::Warning);
    }

    #[test]
    fn hypothermia_is_danger() {
        let result = interpret(120, 80, 75, 70, 16, 35.9);

        assert_eq!(
            status_and_severity(&result, Parameter::Temperature),
            (status::HYPOTHERMIA, Severity::Danger)
        );
        assert_eq!(result.overall_severity(), Severity::Danger);
    }

    #[test]
    fn systolic_140_is_hypertension() {
        let result = interpret(140, 80, 75, 70, 16, 37.0);
        assert_eq!(
            status_and_severity(&result, Parameter::BloodPressure),
            (status::HYPERTENSION, Severity::Warning)
        );

        let result = interpret(139, 89, 75, 70, 16, 37.0);
        assert_eq!(result.get(Parameter::BloodPressure).status, status::NORMAL);
    }

    #[test]
    fn diastolic_alone_can_trigger_each_band() {
        assert_eq!(
            interpret(120, 59, 75, 70, 16, 37.0)
                .get(Parameter::BloodPressure)
                .status,
            status::HYPOTENSION
        );
        assert_eq!(
            interpret(120, 90, 75, 70, 16, 37.0)
                .get(Parameter::BloodPressure)
                .status,
            status::HYPERTENSION
        );
        assert_eq!(
            interpret(120, 120, 75, 70, 16, 37.0)
                .get(Parameter::BloodPressure)
                .status,
            status::HYPERTENSIVE_CRISIS
        );
    }

    #[test]
    fn systolic_180_is_crisis() {
        assert_eq!(
            interpret(180, 80, 75, 70, 16, 37.0)
                .get(Parameter::BloodPressure)
                .severity,
            Severity::Danger
        );
    }

    #[test]
    fn cardiac_rate_100_is_not_tachycardia() {
        let result = interpret(120, 80, 100, 70, 16, 37.0);
        assert_eq!(
            status_and_severity(&result, Parameter::CardiacRate),
            (status::NORMAL, Severity::Normal)
        );

        let result = interpret(120, 80, 101, 70, 16, 37.0);
        assert_eq!(
            status_and_severity(&result, Parameter::CardiacRate),
            (status::TACHYCARDIA, Severity::Warning)
        );
    }

    #[test]
    fn pulse_rate_100_is_not_elevated() {
        let result = interpret(120, 80, 75, 100, 16, 37.0);
        assert_eq!(
            status_and_severity(&result, Parameter::PulseRate),
            (status::NORMAL, Severity::Normal)
        );

        let result = interpret(120, 80, 75, 101, 16, 37.0);
        assert_eq!(
            status_and_severity(&result, Parameter::PulseRate),
            (status::ELEVATED, Severity::Warning)
        );
    }

    #[test]
    fn diastolic_60_is_normal() {
        let result = interpret(120, 60, 75, 70, 16, 37.0);
        assert_eq!(
            status_and_severity(&result, Parameter::BloodPressure),
            (status::NORMAL, Severity::Normal)
        );
    }

    #[test]
    fn pulse_and_respiratory_edges() {
        assert_eq!(
            interpret(120, 80, 75, 59, 16, 37.0)
                .get(Parameter::PulseRate)
                .status,
            status::LOW
        );
        assert_eq!(
            interpret(120, 80, 75, 60, 12, 37.0)
                .get(Parameter::RespiratoryRate)
                .status,
            status::NORMAL
        );
        assert_eq!(
            interpret(120, 80, 75, 70, 11, 37.0)
                .get(Parameter::RespiratoryRate)
                .status,
            status::BRADYPNEA
        );
        assert_eq!(
            interpret(120, 80, 75, 70, 21, 37.0)
                .get(Parameter::RespiratoryRate)
                .status,
            status::TACHYPNEA
        );
        assert_eq!(
            interpret(120, 80, 75, 70, 20, 37.0)
                .get(Parameter::RespiratoryRate)
                .status,
            status::NORMAL
        );
    }

    #[test]
    fn temperature_bands() {
        let temp = |c: f64| {
            let r = interpret(120, 80, 75, 70, 16, c);
            let f = r.get(Parameter::Temperature).clone();
            (f.status, f.severity)
        };

        assert_eq!(temp(36.0), (status::LOW.to_string(), Severity::Warning));
        assert_eq!(temp(36.4), (status::LOW.to_string(), Severity::Warning));
        assert_eq!(temp(36.5), (status::NORMAL.to_string(), Severity::Normal));
        assert_eq!(temp(37.8), (status::NORMAL.to_string(), Severity::Normal));
        assert_eq!(temp(38.0), (status::FEVER.to_string(), Severity::Warning));
        assert_eq!(temp(41.2), (status::FEVER.to_string(), Severity::Warning));
    }

    #[test]
    fn findings_follow_parameter_order() {
        let result = interpret(60, 40, 0, 300, -3, 45.0);
        let order: Vec<Parameter> = result.iter().map(|f| f.parameter).collect();
        assert_eq!(order, Parameter::ALL);
    }

    #[test]
    fn result_serialises_as_array_and_round_trips() {
        let result = interpret(150, 95, 75, 70, 16, 38.2);
        let json = serde_json::to_value(&result).unwrap();

        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 5);
        assert_eq!(arr[0]["parameter"], "blood_pressure");
        assert_eq!(arr[0]["severity"], "warning");
        assert_eq!(arr[4]["status"], "Fever");

        let back: InterpretationResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn deserialise_rejects_misordered_findings() {
        let result = interpret(120, 80, 75, 70, 16, 37.0);
        let mut findings: Vec<Finding> = result.iter().cloned().collect();
        findings.swap(0, 1);
        let json = serde_json::to_string(&findings).unwrap();

        let err = serde_json::from_str::<InterpretationResult>(&json).unwrap_err();
        assert!(err.to_string().contains("one finding per parameter"));

        findings.truncate(4);
        let json = serde_json::to_string(&findings).unwrap();
        assert!(serde_json::from_str::<InterpretationResult>(&json).is_err());
    }

    #[test]
    fn overall_labels() {
        assert_eq!(Severity::Normal.overall_label(), "Normal");
        assert_eq!(Severity::Warning.overall_label(), "Abnormal");
        assert_eq!(Severity::Danger.overall_label(), "Critical");
        assert!(Severity::Danger > Severity::Warning && Severity::Warning > Severity::Normal);
    }
}
