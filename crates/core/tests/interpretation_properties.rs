use proptest::prelude::*;
use vitals_core::{interpret, overall_severity, Parameter, Severity};

fn vitals() -> impl Strategy<Value = (i32, i32, i32, i32, i32, f64)> {
    (
        -50i32..400,
        -50i32..300,
        -10i32..300,
        -10i32..300,
        -5i32..80,
        20.0f64..45.0,
    )
}

proptest! {
    #[test]
    fn same_inputs_give_same_result((s, d, c, p, r, t) in vitals()) {
        prop_assert_eq!(interpret(s, d, c, p, r, t), interpret(s, d, c, p, r, t));
    }

    #[test]
    fn always_five_findings_in_fixed_order((s, d, c, p, r, t) in vitals()) {
        let result = interpret(s, d, c, p, r, t);
        let order: Vec<Parameter> = result.iter().map(|f| f.parameter).collect();
        prop_assert_eq!(order, Parameter::ALL.to_vec());
    }

    #[test]
    fn overall_is_worst_finding((s, d, c, p, r, t) in vitals()) {
        let result = interpret(s, d, c, p, r, t);
        let overall = overall_severity(&result);
        prop_assert!(result.iter().all(|f| f.severity <= overall));
        prop_assert!(result.iter().any(|f| f.severity == overall));
    }

    #[test]
    fn low_pressure_always_wins(s in -50i32..90, d in -50i32..300) {
        let result = interpret(s, d, 75, 70, 16, 37.0);
        prop_assert_eq!(result.get(Parameter::BloodPressure).status.as_str(), "Hypotension");
        prop_assert_eq!(result.get(Parameter::BloodPressure).severity, Severity::Warning);
    }

    #[test]
    fn only_crisis_and_hypothermia_are_danger((s, d, c, p, r, t) in vitals()) {
        let result = interpret(s, d, c, p, r, t);
        for finding in &result {
            if finding.severity == Severity::Danger {
                prop_assert!(
                    finding.status == "Hypertensive Crisis" || finding.status == "Hypothermia",
                    "unexpected danger status {}",
                    finding.status
                );
            }
        }
    }
}
