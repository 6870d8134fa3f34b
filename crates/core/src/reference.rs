//! Fixed clinical reference ranges.
//!
//! These are the adult reference values the interpretation rules compare against. They are
//! compile-time constants; there is deliberately no way to change them at runtime.

/// Boundaries for one blood-pressure component (systolic or diastolic), in mmHg.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PressureRange {
    /// Readings strictly below this are hypotensive.
    pub min: i32,
    /// Typical normal value. Informational only.
    pub normal: i32,
    /// Readings at or above this are hypertensive.
    pub high: i32,
    /// Readings at or above this are a hypertensive crisis.
    pub crisis: i32,
}

/// Inclusive normal band for a rate measured per minute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateRange {
    /// Readings strictly below this are low.
    pub min: i32,
    /// Readings strictly above this are high.
    pub max: i32,
}

impl RateRange {
    pub fn is_below(&self, value: i32) -> bool {
        value < self.min
    }

    pub fn is_above(&self, value: i32) -> bool {
        value > self.max
    }
}

/// Body temperature boundaries, in °C.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperatureRange {
    /// Readings strictly below this are low.
    pub min: f64,
    /// Upper end of the normal band. Not a classification boundary; see `fever`.
    pub max: f64,
    /// Readings at or above this are a fever.
    pub fever: f64,
    /// Readings strictly below this are hypothermic.
    pub hypothermia: f64,
}

/// The complete reference table, one entry per measured quantity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceRanges {
    pub systolic: PressureRange,
    pub diastolic: PressureRange,
    pub cardiac_rate: RateRange,
    pub pulse_rate: RateRange,
    pub respiratory_rate: RateRange,
    pub temperature: TemperatureRange,
}

/// Reference values used by [`crate::interpretation::interpret`].
pub const REFERENCE_RANGES: ReferenceRanges = ReferenceRanges {
    systolic: PressureRange {
        min: 90,
        normal: 120,
        high: 140,
        crisis: 180,
    },
    diastolic: PressureRange {
        min: 60,
        normal: 80,
        high: 90,
        crisis: 120,
    },
    cardiac_rate: RateRange { min: 60, max: 100 },
    pulse_rate: RateRange { min: 60, max: 100 },
    respiratory_rate: RateRange { min: 12, max: 20 },
    temperature: TemperatureRange {
        min: 36.5,
        max: 37.5,
        fever: 38.0,
        hypothermia: 36.0,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_boundaries_are_ordered() {
        for range in [REFERENCE_RANGES.systolic, REFERENCE_RANGES.diastolic] {
            assert!(range.min < range.normal);
            assert!(range.normal < range.high);
            assert!(range.high < range.crisis);
        }
    }

    #[test]
    fn temperature_boundaries_are_ordered() {
        let t = REFERENCE_RANGES.temperature;
        assert!(t.hypothermia < t.min);
        assert!(t.min < t.max);
        assert!(t.max < t.fever);
    }

    #[test]
    fn rate_range_edges_are_inside_the_band() {
        let r = REFERENCE_RANGES.cardiac_rate;
        assert!(!r.is_below(60));
        assert!(r.is_below(59));
        assert!(!r.is_above(100));
        assert!(r.is_above(101));
    }
}
