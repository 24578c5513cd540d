//! Reason-code derivation.
//!
//! Each weighted contribution is compared against a fixed per-factor
//! threshold, in a fixed evaluation order. Thresholds apply to the weighted
//! contribution (factor x weight), not the raw factor score, so they are
//! coupled to the weight table: changing a weight requires re-deriving the
//! matching threshold.
//!
//! Callers pass the 4-decimal rounded contributions. Threshold edges are
//! exact decimal values, and a product like 0.7 x 0.20 sits one ulp under
//! the 0.14 literal; rounding first makes the edge comparison exact.

use crate::score::Contributions;

/// Machine-readable explanation of why a factor contributed to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonCode {
    BmiOutOfHealthyRange,
    VaccinationDelayOrIncomplete,
    HeatStressRisk,
    AirQualityExposure,
    LowAttendancePattern,
    /// Emitted when no factor meets its threshold.
    BaselineLowRisk,
}

impl ReasonCode {
    /// Wire form of the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            ReasonCode::BmiOutOfHealthyRange => "BMI_OUT_OF_HEALTHY_RANGE",
            ReasonCode::VaccinationDelayOrIncomplete => "VACCINATION_DELAY_OR_INCOMPLETE",
            ReasonCode::HeatStressRisk => "HEAT_STRESS_RISK",
            ReasonCode::AirQualityExposure => "AIR_QUALITY_EXPOSURE",
            ReasonCode::LowAttendancePattern => "LOW_ATTENDANCE_PATTERN",
            ReasonCode::BaselineLowRisk => "BASELINE_LOW_RISK",
        }
    }
}

/// Contribution threshold that triggers `BMI_OUT_OF_HEALTHY_RANGE`.
pub const THRESHOLD_BMI: f64 = 0.2;
/// Contribution threshold that triggers `VACCINATION_DELAY_OR_INCOMPLETE`.
pub const THRESHOLD_VACCINATION: f64 = 0.14;
/// Contribution threshold that triggers `HEAT_STRESS_RISK`.
pub const THRESHOLD_HEAT: f64 = 0.16;
/// Contribution threshold that triggers `AIR_QUALITY_EXPOSURE`.
pub const THRESHOLD_AQI: f64 = 0.12;
/// Contribution threshold that triggers `LOW_ATTENDANCE_PATTERN`.
pub const THRESHOLD_ATTENDANCE: f64 = 0.05;

/// Derive the ordered reason codes for a set of weighted contributions.
///
/// Evaluation order is fixed: BMI, vaccination, heat, AQI, attendance.
/// Never returns an empty list; `BaselineLowRisk` is the fallback.
pub fn derive_reason_codes(contributions: &Contributions) -> Vec<ReasonCode> {
    let mut reasons = Vec::new();
    if contributions.bmi >= THRESHOLD_BMI {
        reasons.push(ReasonCode::BmiOutOfHealthyRange);
    }
    if contributions.vaccination >= THRESHOLD_VACCINATION {
        reasons.push(ReasonCode::VaccinationDelayOrIncomplete);
    }
    if contributions.temperature >= THRESHOLD_HEAT {
        reasons.push(ReasonCode::HeatStressRisk);
    }
    if contributions.aqi >= THRESHOLD_AQI {
        reasons.push(ReasonCode::AirQualityExposure);
    }
    if contributions.attendance >= THRESHOLD_ATTENDANCE {
        reasons.push(ReasonCode::LowAttendancePattern);
    }
    if reasons.is_empty() {
        reasons.push(ReasonCode::BaselineLowRisk);
    }
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero() -> Contributions {
        Contributions {
            bmi: 0.0,
            vaccination: 0.0,
            temperature: 0.0,
            aqi: 0.0,
            attendance: 0.0,
        }
    }

    #[test]
    fn baseline_when_nothing_triggers() {
        assert_eq!(derive_reason_codes(&zero()), vec![ReasonCode::BaselineLowRisk]);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let c = Contributions {
            bmi: THRESHOLD_BMI,
            vaccination: THRESHOLD_VACCINATION,
            temperature: THRESHOLD_HEAT,
            aqi: THRESHOLD_AQI,
            attendance: THRESHOLD_ATTENDANCE,
        };
        assert_eq!(
            derive_reason_codes(&c),
            vec![
                ReasonCode::BmiOutOfHealthyRange,
                ReasonCode::VaccinationDelayOrIncomplete,
                ReasonCode::HeatStressRisk,
                ReasonCode::AirQualityExposure,
                ReasonCode::LowAttendancePattern,
            ]
        );
    }

    #[test]
    fn no_baseline_when_any_code_fires() {
        let mut c = zero();
        c.attendance = THRESHOLD_ATTENDANCE;
        let reasons = derive_reason_codes(&c);
        assert_eq!(reasons, vec![ReasonCode::LowAttendancePattern]);
        assert!(!reasons.contains(&ReasonCode::BaselineLowRisk));
    }
}
