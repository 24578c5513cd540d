//! Weighted aggregation, bounding, and level classification.
//!
//! Weights are fixed and sum to 1.0. The total score is the sum of the
//! unrounded weighted contributions, rounded to 4 decimal places and then
//! clamped to [0, 1]. The level is classified from the bounded score, never
//! from the raw sum.

/// Factor weight for BMI.
pub const WEIGHT_BMI: f64 = 0.30;
/// Factor weight for vaccination status.
pub const WEIGHT_VACCINATION: f64 = 0.20;
/// Factor weight for heat stress.
pub const WEIGHT_HEAT: f64 = 0.25;
/// Factor weight for air quality.
pub const WEIGHT_AQI: f64 = 0.15;
/// Factor weight for attendance.
pub const WEIGHT_ATTENDANCE: f64 = 0.10;

/// Risk level classified from the bounded score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a bounded score.
    ///
    /// `>=0.7 -> High`, `>=0.4 -> Medium`, else `Low`.
    pub fn classify(score: f64) -> Self {
        if score >= 0.7 {
            RiskLevel::High
        } else if score >= 0.4 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Wire form of the level (`LOW` / `MEDIUM` / `HIGH`).
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

/// Weighted per-factor contributions.
///
/// Values here are factor score x weight. Reason-code thresholds compare
/// against the unrounded values; the reported map uses [`Contributions::rounded`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contributions {
    pub bmi: f64,
    pub vaccination: f64,
    pub temperature: f64,
    pub aqi: f64,
    pub attendance: f64,
}

impl Contributions {
    /// Weight the five raw factor scores.
    pub fn from_factors(
        bmi_score: f64,
        vaccination_score: f64,
        heat_score: f64,
        aqi_score: f64,
        attendance_score: f64,
    ) -> Self {
        Self {
            bmi: bmi_score * WEIGHT_BMI,
            vaccination: vaccination_score * WEIGHT_VACCINATION,
            temperature: heat_score * WEIGHT_HEAT,
            aqi: aqi_score * WEIGHT_AQI,
            attendance: attendance_score * WEIGHT_ATTENDANCE,
        }
    }

    /// Sum of the unrounded contributions.
    pub fn total(&self) -> f64 {
        self.bmi + self.vaccination + self.temperature + self.aqi + self.attendance
    }

    /// Copy with every contribution rounded to 4 decimal places, for reporting.
    pub fn rounded(&self) -> Self {
        Self {
            bmi: round4(self.bmi),
            vaccination: round4(self.vaccination),
            temperature: round4(self.temperature),
            aqi: round4(self.aqi),
            attendance: round4(self.attendance),
        }
    }
}

/// Round to 4 decimal places.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Round to 4 decimal places, then clamp to [0, 1].
pub fn bounded_score(raw_total: f64) -> f64 {
    round4(raw_total).clamp(0.0, 1.0)
}
