//! The risk evaluation pipeline.
//!
//! A linear transform: input factors -> per-factor risk -> weighted
//! contributions -> bounded score -> level -> reason codes -> actions.
//! Pure and total over validated input; identical input always yields an
//! identical assessment.

use crate::action::{Action, map_risk_to_actions};
use crate::factor::{
    aqi_factor, attendance_factor, bmi_factor, heatwave_factor, vaccination_factor,
};
use crate::reason::{ReasonCode, derive_reason_codes};
use crate::score::{Contributions, RiskLevel, bounded_score};

/// Rule-table version reported in every assessment. Downstream consumers use
/// it to detect rule changes.
pub const MODEL_VERSION: &str = "risk-engine-rule-v2";

/// Validated input factors for one student.
///
/// Boundary validation guarantees `bmi > 0` and `attendance_ratio` in [0, 1]
/// before this struct is built; the engine does not re-check.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskInput {
    pub bmi: f64,
    pub vaccination_status: String,
    pub temperature_c: f64,
    pub aqi: u32,
    pub attendance_ratio: f64,
}

/// Complete assessment for one input.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    /// Bounded score in [0, 1], rounded to 4 decimal places.
    pub score: f64,
    /// Level classified from the bounded score.
    pub level: RiskLevel,
    /// Ordered reason codes, never empty.
    pub reason_codes: Vec<ReasonCode>,
    /// Weighted contributions rounded to 4 decimal places.
    pub contributions: Contributions,
    /// Recommended follow-up actions in first-insertion order, never empty.
    pub recommended_actions: Vec<Action>,
}

// --- Metrics -------------------------------------------------------------

/// Observability counters for engine outcomes.
#[derive(Debug, Default)]
pub struct EngineMetrics {
    evaluated_total: u64,
    level_low_total: u64,
    level_medium_total: u64,
    level_high_total: u64,
}

impl EngineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluated_total(&self) -> u64 {
        self.evaluated_total
    }

    pub fn level_low_total(&self) -> u64 {
        self.level_low_total
    }

    pub fn level_medium_total(&self) -> u64 {
        self.level_medium_total
    }

    pub fn level_high_total(&self) -> u64 {
        self.level_high_total
    }

    fn record(&mut self, level: RiskLevel) {
        self.evaluated_total += 1;
        match level {
            RiskLevel::Low => self.level_low_total += 1,
            RiskLevel::Medium => self.level_medium_total += 1,
            RiskLevel::High => self.level_high_total += 1,
        }
    }
}

// --- Pipeline ------------------------------------------------------------

/// Evaluate one input through the full pipeline.
///
/// Reason thresholds are checked against the 4-decimal rounded weighted
/// contributions, the same values the assessment reports. Rounding first
/// keeps threshold edges exact: a factor of 0.7 under weight 0.20 must land
/// on 0.14, not one ulp under it.
pub fn evaluate(input: &RiskInput, metrics: &mut EngineMetrics) -> RiskAssessment {
    let raw = Contributions::from_factors(
        bmi_factor(input.bmi),
        vaccination_factor(&input.vaccination_status),
        heatwave_factor(input.temperature_c),
        aqi_factor(input.aqi),
        attendance_factor(input.attendance_ratio),
    );
    let contributions = raw.rounded();

    // The score is rounded once, from the unrounded total, not from the
    // per-factor rounded values.
    let score = bounded_score(raw.total());
    let level = RiskLevel::classify(score);
    let reason_codes = derive_reason_codes(&contributions);
    let recommended_actions = map_risk_to_actions(level, &reason_codes);

    metrics.record(level);
    tracing::debug!(
        "RiskAssessed score={} level={:?} reasons={} actions={}",
        score,
        level,
        reason_codes.len(),
        recommended_actions.len()
    );

    RiskAssessment {
        score,
        level,
        reason_codes,
        contributions,
        recommended_actions,
    }
}
